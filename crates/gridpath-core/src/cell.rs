//! The [`CellStatus`] type — the single per-cell state.

/// The role of a single grid cell.
///
/// A cell holds exactly one status at a time, and that status is the sole
/// source of truth for both editing semantics and search visualization.
/// Editing writes `Empty`, `Start`, `Goal` and `Barrier`; a search run
/// writes `Frontier`, `Visited` and `Path`. Rendering layers map statuses
/// to colors on their own side of the boundary.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellStatus {
    /// Unmarked, traversable.
    #[default]
    Empty,
    /// The search origin.
    Start,
    /// The search target.
    Goal,
    /// Blocks traversal; excluded from adjacency.
    Barrier,
    /// Discovered but not yet expanded (in the open set).
    Frontier,
    /// Already expanded (in the closed set).
    Visited,
    /// On the reconstructed route.
    Path,
}

impl CellStatus {
    /// Whether the cell blocks traversal.
    #[inline]
    pub const fn is_barrier(self) -> bool {
        matches!(self, Self::Barrier)
    }

    /// Whether the cell is a designated endpoint (start or goal).
    #[inline]
    pub const fn is_endpoint(self) -> bool {
        matches!(self, Self::Start | Self::Goal)
    }
}
