//! Abstract interaction events: [`InputEvent`].
//!
//! The input layer (mouse, keyboard, whatever) translates its device events
//! into these values, with coordinates already converted to grid indices.
//! The editing controller consumes them without knowing anything about the
//! device they came from.

use crate::geom::Point;

/// A discrete interaction event, in grid coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputEvent {
    /// Primary action on a cell: designate the start, then the goal, then
    /// paint barriers.
    Primary(Point),
    /// Secondary action on a cell: clear it back to empty.
    Secondary(Point),
    /// Launch a search with the current endpoints.
    Run,
    /// Rebuild the grid, dropping both endpoints.
    Reset,
}
