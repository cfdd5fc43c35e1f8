//! Error types for grid access.

use thiserror::Error;

use crate::geom::Point;

/// Errors from [`Grid`](crate::Grid) coordinate access.
///
/// Out-of-range coordinates are rejected before any mutation takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// A coordinate outside `[0, size)` on either axis.
    #[error("position {pos} out of range for a {size}x{size} grid")]
    OutOfRange { pos: Point, size: i32 },
}
