//! Route reconstruction from recorded parent links.

use gridpath_core::{CellStatus, Grid, GridError, Point};
use thiserror::Error;

use crate::greedy::ParentMap;

/// Errors from route reconstruction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The parent chain missed a link before reaching the start.
    ///
    /// An internal invariant violation: it cannot happen with the parent
    /// map of a successful search run.
    #[error("parent chain broken at {at}")]
    BrokenChain { at: Point },
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Walk `parents` from `goal` back to `start`, marking every strictly
/// intermediate cell [`CellStatus::Path`].
///
/// Returns the route ordered start to goal, endpoints included. The start
/// keeps its own marker and the goal keeps whatever the search last wrote;
/// only the cells between them are repainted. The walk takes at most one
/// step per recorded parent, so it terminates even on a corrupt map.
pub fn reconstruct(
    grid: &mut Grid,
    parents: &ParentMap,
    start: Point,
    goal: Point,
) -> Result<Vec<Point>, PathError> {
    let mut route = vec![goal];
    let mut current = goal;
    let bound = parents.len() + 1;

    while current != start {
        if route.len() > bound {
            return Err(PathError::BrokenChain { at: current });
        }
        let &prev = parents
            .get(&current)
            .ok_or(PathError::BrokenChain { at: current })?;
        if prev != start {
            grid.set_status(prev, CellStatus::Path)?;
        }
        route.push(prev);
        current = prev;
    }

    route.reverse();
    log::debug!("route marked: {} hops", route.len() - 1);
    Ok(route)
}
