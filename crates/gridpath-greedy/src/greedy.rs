//! The greedy best-first search engine.
//!
//! The engine always expands the open cell with the smallest Euclidean
//! estimate to the goal, ignoring accumulated path cost entirely. A cell's
//! score and parent are fixed at first discovery and never revised, and a
//! closed cell is never re-examined. The resulting route is heuristically
//! greedy, not shortest; preserving that behavior is deliberate, so do not
//! "improve" this into A*.

use std::collections::{HashMap, HashSet};

use gridpath_core::{CellStatus, Context, Grid, GridError, Point};

use crate::distance::euclidean;
use crate::open::OpenSet;

/// Parent links recorded at discovery, sufficient to reconstruct the route.
pub type ParentMap = HashMap<Point, Point>;

/// The result of one search run.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// The goal was dequeued; the parent map reconstructs the route.
    Found(ParentMap),
    /// The open set ran dry before the goal was reached. A normal result,
    /// not an error: no route exists under the current barriers.
    Exhausted,
    /// The context was cancelled at a step boundary.
    Cancelled,
}

/// Run a greedy best-first search from `start` to `goal` over `grid`.
///
/// `on_step` is invoked once per dequeued cell, right after its status
/// flips to [`CellStatus::Visited`] (the start keeps its own marker). A
/// rendering layer hangs its mid-search redraw here; the callback receives
/// a shared borrow, so it can read every cell's status but cannot mutate
/// the grid. It must return promptly, the search blocks on it.
///
/// Discovered cells are marked [`CellStatus::Frontier`]. Adjacency is read
/// from the grid as it stands at expansion time, so barrier edits made
/// since any previous run are always honored.
///
/// `ctx` is polled at every step boundary; a cancelled context stops the
/// run with [`Outcome::Cancelled`] before the next expansion.
pub fn search<F>(
    grid: &mut Grid,
    start: Point,
    goal: Point,
    ctx: &Context,
    mut on_step: F,
) -> Result<Outcome, GridError>
where
    F: FnMut(&Grid, Point),
{
    // Reject out-of-range endpoints before any mutation.
    grid.status(start)?;
    grid.status(goal)?;

    let mut open = OpenSet::new();
    let mut closed: HashSet<Point> = HashSet::new();
    let mut parents: ParentMap = HashMap::new();
    open.insert(start, euclidean(start, goal));

    loop {
        if ctx.is_done() {
            log::debug!("search cancelled after {} expansions", closed.len());
            return Ok(Outcome::Cancelled);
        }
        let Some((current, h)) = open.pop() else {
            break;
        };

        closed.insert(current);
        if grid.status(current)? != CellStatus::Start {
            grid.set_status(current, CellStatus::Visited)?;
        }
        log::trace!("expanding {} (h = {:.3})", current, h);
        on_step(grid, current);

        if current == goal {
            log::debug!("goal reached after {} expansions", closed.len());
            return Ok(Outcome::Found(parents));
        }

        for n in grid.passable_neighbors(current) {
            if closed.contains(&n) || open.contains(n) {
                continue;
            }
            parents.insert(n, current);
            open.insert(n, euclidean(n, goal));
            grid.set_status(n, CellStatus::Frontier)?;
        }
    }

    log::debug!("open set exhausted after {} expansions", closed.len());
    Ok(Outcome::Exhausted)
}
