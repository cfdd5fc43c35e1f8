//! **gridpath-greedy** — greedy best-first search over an obstacle grid,
//! with step tracing and interactive editing.
//!
//! The crate has two halves:
//!
//! - The **search engine**: [`search`] expands cells in order of their
//!   Euclidean estimate to the goal ([`euclidean`]), drawn from an
//!   insertion-ordered [`OpenSet`], and notifies an observer once per
//!   expansion. A successful run yields parent links that [`reconstruct`]
//!   turns into a marked route. Accumulated path cost is never considered,
//!   so routes are heuristically greedy rather than shortest; that is the
//!   point of the algorithm, not a defect.
//! - The **editing controller**: [`Editor`] owns the grid and translates
//!   abstract input events (designate start, designate goal, paint
//!   barriers, clear, run, reset) into grid mutations and search runs.
//!
//! # Example
//!
//! ```
//! use gridpath_core::{Context, Grid, Point};
//! use gridpath_greedy::{Outcome, search};
//!
//! let mut grid = Grid::new(3);
//! let ctx = Context::new();
//! let outcome = search(&mut grid, Point::ZERO, Point::new(2, 2), &ctx, |_, _| {})?;
//! assert!(matches!(outcome, Outcome::Found(_)));
//! # Ok::<(), gridpath_core::GridError>(())
//! ```

mod distance;
mod editor;
mod greedy;
mod open;
mod path;

pub use distance::euclidean;
pub use editor::{Editor, Endpoints, RunError, RunStatus};
pub use greedy::{Outcome, ParentMap, search};
pub use open::OpenSet;
pub use path::{PathError, reconstruct};
