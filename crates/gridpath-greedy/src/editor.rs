//! The interactive editing controller.
//!
//! [`Editor`] owns the grid and translates discrete input events into grid
//! mutations and search runs. It is the component responsible for the
//! start/goal uniqueness invariants; the grid itself writes whatever it is
//! told.

use gridpath_core::{CellStatus, Context, Grid, GridError, InputEvent, Point};
use thiserror::Error;

use crate::greedy::{self, Outcome};
use crate::path::{self, PathError};

/// Endpoint designation state.
///
/// There is deliberately no "goal without start" state: the first endpoint
/// designated is always the start, and clearing the start drops the goal
/// with it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endpoints {
    /// Neither endpoint designated.
    #[default]
    None,
    /// Only the start is designated.
    StartOnly(Point),
    /// Both endpoints designated; a run may launch.
    Both { start: Point, goal: Point },
}

impl Endpoints {
    /// The designated start, if any.
    pub fn start(self) -> Option<Point> {
        match self {
            Self::None => None,
            Self::StartOnly(start) | Self::Both { start, .. } => Some(start),
        }
    }

    /// The designated goal, if any.
    pub fn goal(self) -> Option<Point> {
        match self {
            Self::Both { goal, .. } => Some(goal),
            _ => None,
        }
    }
}

/// Errors from the run pipeline.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Path(#[from] PathError),
}

/// What a run command produced.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunStatus {
    /// Both endpoints are not yet designated; nothing happened.
    NotReady,
    /// Every reachable cell was expanded without reaching the goal.
    NoPath,
    /// The run was cancelled at a step boundary.
    Cancelled,
    /// A route was found and marked; ordered start to goal.
    Found(Vec<Point>),
}

/// The interactive editing controller. Owns the grid for its whole life.
#[derive(Debug)]
pub struct Editor {
    grid: Grid,
    endpoints: Endpoints,
}

impl Editor {
    /// Create an editor over a fresh `size` x `size` grid.
    pub fn new(size: i32) -> Self {
        Self {
            grid: Grid::new(size),
            endpoints: Endpoints::None,
        }
    }

    /// The grid, for painting.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The current endpoint designation.
    #[inline]
    pub fn endpoints(&self) -> Endpoints {
        self.endpoints
    }

    /// Primary action on `p`: designate the start, then the goal, then
    /// paint barriers.
    ///
    /// Acting on the current start or goal is a no-op, which is also what
    /// keeps the goal from ever landing on the start cell. Once both
    /// endpoints exist, any other cell is painted as a barrier, including
    /// stale search marks left over from a previous run.
    pub fn primary_action(&mut self, p: Point) -> Result<(), GridError> {
        if self.grid.status(p)?.is_endpoint() {
            return Ok(());
        }
        match self.endpoints {
            Endpoints::None => {
                self.grid.set_status(p, CellStatus::Start)?;
                self.endpoints = Endpoints::StartOnly(p);
                log::debug!("start designated at {}", p);
            }
            Endpoints::StartOnly(start) => {
                self.grid.set_status(p, CellStatus::Goal)?;
                self.endpoints = Endpoints::Both { start, goal: p };
                log::debug!("goal designated at {}", p);
            }
            Endpoints::Both { .. } => {
                self.grid.set_status(p, CellStatus::Barrier)?;
            }
        }
        Ok(())
    }

    /// Secondary action on `p`: reset the cell to empty.
    ///
    /// Clearing the start also clears the goal, since a goal without a
    /// start is not a representable state. Clearing the goal regresses to
    /// start-only.
    pub fn secondary_action(&mut self, p: Point) -> Result<(), GridError> {
        let status = self.grid.status(p)?;
        self.grid.set_status(p, CellStatus::Empty)?;
        match (status, self.endpoints) {
            (CellStatus::Start, Endpoints::Both { goal, .. }) => {
                self.grid.set_status(goal, CellStatus::Empty)?;
                self.endpoints = Endpoints::None;
                log::debug!("start cleared, goal dropped with it");
            }
            (CellStatus::Start, _) => {
                self.endpoints = Endpoints::None;
                log::debug!("start cleared");
            }
            (CellStatus::Goal, Endpoints::Both { start, .. }) => {
                self.endpoints = Endpoints::StartOnly(start);
                log::debug!("goal cleared");
            }
            _ => {}
        }
        Ok(())
    }

    /// Launch a search with the current endpoints.
    ///
    /// A silent no-op ([`RunStatus::NotReady`]) unless both endpoints are
    /// designated. Visualization marks from a previous run are left in
    /// place; the new run repaints the cells it touches.
    pub fn run<F>(&mut self, ctx: &Context, on_step: F) -> Result<RunStatus, RunError>
    where
        F: FnMut(&Grid, Point),
    {
        let Endpoints::Both { start, goal } = self.endpoints else {
            return Ok(RunStatus::NotReady);
        };
        match greedy::search(&mut self.grid, start, goal, ctx, on_step)? {
            Outcome::Found(parents) => {
                let route = path::reconstruct(&mut self.grid, &parents, start, goal)?;
                Ok(RunStatus::Found(route))
            }
            Outcome::Exhausted => Ok(RunStatus::NoPath),
            Outcome::Cancelled => Ok(RunStatus::Cancelled),
        }
    }

    /// Rebuild the grid fully empty and drop both endpoint references.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.endpoints = Endpoints::None;
        log::debug!("grid reset");
    }

    /// Dispatch one abstract input event.
    ///
    /// Editing events yield `Ok(None)`; a run command yields its status.
    pub fn apply<F>(
        &mut self,
        event: InputEvent,
        ctx: &Context,
        on_step: F,
    ) -> Result<Option<RunStatus>, RunError>
    where
        F: FnMut(&Grid, Point),
    {
        match event {
            InputEvent::Primary(p) => {
                self.primary_action(p)?;
                Ok(None)
            }
            InputEvent::Secondary(p) => {
                self.secondary_action(p)?;
                Ok(None)
            }
            InputEvent::Run => self.run(ctx, on_step).map(Some),
            InputEvent::Reset => {
                self.reset();
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_: &Grid, _: Point) {}

    #[test]
    fn primary_designates_start_then_goal_then_barriers() {
        let mut ed = Editor::new(3);
        assert_eq!(ed.endpoints(), Endpoints::None);

        ed.primary_action(Point::new(0, 0)).unwrap();
        assert_eq!(ed.endpoints(), Endpoints::StartOnly(Point::new(0, 0)));
        assert_eq!(ed.grid().status(Point::new(0, 0)), Ok(CellStatus::Start));

        ed.primary_action(Point::new(2, 2)).unwrap();
        assert_eq!(
            ed.endpoints(),
            Endpoints::Both {
                start: Point::new(0, 0),
                goal: Point::new(2, 2),
            }
        );
        assert_eq!(ed.grid().status(Point::new(2, 2)), Ok(CellStatus::Goal));

        ed.primary_action(Point::new(1, 1)).unwrap();
        assert_eq!(ed.grid().status(Point::new(1, 1)), Ok(CellStatus::Barrier));
        // Exactly one start and one goal, always.
        assert_eq!(ed.grid().count(CellStatus::Start), 1);
        assert_eq!(ed.grid().count(CellStatus::Goal), 1);
    }

    #[test]
    fn goal_on_the_start_cell_is_refused() {
        let mut ed = Editor::new(3);
        let start = Point::new(1, 1);
        ed.primary_action(start).unwrap();
        // A second primary on the same cell would designate the goal there.
        ed.primary_action(start).unwrap();
        assert_eq!(ed.endpoints(), Endpoints::StartOnly(start));
        assert_eq!(ed.grid().status(start), Ok(CellStatus::Start));
    }

    #[test]
    fn start_may_land_on_a_barrier_cell() {
        let mut ed = Editor::new(3);
        let p = Point::new(1, 1);
        // Paint a barrier through the full designate-then-paint sequence,
        // then reset only the endpoints via secondary actions.
        ed.primary_action(Point::new(0, 0)).unwrap();
        ed.primary_action(Point::new(2, 2)).unwrap();
        ed.primary_action(p).unwrap();
        ed.secondary_action(Point::new(0, 0)).unwrap();

        ed.primary_action(p).unwrap();
        assert_eq!(ed.grid().status(p), Ok(CellStatus::Start));
        assert_eq!(ed.endpoints(), Endpoints::StartOnly(p));
    }

    #[test]
    fn clearing_the_start_drops_the_goal_too() {
        let mut ed = Editor::new(3);
        let start = Point::new(0, 0);
        let goal = Point::new(2, 2);
        ed.primary_action(start).unwrap();
        ed.primary_action(goal).unwrap();

        ed.secondary_action(start).unwrap();
        assert_eq!(ed.endpoints(), Endpoints::None);
        assert_eq!(ed.grid().status(start), Ok(CellStatus::Empty));
        assert_eq!(ed.grid().status(goal), Ok(CellStatus::Empty));
    }

    #[test]
    fn clearing_the_goal_regresses_to_start_only() {
        let mut ed = Editor::new(3);
        let start = Point::new(0, 0);
        let goal = Point::new(2, 2);
        ed.primary_action(start).unwrap();
        ed.primary_action(goal).unwrap();

        ed.secondary_action(goal).unwrap();
        assert_eq!(ed.endpoints(), Endpoints::StartOnly(start));
        assert_eq!(ed.grid().status(goal), Ok(CellStatus::Empty));
        assert_eq!(ed.grid().status(start), Ok(CellStatus::Start));
    }

    #[test]
    fn run_without_both_endpoints_is_a_silent_no_op() {
        let mut ed = Editor::new(3);
        let ctx = Context::new();
        assert_eq!(ed.run(&ctx, noop).unwrap(), RunStatus::NotReady);

        ed.primary_action(Point::new(0, 0)).unwrap();
        assert_eq!(ed.run(&ctx, noop).unwrap(), RunStatus::NotReady);
        // The grid was not touched by either attempt.
        assert_eq!(ed.grid().count(CellStatus::Visited), 0);
        assert_eq!(ed.grid().count(CellStatus::Frontier), 0);
    }

    #[test]
    fn run_through_a_one_cell_gap() {
        let mut ed = Editor::new(3);
        ed.primary_action(Point::new(0, 0)).unwrap();
        ed.primary_action(Point::new(2, 2)).unwrap();
        ed.primary_action(Point::new(1, 0)).unwrap();
        ed.primary_action(Point::new(1, 2)).unwrap();

        let route = match ed.run(&Context::new(), noop).unwrap() {
            RunStatus::Found(route) => route,
            other => panic!("expected a route, got {other:?}"),
        };
        assert!(route.contains(&Point::new(1, 1)));
        assert_eq!(ed.grid().status(Point::new(1, 1)), Ok(CellStatus::Path));
        assert_eq!(ed.grid().status(Point::new(0, 0)), Ok(CellStatus::Start));
    }

    #[test]
    fn run_against_a_full_wall_reports_no_path() {
        let mut ed = Editor::new(3);
        ed.primary_action(Point::new(0, 0)).unwrap();
        ed.primary_action(Point::new(2, 2)).unwrap();
        for y in 0..3 {
            ed.primary_action(Point::new(1, y)).unwrap();
        }
        assert_eq!(ed.run(&Context::new(), noop).unwrap(), RunStatus::NoPath);
    }

    #[test]
    fn barrier_edits_between_runs_are_honored() {
        let mut ed = Editor::new(3);
        ed.primary_action(Point::new(0, 0)).unwrap();
        ed.primary_action(Point::new(2, 2)).unwrap();
        ed.primary_action(Point::new(1, 0)).unwrap();
        ed.primary_action(Point::new(1, 2)).unwrap();
        assert!(matches!(
            ed.run(&Context::new(), noop).unwrap(),
            RunStatus::Found(_)
        ));

        // Close the gap after the first run; the rerun must see it.
        ed.primary_action(Point::new(1, 1)).unwrap();
        assert_eq!(ed.run(&Context::new(), noop).unwrap(), RunStatus::NoPath);
    }

    #[test]
    fn barriers_paint_over_stale_search_marks() {
        let mut ed = Editor::new(3);
        ed.primary_action(Point::new(0, 0)).unwrap();
        ed.primary_action(Point::new(2, 2)).unwrap();
        ed.run(&Context::new(), noop).unwrap();

        let marked = ed
            .grid()
            .iter()
            .find(|&(_, s)| s == CellStatus::Visited || s == CellStatus::Path)
            .map(|(p, _)| p)
            .expect("a run leaves marks behind");
        ed.primary_action(marked).unwrap();
        assert_eq!(ed.grid().status(marked), Ok(CellStatus::Barrier));
    }

    #[test]
    fn reset_is_idempotent_and_total() {
        let mut ed = Editor::new(3);
        ed.primary_action(Point::new(0, 0)).unwrap();
        ed.primary_action(Point::new(2, 2)).unwrap();
        ed.primary_action(Point::new(1, 1)).unwrap();
        ed.run(&Context::new(), noop).unwrap();

        ed.reset();
        assert_eq!(ed.endpoints(), Endpoints::None);
        assert_eq!(ed.grid().count(CellStatus::Empty), 9);
        let once = ed.grid().clone();
        ed.reset();
        assert_eq!(*ed.grid(), once);
    }

    #[test]
    fn cancelled_run_reports_cancelled() {
        let mut ed = Editor::new(8);
        ed.primary_action(Point::new(0, 0)).unwrap();
        ed.primary_action(Point::new(7, 7)).unwrap();

        let ctx = Context::new();
        ctx.cancel();
        assert_eq!(ed.run(&ctx, noop).unwrap(), RunStatus::Cancelled);
    }

    #[test]
    fn apply_dispatches_events() {
        let mut ed = Editor::new(3);
        let ctx = Context::new();

        assert_eq!(
            ed.apply(InputEvent::Primary(Point::new(0, 0)), &ctx, noop)
                .unwrap(),
            None
        );
        assert_eq!(
            ed.apply(InputEvent::Primary(Point::new(2, 2)), &ctx, noop)
                .unwrap(),
            None
        );
        let status = ed.apply(InputEvent::Run, &ctx, noop).unwrap();
        assert!(matches!(status, Some(RunStatus::Found(_))));

        assert_eq!(ed.apply(InputEvent::Reset, &ctx, noop).unwrap(), None);
        assert_eq!(ed.endpoints(), Endpoints::None);
        assert_eq!(
            ed.apply(InputEvent::Secondary(Point::new(1, 1)), &ctx, noop)
                .unwrap(),
            None
        );
    }

    #[test]
    fn endpoint_accessors() {
        let mut ed = Editor::new(3);
        assert_eq!(ed.endpoints().start(), None);
        assert_eq!(ed.endpoints().goal(), None);
        ed.primary_action(Point::new(1, 0)).unwrap();
        assert_eq!(ed.endpoints().start(), Some(Point::new(1, 0)));
        assert_eq!(ed.endpoints().goal(), None);
        ed.primary_action(Point::new(1, 2)).unwrap();
        assert_eq!(ed.endpoints().goal(), Some(Point::new(1, 2)));
    }
}
