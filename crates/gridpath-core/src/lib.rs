//! **gridpath-core** — interactive obstacle-grid path planning (core types).
//!
//! This crate provides the foundational types used across the *gridpath*
//! workspace: the [`Point`] geometry primitive, the per-cell [`CellStatus`]
//! model, the owned [`Grid`] container with its derived neighbor query,
//! abstract [`InputEvent`]s, and the cooperative cancellation token
//! [`Context`].

pub mod cell;
pub mod ctx;
pub mod error;
pub mod events;
pub mod geom;
pub mod grid;

pub use cell::CellStatus;
pub use ctx::Context;
pub use error::GridError;
pub use events::InputEvent;
pub use geom::Point;
pub use grid::Grid;
