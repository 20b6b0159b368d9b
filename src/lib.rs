//! # rover-sim
//!
//! Simulates rovers driving on a bounded rectangular grid.
//!
//! Each rover starts at a [`Position`] and replays a sequence of [`Command`]s:
//! step forward, or turn a quarter left or right. A forward step that would leave
//! the grid marks the rover *lost*; it keeps its last on-grid position and ignores
//! the rest of its commands. Rovers never interact, so a [`Mission`] is just each
//! rover simulated in turn, with results reported in input order.

pub mod error;
pub mod movement;
pub mod parse;
pub mod report;
pub mod rover;
pub mod simulation;

pub use error::*;
pub use movement::*;
pub use parse::*;
pub use report::*;
pub use rover::*;
pub use simulation::*;
