//! Pure movement rules: one command applied to one position.
//!
//! Nothing here holds state. [`checked_move`] reports leaving the grid as a
//! [`MoveOutcome`] value; deciding what that means for a rover is left to the
//! [`simulation`](crate::simulation) runner.

use crate::rover::{Command, Position};
use serde::{Deserialize, Serialize};

/// Size of the plateau the rovers drive on.
///
/// Valid coordinates are `0..=width` by `0..=height`; both upper bounds are
/// inclusive, so a `4 x 8` grid has 5 columns and 9 rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDimensions {
    pub width: u32,
    pub height: u32,
}

impl GridDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns true if `(x, y)` lies on the grid.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        // Widen so grids larger than i32::MAX still compare correctly.
        let (x, y) = (i64::from(x), i64::from(y));
        (0..=i64::from(self.width)).contains(&x) && (0..=i64::from(self.height)).contains(&y)
    }
}

/// Result of a bounds-checked forward move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The step stayed on the grid.
    Moved(Position),
    /// The step would have left the grid; the caller keeps its old position.
    OffGrid,
}

/// Steps one cell in the current heading without any bounds check.
pub fn advance(position: Position) -> Position {
    // Wrapping keeps an i32::MAX step from panicking; the result is off any grid.
    position.with_coords(
        position
            .coords()
            .wrapping_add(position.orientation.forward()),
    )
}

/// Steps one cell forward, refusing to leave `grid`.
pub fn checked_move(grid: &GridDimensions, position: Position) -> MoveOutcome {
    let next = advance(position);
    if grid.contains(next.x, next.y) {
        MoveOutcome::Moved(next)
    } else {
        MoveOutcome::OffGrid
    }
}

/// Applies a quarter turn. Coordinates never change and a turn cannot fail.
///
/// [`Command::Forward`] is not a rotation and leaves `position` untouched.
pub fn rotate(command: Command, position: Position) -> Position {
    let orientation = match command {
        Command::RotateLeft => position.orientation.left(),
        Command::RotateRight => position.orientation.right(),
        Command::Forward => position.orientation,
    };
    position.with_orientation(orientation)
}
