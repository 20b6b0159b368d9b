//! Rover state and the commands it understands.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Compass heading of a rover.
///
/// Headings cycle clockwise: `N -> E -> S -> W -> N`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    N,
    E,
    S,
    W,
}

impl Orientation {
    /// Headings in clockwise order, indexed by [`index`](Self::index).
    pub const CLOCKWISE: [Orientation; 4] = [Self::N, Self::E, Self::S, Self::W];

    /// Position of this heading in the clockwise cycle (`N=0, E=1, S=2, W=3`).
    pub fn index(self) -> usize {
        match self {
            Self::N => 0,
            Self::E => 1,
            Self::S => 2,
            Self::W => 3,
        }
    }

    /// Inverse of [`index`](Self::index); wraps modulo 4.
    pub fn from_index(index: usize) -> Self {
        Self::CLOCKWISE[index % 4]
    }

    /// Unit step taken by a forward move with this heading.
    pub fn forward(self) -> IVec2 {
        match self {
            Self::N => IVec2::Y,
            Self::E => IVec2::X,
            Self::S => IVec2::NEG_Y,
            Self::W => IVec2::NEG_X,
        }
    }

    /// Heading after a quarter turn counter-clockwise.
    pub fn left(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Heading after a quarter turn clockwise.
    pub fn right(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Single-letter form used by the parser and the report.
    pub fn as_char(self) -> char {
        match self {
            Self::N => 'N',
            Self::E => 'E',
            Self::S => 'S',
            Self::W => 'W',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'N' => Some(Self::N),
            'E' => Some(Self::E),
            'S' => Some(Self::S),
            'W' => Some(Self::W),
            _ => None,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Grid coordinates plus heading.
///
/// Coordinates are signed so a step past the origin is representable before
/// the bounds check rejects it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub orientation: Orientation,
}

impl Position {
    pub fn new(x: i32, y: i32, orientation: Orientation) -> Self {
        Self { x, y, orientation }
    }

    /// Coordinates as a vector.
    pub fn coords(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    /// Same heading, new coordinates.
    pub fn with_coords(self, coords: IVec2) -> Self {
        Self {
            x: coords.x,
            y: coords.y,
            ..self
        }
    }

    /// Same coordinates, new heading.
    pub fn with_orientation(self, orientation: Orientation) -> Self {
        Self {
            orientation,
            ..self
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.orientation)
    }
}

/// A single instruction in a rover's command sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Step one cell in the current heading (`F`).
    Forward,
    /// Quarter turn counter-clockwise (`L`).
    RotateLeft,
    /// Quarter turn clockwise (`R`).
    RotateRight,
}

impl Command {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'F' => Some(Self::Forward),
            'L' => Some(Self::RotateLeft),
            'R' => Some(Self::RotateRight),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Forward => 'F',
            Self::RotateLeft => 'L',
            Self::RotateRight => 'R',
        }
    }
}

/// Starting position and the commands one rover will replay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverSpec {
    pub position: Position,
    pub commands: Vec<Command>,
}

impl RoverSpec {
    pub fn new(position: Position, commands: impl Into<Vec<Command>>) -> Self {
        Self {
            position,
            commands: commands.into(),
        }
    }
}
