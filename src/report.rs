//! Simulation output and its text/JSON renderings.

use crate::rover::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Final state of one rover once its command sequence has been replayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverResult {
    /// Last position held on the grid. For a lost rover this is where it stood
    /// before the move that would have left the grid.
    pub position: Position,

    /// True if the rover tried to drive off the grid.
    pub lost: bool,
}

/// Renders as `(x, y, O)` or `(x, y, O) LOST`.
impl fmt::Display for RoverResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.position)?;
        if self.lost {
            write!(f, " LOST")?;
        }
        Ok(())
    }
}

/// Results for every rover of a mission, in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionReport {
    pub results: Vec<RoverResult>,
}

impl MissionReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, result: RoverResult) {
        self.results.push(result);
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Number of rovers that drove off the grid.
    pub fn lost_count(&self) -> usize {
        self.results.iter().filter(|r| r.lost).count()
    }

    /// Pretty-printed JSON form of the report.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl FromIterator<RoverResult> for MissionReport {
    fn from_iter<I: IntoIterator<Item = RoverResult>>(iter: I) -> Self {
        Self {
            results: iter.into_iter().collect(),
        }
    }
}

/// One line per rover, no trailing newline.
impl fmt::Display for MissionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, result) in self.results.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{result}")?;
        }
        Ok(())
    }
}
