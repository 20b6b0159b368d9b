//! Runner that replays rover command sequences on a grid.
//!
//! The entry point is [`MissionRunner`]. Build one for a [`GridDimensions`],
//! then call [`MissionRunner::run`] with the rovers to drive, or
//! [`MissionRunner::simulate_rover`] for a single one. [`RoverSimulation`]
//! exposes the per-command state machine directly.

use crate::movement::{GridDimensions, MoveOutcome, checked_move, rotate};
use crate::report::{MissionReport, RoverResult};
use crate::rover::{Command, Position, RoverSpec};
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

/// Lifecycle of a single rover.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoverState {
    /// Still on the grid and accepting commands.
    Active,
    /// Tried to leave the grid. Terminal: later commands are ignored.
    Lost,
}

/// Per-rover simulation state.
///
/// Holds the current position and whether the rover is still active.
/// Nothing is shared between two simulations.
#[derive(Clone, Debug)]
pub struct RoverSimulation {
    grid: GridDimensions,
    position: Position,
    state: RoverState,
    /// Commands consumed so far, ignored ones included.
    executed: usize,
}

impl RoverSimulation {
    /// Starts an active rover at `start`.
    pub fn new(grid: GridDimensions, start: Position) -> Self {
        Self {
            grid,
            position: start,
            state: RoverState::Active,
            executed: 0,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn state(&self) -> RoverState {
        self.state
    }

    pub fn is_lost(&self) -> bool {
        self.state == RoverState::Lost
    }

    /// Applies one command and returns the resulting state.
    ///
    /// A forward move that would leave the grid marks the rover lost and keeps
    /// the position it held before the move. Once lost, every command is a no-op.
    pub fn step(&mut self, command: Command) -> RoverState {
        let index = self.executed;
        self.executed += 1;

        if self.state == RoverState::Lost {
            trace!("command #{index} ({}) ignored: rover lost", command.as_char());
            return self.state;
        }

        match command {
            Command::Forward => match checked_move(&self.grid, self.position) {
                MoveOutcome::Moved(next) => self.position = next,
                MoveOutcome::OffGrid => {
                    info!(
                        "rover lost at {} on command #{index}: next step leaves {}x{} grid",
                        self.position, self.grid.width, self.grid.height
                    );
                    self.state = RoverState::Lost;
                }
            },
            Command::RotateLeft | Command::RotateRight => {
                self.position = rotate(command, self.position);
            }
        }

        trace!(
            "command #{index} ({}) -> {}",
            command.as_char(),
            self.position
        );
        self.state
    }

    /// Consumes the simulation and produces its result.
    pub fn finish(self) -> RoverResult {
        RoverResult {
            position: self.position,
            lost: self.is_lost(),
        }
    }
}

/// Grid plus the ordered rovers to drive on it.
///
/// This is what the argument parser produces.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    pub grid: GridDimensions,
    pub rovers: Vec<RoverSpec>,
}

impl Mission {
    pub fn new(grid: GridDimensions, rovers: Vec<RoverSpec>) -> Self {
        Self { grid, rovers }
    }

    /// Runs every rover and returns their results in input order.
    pub fn run(&self) -> MissionReport {
        MissionRunner::new(self.grid).run(&self.rovers)
    }
}

/// Replays rover command sequences on a fixed grid.
#[derive(Clone, Copy, Debug)]
pub struct MissionRunner {
    grid: GridDimensions,
}

impl MissionRunner {
    pub fn new(grid: GridDimensions) -> Self {
        Self { grid }
    }

    /// Replays the full command sequence of one rover.
    pub fn simulate_rover(&self, rover: &RoverSpec) -> RoverResult {
        debug!(
            "simulating rover from {} with {} commands",
            rover.position,
            rover.commands.len()
        );

        let mut sim = RoverSimulation::new(self.grid, rover.position);
        for &command in &rover.commands {
            if sim.step(command) == RoverState::Lost {
                // Remaining commands cannot change a lost rover.
                break;
            }
        }

        let result = sim.finish();
        debug!("rover finished: {result}");
        result
    }

    /// Simulates each rover independently, preserving input order.
    pub fn run(&self, rovers: &[RoverSpec]) -> MissionReport {
        let report: MissionReport = rovers
            .iter()
            .map(|rover| self.simulate_rover(rover))
            .collect();
        debug!(
            "mission complete: {} rovers, {} lost",
            report.len(),
            report.lost_count()
        );
        report
    }
}
