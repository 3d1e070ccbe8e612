//! Executes a single robot's program against the planet geometry and the scents
//! laid by earlier robots.
//!
//! The engine never mutates a [`Robot`](crate::robot::Robot) or the
//! [`ScentRegistry`]. It returns an [`Execution`] by value; the caller applies it
//! and records a scent when [`Execution::scent`] says so.
//!
//! # Loss detection
//!
//! A forward move first computes the candidate position. If the candidate is on
//! the grid the robot moves there. Otherwise the *current* position is checked
//! for a scent: a scented position turns the move into a no-op, an unscented one
//! ends the program with the robot lost at its current pose.

use crate::grid::{Size, is_within_bounds};
use crate::orientation::{forward_delta, rotate};
use crate::robot::{Instruction, Status, Transform};
use crate::scent::ScentRegistry;
use glam::IVec2;
use tracing::debug;

/// Result of applying one instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// The robot turned or moved and keeps running with this pose.
    Advance(Transform),
    /// The move would have left the grid, but a scent held the robot in place.
    Held,
    /// The robot fell off the grid from its current pose.
    Fall,
}

/// Applies a single instruction to `transform`.
pub fn step(
    transform: Transform,
    instruction: Instruction,
    area: Size,
    scents: &ScentRegistry,
) -> Step {
    if let Some(rotation) = instruction.rotation() {
        return Step::Advance(Transform {
            orientation: rotate(transform.orientation, rotation),
            ..transform
        });
    }

    let candidate = transform.position + forward_delta(transform.orientation);
    if is_within_bounds(candidate, area) {
        Step::Advance(Transform {
            position: candidate,
            ..transform
        })
    } else if scents.has_scent(transform.position) {
        Step::Held
    } else {
        Step::Fall
    }
}

/// Final state of one robot after running its program.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Execution {
    /// Last pose on the grid. For a lost robot, the pose before the fatal move.
    pub transform: Transform,
    pub status: Status,
    /// Number of instructions actually executed, the fatal move included.
    pub executed: usize,
}

impl Execution {
    /// Where a scent must be laid, if the robot was lost.
    pub fn scent(&self) -> Option<IVec2> {
        match self.status {
            Status::Lost => Some(self.transform.position),
            Status::Ok => None,
        }
    }
}

/// Runs `program` from `start` until it is exhausted or the robot is lost.
///
/// Instructions after a fatal move are not executed.
pub fn execute(
    start: Transform,
    program: &[Instruction],
    area: Size,
    scents: &ScentRegistry,
) -> Execution {
    let mut transform = start;

    for (index, &instruction) in program.iter().enumerate() {
        match step(transform, instruction, area, scents) {
            Step::Advance(next) => transform = next,
            Step::Held => {
                debug!(
                    x = transform.position.x,
                    y = transform.position.y,
                    step = index,
                    "scent held robot on the edge"
                );
            }
            Step::Fall => {
                return Execution {
                    transform,
                    status: Status::Lost,
                    executed: index + 1,
                };
            }
        }
    }

    Execution {
        transform,
        status: Status::Ok,
        executed: program.len(),
    }
}
