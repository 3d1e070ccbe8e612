//! Robot pose, status and program types.

use crate::orientation::{Orientation, Rotation};
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// A robot's pose at one moment: where it stands and which way it faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transform {
    /// Grid point the robot occupies. Always within the planet's bounds.
    pub position: IVec2,

    /// Compass heading.
    pub orientation: Orientation,
}

impl Transform {
    pub fn new(x: i32, y: i32, orientation: Orientation) -> Self {
        Self {
            position: IVec2::new(x, y),
            orientation,
        }
    }
}

/// Whether a robot is still on the planet.
///
/// `Lost` is terminal: the robot's transform stays frozen at its last pose on the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Ok,
    Lost,
}

/// Commands a robot program is made of.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    /// Turn 90 degrees counter-clockwise in place (`L`).
    TurnLeft,
    /// Turn 90 degrees clockwise in place (`R`).
    TurnRight,
    /// Step one grid point in the current heading (`F`).
    MoveForward,
}

impl Instruction {
    /// The rotation this instruction performs, if it is a turn.
    pub fn rotation(self) -> Option<Rotation> {
        match self {
            Instruction::TurnLeft => Some(Rotation::Left),
            Instruction::TurnRight => Some(Rotation::Right),
            Instruction::MoveForward => None,
        }
    }
}

/// A robot on a planet, with its program fixed at creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Robot {
    pub transform: Transform,
    pub status: Status,
    program: Vec<Instruction>,
}

impl Robot {
    pub fn new(transform: Transform, program: Vec<Instruction>) -> Self {
        Self {
            transform,
            status: Status::Ok,
            program,
        }
    }

    pub fn program(&self) -> &[Instruction] {
        &self.program
    }

    pub fn is_lost(&self) -> bool {
        self.status == Status::Lost
    }
}
