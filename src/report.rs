//! Final robot states, ready for rendering as text or JSON.

use crate::orientation::letter_of;
use crate::planet::Planet;
use crate::robot::Robot;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Final pose and status of one robot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotReport {
    pub x: i32,
    pub y: i32,
    /// Compass letter (`N`, `E`, `S` or `W`).
    pub orientation: char,
    pub lost: bool,
}

impl From<&Robot> for RobotReport {
    fn from(robot: &Robot) -> Self {
        Self {
            x: robot.transform.position.x,
            y: robot.transform.position.y,
            orientation: letter_of(robot.transform.orientation),
            lost: robot.is_lost(),
        }
    }
}

/// Renders as `x y O`, followed by ` LOST` for a lost robot.
impl fmt::Display for RobotReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.orientation)?;
        if self.lost {
            f.write_str(" LOST")?;
        }
        Ok(())
    }
}

/// Outcome of a whole simulation run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// One entry per robot, in input order.
    pub robots: Vec<RobotReport>,

    /// Scented grid points, sorted by `(x, y)`.
    pub scents: Vec<[i32; 2]>,
}

impl SimulationReport {
    pub fn from_planet(planet: &Planet) -> Self {
        let mut scents: Vec<[i32; 2]> = planet.scents().iter().map(|p| p.to_array()).collect();
        scents.sort_unstable();

        Self {
            robots: planet.robots().iter().map(RobotReport::from).collect(),
            scents,
        }
    }

    /// One line per robot, newline-terminated.
    pub fn to_text(&self) -> String {
        self.robots.iter().map(|r| format!("{r}\n")).collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
