//! The planet and the driver that runs its robots in order.

use crate::engine::execute;
use crate::grid::Size;
use crate::report::SimulationReport;
use crate::robot::Robot;
use crate::scent::ScentRegistry;
use tracing::{debug, info};

/// A planet surface, the robots deployed on it and the scents they leave behind.
///
/// Robot order is both execution order and report order.
#[derive(Clone, Debug)]
pub struct Planet {
    area: Size,
    robots: Vec<Robot>,
    scents: ScentRegistry,
}

impl Planet {
    /// Creates an empty planet with no robots and no scents.
    pub fn new(area: Size) -> Self {
        Self {
            area,
            robots: Vec::new(),
            scents: ScentRegistry::new(),
        }
    }

    /// Replaces the robot list in one step (builder pattern).
    pub fn with_robots(mut self, robots: Vec<Robot>) -> Self {
        self.robots = robots;
        self
    }

    pub fn add_robot(&mut self, robot: Robot) {
        self.robots.push(robot);
    }

    pub fn area(&self) -> Size {
        self.area
    }

    pub fn robots(&self) -> &[Robot] {
        &self.robots
    }

    pub fn scents(&self) -> &ScentRegistry {
        &self.scents
    }

    /// Executes every robot in order against the shared scent registry.
    ///
    /// A robot sees every scent laid by robots before it and none laid after it.
    /// Robots already lost are left untouched.
    pub fn run(&mut self) {
        for (index, robot) in self.robots.iter_mut().enumerate() {
            if robot.is_lost() {
                continue;
            }

            let execution = execute(robot.transform, robot.program(), self.area, &self.scents);
            robot.transform = execution.transform;
            robot.status = execution.status;

            debug!(
                robot = index,
                x = robot.transform.position.x,
                y = robot.transform.position.y,
                orientation = ?robot.transform.orientation,
                status = ?robot.status,
                executed = execution.executed,
                "robot finished"
            );

            if let Some(position) = execution.scent()
                && self.scents.add_scent(position)
            {
                info!(robot = index, x = position.x, y = position.y, "robot lost, scent laid");
            }
        }

        info!(
            robots = self.robots.len(),
            lost = self.robots.iter().filter(|r| r.is_lost()).count(),
            scents = self.scents.len(),
            "simulation complete"
        );
    }

    /// Runs the simulation and consumes the planet into its report.
    pub fn simulate(mut self) -> SimulationReport {
        self.run();
        SimulationReport::from_planet(&self)
    }
}
