//! # martian-robots
//!
//! Simulates robots exploring the rectangular surface of a planet. Each robot
//! follows a program of turns and forward steps; a robot that steps off the
//! edge is lost, but leaves a *scent* behind that stops later robots from
//! falling off at the same point.
//!
//! The simulation core ([`grid`], [`orientation`], [`scent`], [`engine`],
//! [`planet`]) is pure and infallible. Text input and output live in
//! [`parser`] and [`report`].

pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod orientation;
pub mod parser;
pub mod planet;
pub mod report;
pub mod robot;
pub mod scent;

pub use config::SimulationConfig;
pub use engine::*;
pub use error::{Error, GridError, ParseError, Result};
pub use grid::*;
pub use orientation::*;
pub use parser::*;
pub use planet::Planet;
pub use report::*;
pub use robot::*;
pub use scent::ScentRegistry;

/// The sample mission used when no input file is given.
pub const SAMPLE_INPUT: &str = "\
5 3
1 1 E
RFRFRFRF

3 2 N
FRRFLLFFRRFLL

0 3 W
LLFFFLFLFL
";
