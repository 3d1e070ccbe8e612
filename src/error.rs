//! Error types for grid construction, input parsing and the CLI surface.
//!
//! The simulation core itself never fails: a robot falling off the planet is a
//! [`Status::Lost`](crate::robot::Status::Lost), not an error.

use thiserror::Error;

/// Raised when a planet size falls outside the supported range.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid size {width}x{height} is outside the supported range 0..={max}")]
    OutOfRange { width: i32, height: i32, max: i32 },
}

/// Problems found while turning input text into a [`Planet`](crate::planet::Planet).
///
/// Line numbers are 1-based and refer to the raw input, blank lines included.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("input contains no planet size line")]
    EmptyInput,

    #[error("line {line}: invalid planet size: {reason}")]
    InvalidSize { line: usize, reason: String },

    #[error("line {line}: invalid robot position: {reason}")]
    InvalidPosition { line: usize, reason: String },

    #[error("line {line}: unknown orientation '{letter}'")]
    UnknownOrientation { line: usize, letter: String },

    #[error("line {line}: unknown instruction '{letter}'")]
    UnknownInstruction { line: usize, letter: char },

    #[error("line {line}: coordinate {value} exceeds the maximum of {max}")]
    CoordinateOutOfRange { line: usize, value: i64, max: i32 },

    #[error("line {line}: start position ({x}, {y}) lies outside the planet")]
    OutsideGrid { line: usize, x: i32, y: i32 },

    #[error("line {line}: program of {len} instructions exceeds the limit of {max}")]
    ProgramTooLong { line: usize, len: usize, max: usize },

    #[error("line {line}: robot position has no instruction line")]
    MissingInstructions { line: usize },

    #[error("no valid robots in input ({skipped} records skipped)")]
    NoValidRobots { skipped: usize },
}

/// Crate-level error returned by the binary and the convenience entry points.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
