//! Parser that turns mission text into a [`Planet`].
//!
//! The entry point is [`InputParser`]. Configure it with a [`SimulationConfig`],
//! optionally extend its [`InstructionSet`], then call [`InputParser::parse`].
//!
//! # Format
//!
//! ```text
//! 5 3
//! 1 1 E
//! RFRFRFRF
//!
//! 3 2 N
//! FRRFLLFFRRFLL
//! ```
//!
//! The first non-blank line holds the upper-right corner of the planet. Each
//! robot is a position line (`x y O`) followed by a program line. Blank lines
//! are ignored. A malformed robot record is logged and skipped; the parse only
//! fails when the planet line is bad or no robot survives.

use crate::config::SimulationConfig;
use crate::error::ParseError;
use crate::grid::{MAX_COORDINATE, Size, is_within_bounds};
use crate::orientation::orientation_from_letter;
use crate::planet::Planet;
use crate::robot::{Instruction, Robot, Transform};
use std::collections::HashMap;
use std::iter::Peekable;
use tracing::{debug, warn};

/// Maps program letters to [`Instruction`]s.
#[derive(Clone, Debug, Default)]
pub struct InstructionSet {
    map: HashMap<char, Instruction>,
}

impl InstructionSet {
    /// Creates an empty set that resolves nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// The conventional `L`, `R` and `F` commands.
    pub fn standard() -> Self {
        let mut set = Self::new();
        set.set('L', Instruction::TurnLeft);
        set.set('R', Instruction::TurnRight);
        set.set('F', Instruction::MoveForward);
        set
    }

    /// Replaces the entire letter map in one step (builder pattern).
    pub fn with_map(mut self, map: HashMap<char, Instruction>) -> Self {
        self.map = map;
        self
    }

    /// Assigns `instruction` to `letter`, replacing any previous mapping.
    pub fn set(&mut self, letter: char, instruction: Instruction) {
        self.map.insert(letter, instruction);
    }

    pub fn resolve(&self, letter: char) -> Option<Instruction> {
        self.map.get(&letter).copied()
    }
}

/// A successfully parsed planet together with the records that were rejected.
#[derive(Clone, Debug)]
pub struct ParsedInput {
    pub planet: Planet,
    pub rejected: Vec<ParseError>,
}

/// Parses mission text into a [`Planet`] ready for simulation.
pub struct InputParser {
    config: SimulationConfig,
    instructions: InstructionSet,
}

impl Default for InputParser {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

impl InputParser {
    /// Creates a parser using the standard instruction set.
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            instructions: InstructionSet::standard(),
        }
    }

    /// Replaces the instruction set (builder pattern).
    pub fn with_instructions(mut self, instructions: InstructionSet) -> Self {
        self.instructions = instructions;
        self
    }

    pub fn instructions_mut(&mut self) -> &mut InstructionSet {
        &mut self.instructions
    }

    /// Parses `input` into a planet.
    ///
    /// Robot records that fail validation are skipped and returned in
    /// [`ParsedInput::rejected`], in input order.
    pub fn parse(&self, input: &str) -> Result<ParsedInput, ParseError> {
        let mut lines = input
            .lines()
            .enumerate()
            .map(|(index, line)| (index + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty())
            .peekable();

        let (size_line, size_text) = lines.next().ok_or(ParseError::EmptyInput)?;
        let area = parse_size(size_line, size_text)?;
        debug!(width = area.width(), height = area.height(), "planet size parsed");

        let mut robots = Vec::new();
        let mut rejected = Vec::new();

        while let Some((line, text)) = lines.next() {
            match self.parse_robot(line, text, area, &mut lines) {
                Ok(robot) => robots.push(robot),
                Err(error) => {
                    warn!(%error, "skipping robot record");
                    rejected.push(error);
                }
            }
        }

        if robots.is_empty() {
            return Err(ParseError::NoValidRobots {
                skipped: rejected.len(),
            });
        }

        debug!(robots = robots.len(), rejected = rejected.len(), "input parsed");
        Ok(ParsedInput {
            planet: Planet::new(area).with_robots(robots),
            rejected,
        })
    }

    fn parse_robot<'a, I>(
        &self,
        line: usize,
        text: &str,
        area: Size,
        lines: &mut Peekable<I>,
    ) -> Result<Robot, ParseError>
    where
        I: Iterator<Item = (usize, &'a str)>,
    {
        // A program line never contains whitespace; anything that does is the
        // next robot's position, so it is left for the next record.
        let program_line = match lines.peek() {
            Some((_, next)) if !next.contains(char::is_whitespace) => lines.next(),
            _ => None,
        };

        let transform = parse_transform(line, text)?;
        if !is_within_bounds(transform.position, area) {
            return Err(ParseError::OutsideGrid {
                line,
                x: transform.position.x,
                y: transform.position.y,
            });
        }

        let (program_line, program_text) =
            program_line.ok_or(ParseError::MissingInstructions { line })?;
        let program = self.parse_program(program_line, program_text)?;

        Ok(Robot::new(transform, program))
    }

    fn parse_program(&self, line: usize, text: &str) -> Result<Vec<Instruction>, ParseError> {
        let len = text.chars().count();
        let max = self.config.max_instruction_length;
        if len > max {
            return Err(ParseError::ProgramTooLong { line, len, max });
        }

        text.chars()
            .map(|letter| {
                self.instructions
                    .resolve(letter)
                    .ok_or(ParseError::UnknownInstruction { line, letter })
            })
            .collect()
    }
}

/// Parses `input` with the default configuration and the standard instruction set.
pub fn parse_planet(input: &str) -> Result<ParsedInput, ParseError> {
    InputParser::default().parse(input)
}

fn parse_size(line: usize, text: &str) -> Result<Size, ParseError> {
    let invalid = |reason: String| ParseError::InvalidSize { line, reason };

    let fields: Vec<&str> = text.split_whitespace().collect();
    let &[width, height] = fields.as_slice() else {
        return Err(invalid(format!("expected 2 fields, found {}", fields.len())));
    };

    let parse = |field: &str| {
        field
            .parse::<i32>()
            .map_err(|e| invalid(format!("'{field}': {e}")))
    };
    Size::new(parse(width)?, parse(height)?).map_err(|e| invalid(e.to_string()))
}

fn parse_transform(line: usize, text: &str) -> Result<Transform, ParseError> {
    let invalid = |reason: String| ParseError::InvalidPosition { line, reason };

    let fields: Vec<&str> = text.split_whitespace().collect();
    let &[x, y, heading] = fields.as_slice() else {
        return Err(invalid(format!("expected 3 fields, found {}", fields.len())));
    };

    let coordinate = |field: &str| -> Result<i32, ParseError> {
        let value = field
            .parse::<i64>()
            .map_err(|e| invalid(format!("'{field}': {e}")))?;
        if value < 0 {
            return Err(invalid(format!("negative coordinate {value}")));
        }
        if value > i64::from(MAX_COORDINATE) {
            return Err(ParseError::CoordinateOutOfRange {
                line,
                value,
                max: MAX_COORDINATE,
            });
        }
        Ok(value as i32)
    };
    let x = coordinate(x)?;
    let y = coordinate(y)?;

    let mut letters = heading.chars();
    let orientation = match (letters.next(), letters.next()) {
        (Some(letter), None) => orientation_from_letter(letter),
        _ => None,
    }
    .ok_or_else(|| ParseError::UnknownOrientation {
        line,
        letter: heading.to_string(),
    })?;

    Ok(Transform::new(x, y, orientation))
}
