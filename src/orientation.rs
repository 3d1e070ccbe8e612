//! Compass headings and the turns between them.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// The four compass headings a robot can face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

impl Orientation {
    /// All headings in clockwise order, starting at North.
    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ];
}

/// A 90 degree turn in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rotation {
    Left,
    Right,
}

/// Turns `orientation` by 90 degrees. Right follows N -> E -> S -> W -> N.
pub fn rotate(orientation: Orientation, rotation: Rotation) -> Orientation {
    use Orientation::*;
    match (rotation, orientation) {
        (Rotation::Right, North) => East,
        (Rotation::Right, East) => South,
        (Rotation::Right, South) => West,
        (Rotation::Right, West) => North,
        (Rotation::Left, North) => West,
        (Rotation::Left, West) => South,
        (Rotation::Left, South) => East,
        (Rotation::Left, East) => North,
    }
}

/// Unit step taken by a forward move while facing `orientation`.
pub fn forward_delta(orientation: Orientation) -> IVec2 {
    match orientation {
        Orientation::North => IVec2::Y,
        Orientation::South => IVec2::NEG_Y,
        Orientation::East => IVec2::X,
        Orientation::West => IVec2::NEG_X,
    }
}

pub fn letter_of(orientation: Orientation) -> char {
    match orientation {
        Orientation::North => 'N',
        Orientation::East => 'E',
        Orientation::South => 'S',
        Orientation::West => 'W',
    }
}

/// Parses a single compass letter. Case-sensitive.
pub fn orientation_from_letter(letter: char) -> Option<Orientation> {
    Orientation::ALL
        .into_iter()
        .find(|&orientation| letter_of(orientation) == letter)
}
