//! Mower state and the instruction set it responds to.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Compass orientation of a mower.
///
/// Turns cycle through North → East → South → West and back to North.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

impl Orientation {
    /// Parses one of the four compass letters `N`, `E`, `S`, `W`.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'N' => Some(Self::North),
            'E' => Some(Self::East),
            'S' => Some(Self::South),
            'W' => Some(Self::West),
            _ => None,
        }
    }

    /// The compass letter for this orientation.
    pub fn letter(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }

    /// Rotates one step counter-clockwise through the compass cycle.
    pub fn turned_left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// Rotates one step clockwise through the compass cycle.
    pub fn turned_right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Position and facing of a mower on the lawn grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pose {
    /// Grid cell the mower occupies.
    pub position: IVec2,

    /// Direction the mower is facing.
    pub orientation: Orientation,
}

/// Operations a mower can perform, one per instruction character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MowerOp {
    /// Rotate 90° counter-clockwise (`L`).
    TurnLeft,
    /// Rotate 90° clockwise (`R`).
    TurnRight,
    /// Advance one cell in the facing direction (`F`).
    Forward,
    /// No-op: character has no registered meaning.
    Ignore,
}

impl MowerOp {
    /// Maps an instruction character to its operation.
    ///
    /// Anything outside `L`/`R`/`F` maps to [`MowerOp::Ignore`].
    pub fn from_symbol(symbol: char) -> Self {
        match symbol {
            'L' => Self::TurnLeft,
            'R' => Self::TurnRight,
            'F' => Self::Forward,
            _ => Self::Ignore,
        }
    }
}
