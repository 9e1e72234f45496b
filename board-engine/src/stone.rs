use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;
use std::ops::Not;
use std::str::FromStr;

/// A stone color. The discriminants double as the cell encoding of the
/// flat board (`0` is an empty intersection).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(i8)]
pub enum Stone {
    Black = 1,
    White = -1,
}

impl Stone {
    /// Decode a board cell. Anything other than `1` or `-1` reads as empty.
    pub fn from_cell(v: i8) -> Option<Self> {
        match v {
            1 => Some(Stone::Black),
            -1 => Some(Stone::White),
            _ => None,
        }
    }

    pub fn cell(self) -> i8 {
        self as i8
    }

    pub fn opp(self) -> Self {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }

    /// Property letter used in game records.
    pub fn letter(self) -> char {
        match self {
            Stone::Black => 'B',
            Stone::White => 'W',
        }
    }

    /// Color to move after `moves_played` successful placements under strict
    /// alternation.
    pub fn to_move(moves_played: usize) -> Self {
        if moves_played % 2 == 0 {
            Stone::Black
        } else {
            Stone::White
        }
    }
}

impl Not for Stone {
    type Output = Self;

    fn not(self) -> Self {
        self.opp()
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stone::Black => write!(f, "black"),
            Stone::White => write!(f, "white"),
        }
    }
}

impl FromStr for Stone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "B" | "b" | "black" => Ok(Stone::Black),
            "W" | "w" | "white" => Ok(Stone::White),
            _ => Err(format!("invalid stone color: {s}")),
        }
    }
}
