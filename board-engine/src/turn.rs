use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Point;
use crate::stone::Stone;

/// One successful placement in the move log.
///
/// Moves are append-only history: they are never edited after being logged,
/// and undo is expressed by replaying a shorter prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub pos: Point,
    pub stone: Stone,
    /// 1-based position in the log at the time the move was appended.
    pub number: usize,
}

impl Move {
    pub fn new(stone: Stone, pos: Point, number: usize) -> Self {
        Move { pos, stone, number }
    }

    pub fn x(&self) -> u8 {
        self.pos.0
    }

    pub fn y(&self) -> u8 {
        self.pos.1
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} ({}, {})",
            self.number, self.stone, self.pos.0, self.pos.1
        )
    }
}
