use crate::Point;

/// Why a placement was rejected. A rejected placement never changes the
/// engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("point {0:?} is not on the board")]
    OutOfBounds(Point),
    #[error("point {0:?} is already occupied")]
    Occupied(Point),
    #[error("point {0:?} is the active ko point")]
    Ko(Point),
    #[error("placing at {0:?} would be suicide")]
    Suicide(Point),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board size must be between {min} and {max}, got {size}")]
    InvalidSize { size: u8, min: u8, max: u8 },
    #[error("board has {actual} cells, expected {expected}")]
    MalformedBoard { expected: usize, actual: usize },
    #[error("move {number} at {pos:?} is not on the board")]
    MoveOffBoard { number: usize, pos: Point },
    #[error("move at log position {index} is numbered {number}")]
    MoveOutOfSequence { index: usize, number: usize },
}
