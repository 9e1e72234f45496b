use serde::{Deserialize, Serialize};

use crate::Point;
use crate::error::{ConfigError, PlacementError};
use crate::goban::{Captures, Goban};
use crate::record::RecordWriter;
use crate::stone::Stone;
use crate::turn::Move;

pub const MIN_SIZE: u8 = 2;
/// Any `u8` side works for play. Record coordinates past the 52nd line have
/// no letter and are written as `?`.
pub const MAX_SIZE: u8 = u8::MAX;

/// Outcome of [`Engine::place_stone`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Placement {
    pub success: bool,
    pub captured: Vec<Point>,
}

impl Placement {
    fn rejected() -> Self {
        Self::default()
    }
}

/// Serializable snapshot of the board for the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Vec<i8>,
    pub size: u8,
    pub captures: Captures,
    pub ko: Option<Point>,
}

/// The rule engine: the board, the move log, and the capture tally.
///
/// Cloning an engine is a deep copy. Speculative and alternate-branch play
/// work on a clone (or on a [`state_at`](Engine::state_at) snapshot) rather
/// than mutating shared state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    goban: Goban,
    moves: Vec<Move>,
}

impl Engine {
    /// Empty engine. Panics if `size` is outside `MIN_SIZE..=MAX_SIZE`; use
    /// [`Engine::try_new`] to reject bad sizes at the boundary instead.
    pub fn new(size: u8) -> Self {
        assert!(
            (MIN_SIZE..=MAX_SIZE).contains(&size),
            "board size {size} out of range"
        );
        Self::empty(size)
    }

    pub fn try_new(size: u8) -> Result<Self, ConfigError> {
        validate_size(size)?;
        Ok(Self::empty(size))
    }

    fn empty(size: u8) -> Self {
        Engine {
            goban: Goban::with_size(size),
            moves: Vec::new(),
        }
    }

    // -- Accessors --

    pub fn size(&self) -> u8 {
        self.goban.size()
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.moves.last()
    }

    pub fn goban(&self) -> &Goban {
        &self.goban
    }

    pub fn board(&self) -> &[i8] {
        self.goban.board()
    }

    pub fn rows(&self) -> Vec<Vec<Option<Stone>>> {
        self.goban.rows()
    }

    pub fn captures(&self) -> &Captures {
        self.goban.captures()
    }

    pub fn ko(&self) -> Option<Point> {
        self.goban.ko()
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        self.goban.stone_at(point)
    }

    /// Number of the most recent logged move at `point`, provided its stone
    /// is still on the board.
    pub fn move_number_at(&self, point: Point) -> Option<usize> {
        self.stone_at(point)?;
        self.moves
            .iter()
            .rev()
            .find(|m| m.pos == point)
            .map(|m| m.number)
    }

    /// Black on an even number of logged moves, White on an odd number.
    pub fn current_turn(&self) -> Stone {
        Stone::to_move(self.moves.len())
    }

    // -- Queries --

    pub fn neighbors(&self, point: Point) -> Vec<Point> {
        self.goban.neighbors(point).to_vec()
    }

    pub fn group_of(&self, point: Point) -> Vec<Point> {
        self.goban.chain(point)
    }

    pub fn liberties(&self, group: &[Point]) -> usize {
        self.goban.liberty_count(group)
    }

    pub fn liberty_points(&self, group: &[Point]) -> Vec<Point> {
        self.goban.chain_liberties(group)
    }

    /// Bounds, occupancy and ko checks only. A move passing this check can
    /// still be rejected by [`Engine::place_stone`] as suicide. The ko point
    /// binds both colors, so `stone` does not change the answer.
    pub fn is_legal(&self, point: Point, stone: Stone) -> bool {
        let legal = self.goban.check(point).is_ok();
        tracing::trace!(?point, %stone, legal, "legality check");
        legal
    }

    // -- Game actions --

    /// Place a stone of `color`, or of the color to move when `None`.
    pub fn place_stone(&mut self, point: Point, color: Option<Stone>) -> Placement {
        match self.try_place_stone(point, color) {
            Ok(captured) => Placement {
                success: true,
                captured,
            },
            Err(_) => Placement::rejected(),
        }
    }

    /// Like [`Engine::place_stone`], reporting why a placement was rejected.
    pub fn try_place_stone(
        &mut self,
        point: Point,
        color: Option<Stone>,
    ) -> Result<Vec<Point>, PlacementError> {
        let stone = color.unwrap_or_else(|| self.current_turn());

        let (goban, captured) = self.goban.play(point, stone).inspect_err(|e| {
            tracing::debug!(?point, %stone, reason = %e, "placement rejected");
        })?;

        if !captured.is_empty() {
            tracing::debug!(?point, %stone, count = captured.len(), "stones captured");
        }

        self.goban = goban;
        let number = self.moves.len() + 1;
        self.moves.push(Move::new(stone, point, number));
        Ok(captured)
    }

    /// Independent engine holding the first `prefix` moves of the log,
    /// rebuilt from an empty board. `prefix` is clamped to
    /// `0..=moves().len()`.
    ///
    /// Each move is replayed with its stored color. Captures and the ko
    /// point are recomputed exactly as during play, so the full-length
    /// snapshot equals `self`.
    pub fn state_at(&self, prefix: isize) -> Engine {
        let k = prefix.clamp(0, self.moves.len() as isize) as usize;

        let mut goban = Goban::with_size(self.size());
        for m in &self.moves[..k] {
            let captured = goban.apply(m.pos, m.stone);
            tracing::trace!(number = m.number, pos = ?m.pos, captured = captured.len(), "replayed move");
        }

        Engine {
            goban,
            moves: self.moves[..k].to_vec(),
        }
    }

    // -- Serialization --

    /// Minimal game record: rule-set and size header, then one node per move.
    pub fn to_record_string(&self) -> String {
        let mut writer = RecordWriter::new(self.size());
        for m in &self.moves {
            writer.push_move(m);
        }
        writer.finish()
    }

    pub fn game_state(&self) -> GameState {
        GameState {
            board: self.goban.board().to_vec(),
            size: self.size(),
            captures: *self.goban.captures(),
            ko: self.goban.ko(),
        }
    }

    /// Restore an engine from a snapshot and its move log. The board is
    /// taken as given and is not replayed from `moves`, but every move must
    /// lie on the board and carry its 1-based log position.
    pub fn from_game_state(moves: Vec<Move>, state: GameState) -> Result<Self, ConfigError> {
        validate_size(state.size)?;
        let expected = state.size as usize * state.size as usize;
        if state.board.len() != expected {
            return Err(ConfigError::MalformedBoard {
                expected,
                actual: state.board.len(),
            });
        }

        for (index, m) in moves.iter().enumerate() {
            let (x, y) = m.pos;
            if x >= state.size || y >= state.size {
                return Err(ConfigError::MoveOffBoard {
                    number: m.number,
                    pos: m.pos,
                });
            }
            if m.number != index + 1 {
                return Err(ConfigError::MoveOutOfSequence {
                    index,
                    number: m.number,
                });
            }
        }

        Ok(Engine {
            goban: Goban::from_parts(state.board, state.size, state.captures, state.ko),
            moves,
        })
    }
}

pub(crate) fn validate_size(size: u8) -> Result<(), ConfigError> {
    if (MIN_SIZE..=MAX_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(ConfigError::InvalidSize {
            size,
            min: MIN_SIZE,
            max: MAX_SIZE,
        })
    }
}
