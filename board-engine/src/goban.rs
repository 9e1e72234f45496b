use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::Point;
use crate::error::PlacementError;
use crate::stone::Stone;

/// Stones captured, credited to the capturing color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Captures {
    pub black: u32,
    pub white: u32,
}

impl Captures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.black,
            Stone::White => self.white,
        }
    }

    fn credit(&mut self, stone: Stone, count: u32) {
        match stone {
            Stone::Black => self.black += count,
            Stone::White => self.white += count,
        }
    }
}

/// Square grid of intersections stored as a flat array, together with the
/// capture tally and the active ko point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goban {
    board: Vec<i8>,
    size: u8,
    captures: Captures,
    ko: Option<Point>,
}

impl Goban {
    /// Empty board of `size` x `size`.
    pub fn with_size(size: u8) -> Self {
        Goban {
            board: vec![0; size as usize * size as usize],
            size,
            captures: Captures::new(),
            ko: None,
        }
    }

    /// Board from a row-major matrix of cell values. Panics unless square.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: Vec<Vec<i8>>) -> Self {
        let size = rows.len();
        assert!(
            size <= u8::MAX as usize && rows.iter().all(|row| row.len() == size),
            "board matrix must be square"
        );

        Goban {
            board: rows.into_iter().flatten().collect(),
            size: size as u8,
            captures: Captures::new(),
            ko: None,
        }
    }

    pub(crate) fn from_parts(
        board: Vec<i8>,
        size: u8,
        captures: Captures,
        ko: Option<Point>,
    ) -> Self {
        Goban {
            board,
            size,
            captures,
            ko,
        }
    }

    // -- Accessors --

    pub fn board(&self) -> &[i8] {
        &self.board
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn captures(&self) -> &Captures {
        &self.captures
    }

    pub fn ko(&self) -> Option<Point> {
        self.ko
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        if self.on_board(point) {
            Stone::from_cell(self.board[self.idx(point)])
        } else {
            None
        }
    }

    pub fn on_board(&self, (x, y): Point) -> bool {
        x < self.size && y < self.size
    }

    pub fn is_empty(&self) -> bool {
        self.board.iter().all(|&c| c == 0)
    }

    /// Number of stones of `stone` currently on the board.
    pub fn count(&self, stone: Stone) -> usize {
        self.board.iter().filter(|&&c| c == stone.cell()).count()
    }

    /// The grid as `[row][col]`.
    pub fn rows(&self) -> Vec<Vec<Option<Stone>>> {
        self.board
            .chunks(self.size.max(1) as usize)
            .map(|row| row.iter().map(|&c| Stone::from_cell(c)).collect())
            .collect()
    }

    // -- Placement --

    /// Validate and apply a placement. On success returns the updated board
    /// and the captured points; `self` is never modified.
    pub fn play(&self, point: Point, stone: Stone) -> Result<(Goban, Vec<Point>), PlacementError> {
        self.check(point)?;

        let mut goban = self.clone();
        let captured = goban.resolve(point, stone);

        if captured.is_empty() && goban.liberty_count(&goban.chain(point)) == 0 {
            return Err(PlacementError::Suicide(point));
        }

        goban.ko = Self::detect_ko(&goban, &captured, point);
        Ok((goban, captured))
    }

    /// Apply a placement known to be legal, mutating in place. Used by replay.
    pub(crate) fn apply(&mut self, point: Point, stone: Stone) -> Vec<Point> {
        let captured = self.resolve(point, stone);
        self.ko = Self::detect_ko(self, &captured, point);
        captured
    }

    /// Bounds, occupancy and ko checks, in that order.
    pub fn check(&self, point: Point) -> Result<(), PlacementError> {
        if !self.on_board(point) {
            return Err(PlacementError::OutOfBounds(point));
        }
        if self.stone_at(point).is_some() {
            return Err(PlacementError::Occupied(point));
        }
        if self.ko == Some(point) {
            return Err(PlacementError::Ko(point));
        }
        Ok(())
    }

    /// Put the stone down and remove every adjacent opponent chain left
    /// without liberties, crediting `stone` with the captures.
    fn resolve(&mut self, point: Point, stone: Stone) -> Vec<Point> {
        self.set_stone(point, stone);

        let mut dead: Vec<Point> = Vec::new();
        for n in self.neighbors(point) {
            // A chain touching the new stone twice is only removed once.
            if self.stone_at(n) != Some(stone.opp()) || dead.contains(&n) {
                continue;
            }
            let chain = self.chain(n);
            if self.liberty_count(&chain) == 0 {
                dead.extend(chain);
            }
        }

        for &p in &dead {
            self.clear_stone(p);
        }
        self.captures.credit(stone, dead.len() as u32);
        dead
    }

    fn detect_ko(goban: &Goban, captured: &[Point], point: Point) -> Option<Point> {
        if captured.len() == 1 && goban.chain(point).len() == 1 {
            Some(captured[0])
        } else {
            None
        }
    }

    // -- Graph algorithms --

    /// The on-board orthogonal neighbors of a point.
    pub fn neighbors(&self, (x, y): Point) -> ArrayVec<Point, 4> {
        let (x, y, size) = (i16::from(x), i16::from(y), i16::from(self.size));
        [(x - 1, y), (x + 1, y), (x, y - 1), (x, y + 1)]
            .into_iter()
            .filter(|&(nx, ny)| (0..size).contains(&nx) && (0..size).contains(&ny))
            .map(|(nx, ny)| (nx as u8, ny as u8))
            .collect()
    }

    /// The connected group containing `point`, empty if the point holds no
    /// stone. Breadth-first; the group itself doubles as the work queue.
    pub fn chain(&self, point: Point) -> Vec<Point> {
        let Some(stone) = self.stone_at(point) else {
            return Vec::new();
        };

        let mut visited = vec![false; self.board.len()];
        visited[self.idx(point)] = true;
        let mut group = vec![point];
        let mut next = 0;

        while let Some(&p) = group.get(next) {
            next += 1;
            for n in self.neighbors(p) {
                let ni = self.idx(n);
                if !visited[ni] && self.stone_at(n) == Some(stone) {
                    visited[ni] = true;
                    group.push(n);
                }
            }
        }

        group
    }

    /// Distinct empty points adjacent to any stone of `chain`.
    pub fn chain_liberties(&self, chain: &[Point]) -> Vec<Point> {
        let mut counted = vec![false; self.board.len()];
        chain
            .iter()
            .filter(|&&p| self.on_board(p))
            .flat_map(|&p| self.neighbors(p))
            .filter(|&n| {
                self.stone_at(n).is_none() && !std::mem::replace(&mut counted[self.idx(n)], true)
            })
            .collect()
    }

    pub fn liberty_count(&self, chain: &[Point]) -> usize {
        self.chain_liberties(chain).len()
    }

    // -- Internal helpers --

    #[inline]
    fn idx(&self, (x, y): Point) -> usize {
        y as usize * self.size as usize + x as usize
    }

    fn set_stone(&mut self, point: Point, stone: Stone) {
        let i = self.idx(point);
        self.board[i] = stone.cell();
    }

    fn clear_stone(&mut self, point: Point) {
        let i = self.idx(point);
        self.board[i] = 0;
    }
}
