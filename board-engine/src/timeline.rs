use crate::Point;
use crate::config::{BoardConfig, PlayMode};
use crate::engine::{Engine, Placement};
use crate::error::ConfigError;
use crate::turn::Move;

/// A linear game history with a viewing cursor.
///
/// `master` holds every move; `view` is the position after the first `step`
/// moves (0 = empty board) and is always rebuilt from `master` by prefix
/// replay. Playing while the cursor is behind the tip discards the moves
/// after the cursor first.
#[derive(Debug, Clone)]
pub struct Timeline {
    master: Engine,
    view: Engine,
    step: usize,
    mode: PlayMode,
}

impl Timeline {
    pub fn new(size: u8) -> Self {
        let master = Engine::new(size);
        Self {
            view: master.clone(),
            master,
            step: 0,
            mode: PlayMode::default(),
        }
    }

    pub fn from_config(config: &BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut timeline = Self::new(config.size);
        timeline.mode = config.play_mode;
        Ok(timeline)
    }

    // -- Accessors --

    pub fn size(&self) -> u8 {
        self.master.size()
    }

    pub fn master(&self) -> &Engine {
        &self.master
    }

    /// The engine at the cursor.
    pub fn view(&self) -> &Engine {
        &self.view
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn total_moves(&self) -> usize {
        self.master.moves().len()
    }

    pub fn play_mode(&self) -> PlayMode {
        self.mode
    }

    pub fn set_play_mode(&mut self, mode: PlayMode) {
        self.mode = mode;
    }

    pub fn is_at_start(&self) -> bool {
        self.step == 0
    }

    pub fn is_at_latest(&self) -> bool {
        self.step == self.total_moves()
    }

    /// The move that produced the viewed position.
    pub fn last_move(&self) -> Option<&Move> {
        self.view.last_move()
    }

    // -- Game actions --

    /// Place a stone at the cursor using the color chosen by the play mode.
    /// On success the history after the old cursor is gone and the cursor
    /// sits on the new move.
    pub fn play(&mut self, point: Point) -> Placement {
        let mut engine = if self.is_at_latest() {
            self.master.clone()
        } else {
            self.master.state_at(self.step as isize)
        };

        let color = self.mode.color_for(engine.moves().len());
        let placement = engine.place_stone(point, Some(color));
        if placement.success {
            let discarded = self.total_moves() - self.step;
            if discarded > 0 {
                tracing::debug!(step = self.step, discarded, "truncated history");
            }
            self.master = engine;
            self.step = self.master.moves().len();
            self.view = self.master.clone();
        }
        placement
    }

    /// Reset to an empty board of the same size, keeping the play mode.
    pub fn clear(&mut self) {
        self.master = Engine::new(self.size());
        self.view = self.master.clone();
        self.step = 0;
    }

    // -- Navigation --

    /// Move the cursor to `step`, clamped to the history.
    pub fn jump_to(&mut self, step: isize) {
        self.view = self.master.state_at(step);
        self.step = self.view.moves().len();
    }

    /// Step back one move. Returns false if already at the start.
    pub fn back(&mut self) -> bool {
        if self.is_at_start() {
            return false;
        }
        self.jump_to(self.step as isize - 1);
        true
    }

    /// Step forward one move. Returns false if already at the latest move.
    pub fn forward(&mut self) -> bool {
        if self.is_at_latest() {
            return false;
        }
        self.jump_to(self.step as isize + 1);
        true
    }

    pub fn to_start(&mut self) {
        self.jump_to(0);
    }

    pub fn to_latest(&mut self) {
        self.view = self.master.clone();
        self.step = self.total_moves();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Stone;

    #[test]
    fn new_timeline_is_at_start_and_latest() {
        let t = Timeline::new(9);
        assert!(t.is_at_start());
        assert!(t.is_at_latest());
        assert_eq!(t.total_moves(), 0);
        assert!(t.last_move().is_none());
    }

    #[test]
    fn play_advances_cursor() {
        let mut t = Timeline::new(9);
        assert!(t.play((0, 0)).success);
        assert_eq!(t.step(), 1);
        assert!(t.is_at_latest());
        assert!(!t.is_at_start());
        assert_eq!(t.view().stone_at((0, 0)), Some(Stone::Black));
    }

    #[test]
    fn illegal_play_changes_nothing() {
        let mut t = Timeline::new(9);
        t.play((0, 0));
        assert!(!t.play((0, 0)).success);
        assert_eq!(t.total_moves(), 1);
        assert_eq!(t.step(), 1);
    }

    #[test]
    fn back_and_forward() {
        let mut t = Timeline::new(9);
        t.play((0, 0));
        t.play((1, 0));

        assert!(t.back());
        assert_eq!(t.step(), 1);
        assert!(!t.is_at_latest());
        assert_eq!(t.view().stone_at((1, 0)), None);
        assert_eq!(t.view().current_turn(), Stone::White);

        assert!(t.forward());
        assert_eq!(t.step(), 2);
        assert_eq!(t.view().stone_at((1, 0)), Some(Stone::White));
    }

    #[test]
    fn navigation_stops_at_the_ends() {
        let mut t = Timeline::new(9);
        assert!(!t.back());
        t.play((0, 0));
        assert!(!t.forward());
    }

    #[test]
    fn jump_to_clamps() {
        let mut t = Timeline::new(9);
        t.play((0, 0));
        t.play((1, 0));

        t.jump_to(-3);
        assert_eq!(t.step(), 0);
        assert!(t.view().goban().is_empty());

        t.jump_to(100);
        assert_eq!(t.step(), 2);
        assert_eq!(t.view(), t.master());
    }

    #[test]
    fn play_in_the_past_truncates_future() {
        let mut t = Timeline::new(9);
        t.play((0, 0)); // B
        t.play((1, 0)); // W
        t.play((2, 0)); // B
        t.jump_to(1);

        assert!(t.play((5, 5)).success);
        assert_eq!(t.total_moves(), 2);
        assert_eq!(t.step(), 2);
        assert_eq!(t.master().stone_at((5, 5)), Some(Stone::White));
        assert_eq!(t.master().stone_at((1, 0)), None);
        assert_eq!(t.master().stone_at((2, 0)), None);
    }

    #[test]
    fn failed_play_in_the_past_keeps_future() {
        let mut t = Timeline::new(9);
        t.play((0, 0));
        t.play((1, 0));
        t.back();

        assert!(!t.play((0, 0)).success);
        assert_eq!(t.total_moves(), 2);
        assert_eq!(t.step(), 1);
    }

    #[test]
    fn play_modes_choose_color() {
        let mut t = Timeline::new(9);
        t.set_play_mode(PlayMode::AlternatingWhiteFirst);
        t.play((0, 0));
        t.play((1, 0));
        assert_eq!(t.view().stone_at((0, 0)), Some(Stone::White));
        assert_eq!(t.view().stone_at((1, 0)), Some(Stone::Black));

        t.set_play_mode(PlayMode::BlackOnly);
        t.play((2, 0));
        t.play((3, 0));
        assert_eq!(t.view().stone_at((2, 0)), Some(Stone::Black));
        assert_eq!(t.view().stone_at((3, 0)), Some(Stone::Black));
    }

    #[test]
    fn clear_resets_history() {
        let mut t = Timeline::new(13);
        t.set_play_mode(PlayMode::WhiteOnly);
        t.play((0, 0));
        t.clear();
        assert_eq!(t.total_moves(), 0);
        assert_eq!(t.size(), 13);
        assert_eq!(t.play_mode(), PlayMode::WhiteOnly);
    }

    #[test]
    fn from_config() {
        let config = BoardConfig {
            size: 9,
            play_mode: PlayMode::BlackOnly,
        };
        let t = Timeline::from_config(&config).unwrap();
        assert_eq!(t.size(), 9);
        assert_eq!(t.play_mode(), PlayMode::BlackOnly);

        let bad = BoardConfig {
            size: 0,
            ..config
        };
        assert!(Timeline::from_config(&bad).is_err());
    }
}
