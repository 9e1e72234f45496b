use serde::{Deserialize, Serialize};
use std::fmt;

use crate::engine::validate_size;
use crate::error::ConfigError;
use crate::stone::Stone;

/// How a [`Timeline`](crate::Timeline) picks the color of the next stone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayMode {
    /// Black first, then strict alternation.
    #[default]
    Alternating,
    /// White first, then strict alternation.
    AlternatingWhiteFirst,
    /// Setup mode: every stone is black.
    BlackOnly,
    /// Setup mode: every stone is white.
    WhiteOnly,
}

impl PlayMode {
    /// Color of the stone placed after `moves_played` logged moves.
    pub fn color_for(self, moves_played: usize) -> Stone {
        match self {
            PlayMode::Alternating => Stone::to_move(moves_played),
            PlayMode::AlternatingWhiteFirst => Stone::to_move(moves_played).opp(),
            PlayMode::BlackOnly => Stone::Black,
            PlayMode::WhiteOnly => Stone::White,
        }
    }
}

impl fmt::Display for PlayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayMode::Alternating => write!(f, "alternating"),
            PlayMode::AlternatingWhiteFirst => write!(f, "alternating_white_first"),
            PlayMode::BlackOnly => write!(f, "black_only"),
            PlayMode::WhiteOnly => write!(f, "white_only"),
        }
    }
}

impl std::str::FromStr for PlayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alternating" => Ok(PlayMode::Alternating),
            "alternating_white_first" => Ok(PlayMode::AlternatingWhiteFirst),
            "black_only" => Ok(PlayMode::BlackOnly),
            "white_only" => Ok(PlayMode::WhiteOnly),
            _ => Err(format!("unknown play mode: {s}")),
        }
    }
}

/// Board setup sent by the view layer. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub size: u8,
    pub play_mode: PlayMode,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            size: 19,
            play_mode: PlayMode::default(),
        }
    }
}

impl BoardConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_size(self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternating_modes() {
        assert_eq!(PlayMode::Alternating.color_for(0), Stone::Black);
        assert_eq!(PlayMode::Alternating.color_for(3), Stone::White);
        assert_eq!(PlayMode::AlternatingWhiteFirst.color_for(0), Stone::White);
        assert_eq!(PlayMode::AlternatingWhiteFirst.color_for(1), Stone::Black);
    }

    #[test]
    fn setup_modes_ignore_parity() {
        for n in 0..4 {
            assert_eq!(PlayMode::BlackOnly.color_for(n), Stone::Black);
            assert_eq!(PlayMode::WhiteOnly.color_for(n), Stone::White);
        }
    }

    #[test]
    fn play_mode_string_round_trip() {
        for mode in [
            PlayMode::Alternating,
            PlayMode::AlternatingWhiteFirst,
            PlayMode::BlackOnly,
            PlayMode::WhiteOnly,
        ] {
            assert_eq!(mode.to_string().parse::<PlayMode>(), Ok(mode));
        }
        assert!("both".parse::<PlayMode>().is_err());
    }

    #[test]
    fn config_defaults_from_empty_json() {
        let config: BoardConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, BoardConfig::default());
        assert_eq!(config.size, 19);
    }

    #[test]
    fn config_from_json() {
        let config: BoardConfig =
            serde_json::from_str(r#"{"size":9,"play_mode":"white_only"}"#).unwrap();
        assert_eq!(config.size, 9);
        assert_eq!(config.play_mode, PlayMode::WhiteOnly);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_rejects_tiny_board() {
        let config = BoardConfig {
            size: 1,
            ..BoardConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSize { size: 1, .. })
        ));
    }
}
