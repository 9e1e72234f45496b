pub mod config;
pub mod engine;
pub mod error;
pub mod goban;
pub mod markup;
pub mod record;
pub mod stone;
pub mod timeline;
pub mod turn;

/// An intersection as `(x, y)`: column, then row.
pub type Point = (u8, u8);

pub use config::{BoardConfig, PlayMode};
pub use engine::{Engine, GameState, Placement};
pub use error::{ConfigError, PlacementError};
pub use goban::{Captures, Goban};
pub use markup::{Annotation, Marker, Markup, Tool};
pub use record::RecordWriter;
pub use stone::Stone;
pub use timeline::Timeline;
pub use turn::Move;
