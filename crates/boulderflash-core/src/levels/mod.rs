//! Levels - text maps, built-in level list and level selection

mod builtin;
pub mod level_def;
pub mod parser;

pub use builtin::BUILTIN_LEVELS;
pub use level_def::{LevelDef, LevelManager};
pub use parser::{DEFAULT_PLAYER_START, LevelError, LevelLayout, parse_level};
