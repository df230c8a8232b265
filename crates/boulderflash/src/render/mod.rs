//! Text rendering of the board

mod ascii;

pub use ascii::{AsciiRenderer, EXPLOSION_GLYPH, PLAYER_GLYPH, status_line};
