//! Tile data for the Boulderflash simulation
//!
//! This crate provides the foundational data types shared by the engine and
//! its collaborators:
//! - Tile kinds (Tile) and their glyph mapping
//! - Behavioural property flags (TileFlags)
//! - Coordinate helpers (Direction, ORTHOGONAL)

mod direction;
mod tile;

pub use direction::{Direction, ORTHOGONAL};
pub use tile::{Tile, TileFlags};
