//! # Boulderflash - tile-based digging game
//!
//! Headless front end over `boulderflash-core`: layered configuration,
//! a text renderer and a scripted replay runner.

pub mod config;
pub mod headless;
pub mod render;

// Re-export core modules for convenience
pub use boulderflash_core::entity;
pub use boulderflash_core::levels;
pub use boulderflash_core::simulation;
pub use boulderflash_core::world;
pub use boulderflash_core::{GameSession, SessionConfig, SessionStatus};

pub use config::GameConfig;
