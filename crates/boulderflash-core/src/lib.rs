pub mod entity;
pub mod levels;
pub mod session;
pub mod world;

// Tile definitions live in their own crate; re-exported for convenience
pub mod simulation {
    pub use boulderflash_simulation::*;
}

pub use session::{GameSession, SessionConfig, SessionStatus};
