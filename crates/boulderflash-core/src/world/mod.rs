//! World simulation - grid, engine and the systems it runs each tick

mod bomb_system;
pub mod config;
mod enemy_roster;
mod enemy_system;
mod engine;
mod falling_system;
mod gravity_zones;
mod grid;
mod hazard_checks;
mod pathfinding;
pub mod rng_trait;
mod sludge_system;
pub mod stats;
#[cfg(test)]
pub(crate) mod test_support;

pub use bomb_system::{ActiveBomb, BombSystem};
pub use config::EngineConfig;
pub use enemy_roster::{Enemy, EnemyId, EnemyKind, EnemyRoster};
pub use enemy_system::EnemySystem;
pub use engine::Engine;
pub use falling_system::{FallOutcome, FallingObjectUpdater, ProcessedCells};
pub use gravity_zones::GravityZones;
pub use grid::{EXPLOSION_DURATION_MS, ExplosionEffect, Grid};
pub use hazard_checks::{CrushTimer, HazardChecks};
pub use pathfinding::Pathfinder;
pub use rng_trait::WorldRng;
pub use sludge_system::SludgeSystem;
pub use stats::{NoopStats, SimStats};
