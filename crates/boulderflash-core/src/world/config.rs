//! Engine tuning parameters

use serde::{Deserialize, Serialize};

/// Timing and probability parameters of the simulation.
///
/// Missing fields fall back to their defaults when deserialized, so a
/// preset only needs to list what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Minimum time between two physics passes (default: 150)
    pub physics_interval_ms: u64,
    /// Minimum time between two moves of the same predator (default: 400)
    pub predator_move_delay_ms: u64,
    /// How long a firewall may rest on the player before it kills (default: 500)
    pub crush_grace_ms: u64,
    /// Per-candidate chance that sludge spreads into an empty cell (default: 0.0575)
    pub sludge_growth_chance: f32,
    /// Physics ticks between placing a bomb and its detonation (default: 10)
    pub bomb_fuse_ticks: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            physics_interval_ms: 150,
            predator_move_delay_ms: 400,
            crush_grace_ms: 500,
            sludge_growth_chance: 0.0575,
            bomb_fuse_ticks: 10,
        }
    }
}
