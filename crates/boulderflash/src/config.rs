//! Game configuration with layered loading
//!
//! Configuration is loaded from multiple sources (lowest to highest priority):
//! 1. Compiled defaults
//! 2. `boulderflash.ron` file (if exists)
//! 3. Environment variables prefixed with `BOULDERFLASH_`
//!
//! Example environment variable: `BOULDERFLASH_ENGINE__BOMB_FUSE_TICKS=5`

use std::path::Path;

use anyhow::{Context, Result};
use config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};
use serde::{Deserialize, Serialize};

use boulderflash_core::SessionConfig;
use boulderflash_core::world::EngineConfig;

/// Main game configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GameConfig {
    #[serde(default)]
    pub engine: EngineConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub runner: RunnerConfig,
}

/// Headless runner settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Seed for the simulation RNG
    pub seed: u64,
    /// Frames simulated after each scripted action
    pub frames_per_action: u32,
    /// Print the board every N frames (0 = only the final board)
    pub print_every: u32,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            frames_per_action: 12,
            print_every: 0,
        }
    }
}

impl GameConfig {
    /// Load configuration with layered priority:
    /// 1. Compiled defaults (lowest priority)
    /// 2. `boulderflash.ron` in the working directory (if exists)
    /// 3. Environment variables prefixed with `BOULDERFLASH_` (highest priority)
    pub fn load() -> Result<Self> {
        let builder = Self::defaults()?
            // Layer 2: Config file (optional, won't error if missing)
            .add_source(
                File::with_name("boulderflash")
                    .format(config::FileFormat::Ron)
                    .required(false),
            );
        Self::finish(builder)
    }

    /// Like [`GameConfig::load`], but with an explicit config file that must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let builder = Self::defaults()?.add_source(
            File::from(path)
                .format(config::FileFormat::Ron)
                .required(true),
        );
        Self::finish(builder).with_context(|| format!("Failed to load {}", path.display()))
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        let engine = EngineConfig::default();
        let session = SessionConfig::default();
        let runner = RunnerConfig::default();

        // Layer 1: Compiled defaults
        let builder = Config::builder()
            .set_default("engine.physics_interval_ms", engine.physics_interval_ms)?
            .set_default("engine.predator_move_delay_ms", engine.predator_move_delay_ms)?
            .set_default("engine.crush_grace_ms", engine.crush_grace_ms)?
            .set_default(
                "engine.sludge_growth_chance",
                f64::from(engine.sludge_growth_chance),
            )?
            .set_default("engine.bomb_fuse_ticks", engine.bomb_fuse_ticks)?
            .set_default("session.starting_lives", session.starting_lives)?
            .set_default("session.bombs_per_level", session.bombs_per_level)?
            .set_default("session.pillars_per_level", session.pillars_per_level)?
            .set_default("runner.seed", runner.seed)?
            .set_default("runner.frames_per_action", runner.frames_per_action)?
            .set_default("runner.print_every", runner.print_every)?;
        Ok(builder)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        // Layer 3: Environment variables (BOULDERFLASH_ENGINE__BOMB_FUSE_TICKS, etc.)
        let builder = builder.add_source(
            Environment::with_prefix("BOULDERFLASH")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Serialize to pretty RON, e.g. to seed a `boulderflash.ron`
    pub fn to_ron(&self) -> Result<String> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .context("Failed to serialize configuration")
    }
}
