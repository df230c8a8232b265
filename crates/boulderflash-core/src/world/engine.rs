//! Engine - owns the grid and runs the ordered per-tick systems

use glam::IVec2;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

use super::bomb_system::{ActiveBomb, BombSystem};
use super::enemy_roster::EnemyRoster;
use super::enemy_system::EnemySystem;
use super::falling_system::{FallingObjectUpdater, ProcessedCells};
use super::hazard_checks::{CrushTimer, HazardChecks};
use super::sludge_system::SludgeSystem;
use super::{EngineConfig, GravityZones, Grid, NoopStats, SimStats, WorldRng};
use crate::simulation::Tile;

/// The tick-driven simulation of one level.
///
/// Created alongside its [`Grid`] on every level load. The caller drives it
/// once per frame with the current time and player position; physics work
/// runs at most once per `physics_interval_ms`, in this order:
///
/// 1. Falling-object physics
/// 2. Enemy movement (skipped if step 1 killed the player)
/// 3. Bomb countdowns and detonations
/// 4. Sludge growth
/// 5. Trap detection
///
/// The crush grace timer is evaluated on every call, gated or not.
pub struct Engine<R: WorldRng = Xoshiro256StarStar> {
    grid: Grid,
    zones: GravityZones,
    config: EngineConfig,
    enemies: EnemySystem,
    bombs: BombSystem,
    processed: ProcessedCells,
    crush: CrushTimer,
    last_physics_ms: Option<u64>,
    rng: R,
}

impl Engine<Xoshiro256StarStar> {
    /// Create an engine with the default seeded generator
    pub fn new(grid: Grid, zones: GravityZones, config: EngineConfig, seed: u64) -> Self {
        Self::with_rng(grid, zones, config, Xoshiro256StarStar::seed_from_u64(seed))
    }
}

impl<R: WorldRng> Engine<R> {
    pub fn with_rng(grid: Grid, zones: GravityZones, config: EngineConfig, rng: R) -> Self {
        let enemies = EnemySystem::new(&grid, config.predator_move_delay_ms);
        log::debug!(
            "Engine created: {}x{} grid, {} gravity zones, {} enemies",
            grid.width(),
            grid.height(),
            zones.len(),
            enemies.roster().len()
        );
        Self {
            grid,
            zones,
            config,
            enemies,
            bombs: BombSystem::new(),
            processed: ProcessedCells::default(),
            crush: CrushTimer::new(),
            last_physics_ms: None,
            rng,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn gravity_zones(&self) -> &GravityZones {
        &self.zones
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn bombs(&self) -> &[ActiveBomb] {
        self.bombs.bombs()
    }

    pub fn enemies(&self) -> &EnemyRoster {
        self.enemies.roster()
    }

    /// Time of the last physics pass, None before the first one
    pub fn last_physics_ms(&self) -> Option<u64> {
        self.last_physics_ms
    }

    pub fn is_crush_threat(&self, player: IVec2) -> bool {
        HazardChecks::is_crush_threat(&self.grid, player)
    }

    pub fn is_trapped(&self, player: IVec2) -> bool {
        HazardChecks::is_trapped(&self.grid, player)
    }

    /// Arm a bomb at `pos` with the configured fuse
    pub fn place_bomb(&mut self, pos: IVec2) {
        self.bombs.place(&mut self.grid, pos, self.config.bomb_fuse_ticks);
    }

    pub fn place_pillar(&mut self, pos: IVec2) {
        self.grid.set_at(pos, Tile::Pillar);
        log::debug!("Pillar placed at {pos}");
    }

    /// Advance the simulation. Returns true if the player was killed.
    pub fn tick(&mut self, now_ms: u64, player: IVec2) -> bool {
        self.tick_with_stats(now_ms, player, &mut NoopStats)
    }

    pub fn tick_with_stats(
        &mut self,
        now_ms: u64,
        player: IVec2,
        stats: &mut dyn SimStats,
    ) -> bool {
        let threatened = HazardChecks::is_crush_threat(&self.grid, player);
        let crushed = self.crush.update(threatened, now_ms, self.config.crush_grace_ms);
        if crushed {
            log::debug!("Firewall held above the player for the grace period");
        }

        if let Some(last) = self.last_physics_ms
            && now_ms.saturating_sub(last) < self.config.physics_interval_ms
        {
            return crushed;
        }
        self.last_physics_ms = Some(now_ms);

        let mut killed = FallingObjectUpdater::update(
            &mut self.grid,
            &self.zones,
            &mut self.processed,
            player,
            stats,
        );

        if !killed {
            killed = self.enemies.update(
                &mut self.grid,
                &self.zones,
                &mut self.processed,
                player,
                now_ms,
                &mut self.rng,
                stats,
            );
        }

        killed |= self.bombs.update(&mut self.grid, player, now_ms, stats);

        SludgeSystem::update(
            &mut self.grid,
            self.config.sludge_growth_chance,
            &mut self.rng,
            stats,
        );

        if HazardChecks::is_trapped(&self.grid, player) {
            log::debug!("Player at {player} has no legal move");
            killed = true;
        }

        killed || crushed
    }
}
