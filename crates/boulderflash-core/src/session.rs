//! Game session - lives, level progression and the per-frame driver

use serde::{Deserialize, Serialize};

use crate::entity::{Action, MoveOutcome, Player};
use crate::levels::{LevelError, LevelLayout, LevelManager};
use crate::world::{Engine, EngineConfig};

/// Per-session rules that sit above the engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Lives at the start of the session (default: 3)
    pub starting_lives: u32,
    /// Bombs handed out on every level load (default: 5)
    pub bombs_per_level: u32,
    /// Pillars handed out on every level load (default: 3)
    pub pillars_per_level: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            starting_lives: 3,
            bombs_per_level: 5,
            pillars_per_level: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    Playing,
    /// Exit reached; the next level loads on the following update
    LevelComplete,
    /// Exit of the last level reached
    Victory,
    /// No lives left
    GameOver,
}

impl SessionStatus {
    pub fn is_finished(self) -> bool {
        matches!(self, SessionStatus::Victory | SessionStatus::GameOver)
    }
}

/// One play-through over the levels of a [`LevelManager`]
pub struct GameSession {
    levels: LevelManager,
    config: SessionConfig,
    engine_config: EngineConfig,
    engine: Engine,
    player: Player,
    lives: u32,
    status: SessionStatus,
    completed_levels: u32,
    seed: u64,
    loads: u64,
}

impl GameSession {
    /// Start a session on `start_level`
    pub fn new(
        mut levels: LevelManager,
        config: SessionConfig,
        engine_config: EngineConfig,
        seed: u64,
        start_level: usize,
    ) -> Result<Self, LevelError> {
        let layout = levels.load_level(start_level)?;
        let (engine, player) = Self::build(layout, &config, &engine_config, seed);
        Ok(Self {
            levels,
            lives: config.starting_lives,
            config,
            engine_config,
            engine,
            player,
            status: SessionStatus::Playing,
            completed_levels: 0,
            seed,
            loads: 1,
        })
    }

    fn build(
        layout: LevelLayout,
        config: &SessionConfig,
        engine_config: &EngineConfig,
        seed: u64,
    ) -> (Engine, Player) {
        let player = Player::new(
            layout.player_start,
            layout.required_keys,
            config.bombs_per_level,
            config.pillars_per_level,
        );
        let engine = Engine::new(
            layout.grid,
            layout.gravity_zones,
            engine_config.clone(),
            seed,
        );
        (engine, player)
    }

    fn install(&mut self, layout: LevelLayout) {
        // Every load gets its own stream so a replay is reproducible end to end
        let seed = self.seed.wrapping_add(self.loads);
        self.loads += 1;
        let (engine, player) = Self::build(layout, &self.config, &self.engine_config, seed);
        self.engine = engine;
        self.player = player;
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Levels finished so far, for score keeping
    pub fn completed_levels(&self) -> u32 {
        self.completed_levels
    }

    pub fn level_index(&self) -> usize {
        self.levels.current_level()
    }

    pub fn level_name(&self) -> &str {
        self.levels.current_level_name()
    }

    pub fn levels(&self) -> &LevelManager {
        &self.levels
    }

    /// Apply one player action. Returns the move outcome for moves, None for
    /// other actions or when the session is not playing.
    pub fn apply(
        &mut self,
        action: Action,
        now_ms: u64,
    ) -> Result<Option<MoveOutcome>, LevelError> {
        if self.status != SessionStatus::Playing {
            return Ok(None);
        }

        let dir = match action {
            Action::Move(dir) => dir,
            Action::PlaceBomb => {
                self.player.place_bomb(&mut self.engine);
                return Ok(None);
            }
            Action::PlacePillar => {
                self.player.place_pillar(&mut self.engine);
                return Ok(None);
            }
            Action::Wait => return Ok(None),
        };

        let outcome = self.player.try_move(&mut self.engine, dir);
        match outcome {
            MoveOutcome::Killed => self.lose_life(now_ms)?,
            MoveOutcome::ReachedExit => self.complete_level(),
            _ => {}
        }
        Ok(Some(outcome))
    }

    /// Drive one frame: load a pending next level, or tick the engine and
    /// turn a kill signal into a lost life.
    pub fn update(&mut self, now_ms: u64) -> Result<SessionStatus, LevelError> {
        match self.status {
            SessionStatus::LevelComplete => {
                if let Some(layout) = self.levels.next_level() {
                    self.install(layout?);
                    self.status = SessionStatus::Playing;
                }
            }
            SessionStatus::Playing => {
                self.engine.grid_mut().expire_explosions(now_ms);
                if self.engine.tick(now_ms, self.player.position) {
                    self.player.is_dead = true;
                    self.lose_life(now_ms)?;
                }
            }
            SessionStatus::Victory | SessionStatus::GameOver => {}
        }
        Ok(self.status)
    }

    fn complete_level(&mut self) {
        self.completed_levels += 1;
        if self.levels.is_last_level() {
            log::info!("Final level {} complete", self.levels.current_level_name());
            self.status = SessionStatus::Victory;
        } else {
            log::info!("Level {} complete", self.levels.current_level_name());
            self.status = SessionStatus::LevelComplete;
        }
    }

    fn lose_life(&mut self, now_ms: u64) -> Result<(), LevelError> {
        self.lives = self.lives.saturating_sub(1);
        log::info!(
            "Player died at {} ({now_ms} ms), {} lives left",
            self.player.position,
            self.lives
        );
        if self.lives == 0 {
            self.status = SessionStatus::GameOver;
            return Ok(());
        }
        let layout = self.levels.reload_current_level()?;
        self.install(layout);
        Ok(())
    }
}
