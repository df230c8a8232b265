//! Scripted replay on a simulated frame clock

use std::io::Write;

use anyhow::{Result, bail};

use boulderflash_core::entity::Action;
use boulderflash_core::{GameSession, SessionStatus};

use crate::config::RunnerConfig;
use crate::render::{AsciiRenderer, status_line};

/// Simulated display refresh rate
pub const FRAME_RATE_HZ: u64 = 60;

/// Clock reading at the start of `frame`
pub fn frame_time_ms(frame: u64) -> u64 {
    frame * 1000 / FRAME_RATE_HZ
}

/// Parse an action script. Whitespace is ignored; any other unknown
/// character is an error.
pub fn parse_script(script: &str) -> Result<Vec<Action>> {
    let mut actions = Vec::with_capacity(script.len());
    for (i, c) in script.chars().enumerate() {
        if c.is_whitespace() {
            continue;
        }
        match Action::from_char(c) {
            Some(action) => actions.push(action),
            None => bail!("Unknown action '{c}' at position {i} (expected one of U D L R B P .)"),
        }
    }
    Ok(actions)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayConfig {
    /// Frames simulated after each action (at least one)
    pub frames_per_action: u32,
    /// Print the board every N frames; 0 prints only the final board
    pub print_every: u32,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self::from(&RunnerConfig::default())
    }
}

impl From<&RunnerConfig> for ReplayConfig {
    fn from(config: &RunnerConfig) -> Self {
        Self {
            frames_per_action: config.frames_per_action,
            print_every: config.print_every,
        }
    }
}

/// Outcome of a replay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaySummary {
    pub frames: u64,
    pub actions_applied: usize,
    pub status: SessionStatus,
    pub lives: u32,
    pub completed_levels: u32,
    pub level_name: String,
}

/// Drives a [`GameSession`] from a list of actions
pub struct ReplayRunner {
    session: GameSession,
    config: ReplayConfig,
    renderer: AsciiRenderer,
    frame: u64,
}

impl ReplayRunner {
    pub fn new(session: GameSession, config: ReplayConfig) -> Self {
        let renderer = AsciiRenderer::for_grid(session.engine().grid());
        Self {
            session,
            config,
            renderer,
            frame: 0,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Frames simulated so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Apply each action, then simulate `frames_per_action` frames. Stops
    /// early once the session is won or lost. The final board is always
    /// written to `out`.
    pub fn run<W: Write>(&mut self, actions: &[Action], out: &mut W) -> Result<ReplaySummary> {
        let mut applied = 0;

        for &action in actions {
            if self.session.status().is_finished() {
                break;
            }
            let now = frame_time_ms(self.frame);
            if let Some(outcome) = self.session.apply(action, now)? {
                log::debug!("Frame {}: {:?} -> {outcome:?}", self.frame, action);
            }
            applied += 1;

            for _ in 0..self.config.frames_per_action.max(1) {
                self.step(out)?;
                if self.session.status().is_finished() {
                    break;
                }
            }
        }

        self.print_frame(out)?;

        let summary = ReplaySummary {
            frames: self.frame,
            actions_applied: applied,
            status: self.session.status(),
            lives: self.session.lives(),
            completed_levels: self.session.completed_levels(),
            level_name: self.session.level_name().to_string(),
        };
        log::info!(
            "Replay finished after {} frames: {:?}",
            summary.frames,
            summary.status
        );
        Ok(summary)
    }

    fn step<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let now = frame_time_ms(self.frame);
        self.session.update(now)?;
        self.frame += 1;

        if self.config.print_every > 0 && self.frame % u64::from(self.config.print_every) == 0 {
            self.print_frame(out)?;
        }
        Ok(())
    }

    fn print_frame<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let now = frame_time_ms(self.frame);
        let player = (self.session.status() == SessionStatus::Playing)
            .then(|| self.session.player().position);
        self.renderer.render(self.session.engine().grid(), player, now);

        writeln!(out, "frame {} ({now} ms)", self.frame)?;
        writeln!(out, "{}", status_line(&self.session))?;
        writeln!(out, "{}", self.renderer.as_text())?;
        writeln!(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boulderflash_core::SessionConfig;
    use boulderflash_core::levels::LevelManager;
    use boulderflash_core::simulation::Direction;
    use boulderflash_core::world::EngineConfig;

    fn runner(map: &str, config: ReplayConfig) -> ReplayRunner {
        let session = GameSession::new(
            LevelManager::single("test", map),
            SessionConfig::default(),
            EngineConfig::default(),
            5,
            0,
        )
        .unwrap();
        ReplayRunner::new(session, config)
    }

    #[test]
    fn test_parse_script() {
        let actions = parse_script("rR d\n.B p").unwrap();
        assert_eq!(
            actions,
            vec![
                Action::Move(Direction::Right),
                Action::Move(Direction::Right),
                Action::Move(Direction::Down),
                Action::Wait,
                Action::PlaceBomb,
                Action::PlacePillar,
            ]
        );
    }

    #[test]
    fn test_parse_script_rejects_unknown() {
        let err = parse_script("RRQ").unwrap_err();
        assert!(err.to_string().contains("'Q' at position 2"));
    }

    #[test]
    fn test_frame_clock_is_60hz() {
        assert_eq!(frame_time_ms(0), 0);
        assert_eq!(frame_time_ms(1), 16);
        assert_eq!(frame_time_ms(60), 1_000);
        assert_eq!(frame_time_ms(90), 1_500);
    }

    #[test]
    fn test_collect_keys_and_win() {
        let mut runner = runner("#######\n#PKKX.#\n#######", ReplayConfig::default());
        let actions = parse_script("RRR").unwrap();
        let mut out = Vec::new();
        let summary = runner.run(&actions, &mut out).unwrap();

        assert_eq!(summary.status, SessionStatus::Victory);
        assert_eq!(summary.completed_levels, 1);
        assert_eq!(summary.actions_applied, 3);
        assert_eq!(summary.lives, 3);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Victory"));
    }

    #[test]
    fn test_trapped_player_runs_out_of_lives() {
        let mut runner = runner("###\n#P#\n###", ReplayConfig::default());
        let actions = parse_script("...").unwrap();
        let summary = runner.run(&actions, &mut std::io::sink()).unwrap();

        // One kill per frame: every reload starts with a fresh physics pass
        assert_eq!(summary.status, SessionStatus::GameOver);
        assert_eq!(summary.lives, 0);
        assert_eq!(summary.frames, 3);
        assert_eq!(summary.actions_applied, 1);
    }

    #[test]
    fn test_print_every_writes_periodic_frames() {
        let config = ReplayConfig {
            frames_per_action: 6,
            print_every: 2,
        };
        let mut runner = runner("#####\n#P..#\n#####", config);
        let mut out = Vec::new();
        runner.run(&parse_script("R").unwrap(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        // Frames 2, 4 and 6, then the final board
        assert_eq!(text.matches("frame ").count(), 4);
        assert!(text.contains("#.@.#"));
    }
}
