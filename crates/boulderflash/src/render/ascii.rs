//! CPU-side character buffer renderer for terminal output
//!
//! Reads tiles and explosion effects only; it never touches simulation state.

use glam::IVec2;

use boulderflash_core::GameSession;
use boulderflash_core::world::Grid;

/// Drawn over the player's cell
pub const PLAYER_GLYPH: char = '@';
/// Drawn over every cell of a live explosion's 3x3 block
pub const EXPLOSION_GLYPH: char = '%';

/// Renderer that outputs to a character buffer, one char per tile
pub struct AsciiRenderer {
    pub width: usize,
    pub height: usize,
    /// Row-major glyphs
    pub buffer: Vec<char>,
}

impl AsciiRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            buffer: vec![' '; width * height],
        }
    }

    /// Renderer sized to `grid`
    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.width(), grid.height())
    }

    /// Draw the grid, then explosions still alive at `now_ms`, then the player
    pub fn render(&mut self, grid: &Grid, player: Option<IVec2>, now_ms: u64) {
        if grid.width() != self.width || grid.height() != self.height {
            *self = Self::for_grid(grid);
        }

        for y in 0..self.height {
            for (x, tile) in grid.row(y).iter().enumerate() {
                self.buffer[y * self.width + x] = tile.glyph();
            }
        }

        for effect in grid.explosions() {
            if effect.is_expired(now_ms) {
                continue;
            }
            for dy in -1..=1 {
                for dx in -1..=1 {
                    self.plot(effect.pos + IVec2::new(dx, dy), EXPLOSION_GLYPH);
                }
            }
        }

        if let Some(pos) = player {
            self.plot(pos, PLAYER_GLYPH);
        }
    }

    fn plot(&mut self, pos: IVec2, glyph: char) {
        if pos.x < 0 || pos.y < 0 {
            return;
        }
        let (x, y) = (pos.x as usize, pos.y as usize);
        if x < self.width && y < self.height {
            self.buffer[y * self.width + x] = glyph;
        }
    }

    /// Buffer contents as newline-separated rows
    pub fn as_text(&self) -> String {
        self.buffer
            .chunks(self.width.max(1))
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// One-line HUD for the current session state
pub fn status_line(session: &GameSession) -> String {
    let player = session.player();
    format!(
        "[{}] {} | lives {} | keys {}/{} | bombs {} | pillars {} | {:?}",
        session.level_index() + 1,
        session.level_name(),
        session.lives(),
        player.keys_collected,
        player.keys_required,
        player.bombs,
        player.pillars,
        session.status()
    )
}
