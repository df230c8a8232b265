//! Player hazard checks - crush threat and stalemate detection

use glam::IVec2;

use super::Grid;
use crate::simulation::{ORTHOGONAL, Tile, TileFlags};

/// Stateless queries about the player's surroundings
pub struct HazardChecks;

impl HazardChecks {
    /// A Firewall rests directly above the player
    pub fn is_crush_threat(grid: &Grid, player: IVec2) -> bool {
        grid.get_at(player - IVec2::Y) == Tile::Firewall
    }

    /// True when no neighbour of `player` offers a legal move.
    ///
    /// A neighbour is an escape if the player can enter it (or die in it),
    /// or if it is a horizontally adjacent Firewall with Empty beyond.
    pub fn is_trapped(grid: &Grid, player: IVec2) -> bool {
        !ORTHOGONAL.into_iter().any(|dir| {
            let next = player + IVec2::from(dir.delta());
            let tile = grid.get_at(next);
            if tile.has(TileFlags::ESCAPE) {
                return true;
            }
            dir.is_horizontal()
                && tile == Tile::Firewall
                && grid.get_at(next + IVec2::from(dir.delta())) == Tile::Empty
        })
    }
}

/// Tracks how long a crush threat has been held continuously
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CrushTimer {
    since_ms: Option<u64>,
}

impl CrushTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current threat state. Returns true once the threat has been
    /// held for at least `grace_ms`; any break resets the timer.
    pub fn update(&mut self, threatened: bool, now_ms: u64, grace_ms: u64) -> bool {
        if !threatened {
            self.since_ms = None;
            return false;
        }
        let since = *self.since_ms.get_or_insert(now_ms);
        now_ms.saturating_sub(since) >= grace_ms
    }
}
