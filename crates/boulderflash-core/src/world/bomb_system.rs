//! Bomb countdowns and 3x3 detonations

use glam::IVec2;

use super::{Grid, SimStats};
use crate::simulation::{Tile, TileFlags};

/// A placed bomb waiting to go off
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveBomb {
    pub pos: IVec2,
    /// Physics ticks left before detonation
    pub countdown: u32,
}

/// Active bombs in placement order
#[derive(Clone, Debug, Default)]
pub struct BombSystem {
    bombs: Vec<ActiveBomb>,
}

impl BombSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bombs(&self) -> &[ActiveBomb] {
        &self.bombs
    }

    pub fn is_empty(&self) -> bool {
        self.bombs.is_empty()
    }

    /// Arm a bomb at `pos` and stamp its marker tile
    pub fn place(&mut self, grid: &mut Grid, pos: IVec2, fuse_ticks: u32) {
        if !grid.in_bounds(pos.x, pos.y) {
            return;
        }
        grid.set_at(pos, Tile::Bomb);
        self.bombs.push(ActiveBomb {
            pos,
            countdown: fuse_ticks,
        });
        log::debug!("Bomb armed at {pos} ({fuse_ticks} ticks)");
    }

    /// Advance every countdown by one physics tick and detonate the bombs
    /// that reach zero. Returns true if a blast caught the player.
    pub fn update(
        &mut self,
        grid: &mut Grid,
        player: IVec2,
        now_ms: u64,
        stats: &mut dyn SimStats,
    ) -> bool {
        let mut killed = false;
        let mut detonated = Vec::new();

        self.bombs.retain_mut(|bomb| {
            bomb.countdown = bomb.countdown.saturating_sub(1);
            if bomb.countdown == 0 {
                detonated.push(bomb.pos);
                false
            } else {
                true
            }
        });

        for pos in detonated {
            killed |= Self::detonate(grid, pos, player, now_ms);
            stats.record_detonation();
        }

        killed
    }

    /// Clear every non-Wall tile in the 3x3 block around `center`
    pub fn detonate(grid: &mut Grid, center: IVec2, player: IVec2, now_ms: u64) -> bool {
        grid.add_explosion(center, now_ms);

        let mut killed = false;
        for dy in -1..=1 {
            for dx in -1..=1 {
                let cell = center + IVec2::new(dx, dy);
                if grid.get_at(cell).has(TileFlags::BLAST_PROOF) {
                    continue;
                }
                grid.set_at(cell, Tile::Empty);
                if cell == player {
                    killed = true;
                }
            }
        }

        log::debug!("Bomb detonated at {center}");
        if killed {
            log::debug!("Player caught in the blast at {player}");
        }
        killed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::NoopStats;
    use crate::world::test_support::{grid_from_map, map_of};

    const NOWHERE: IVec2 = IVec2::new(-10, -10);

    #[test]
    fn test_place_stamps_marker() {
        let (mut grid, _, _) = grid_from_map(
            "#####
             #...#
             #####",
        );
        let mut bombs = BombSystem::new();
        bombs.place(&mut grid, IVec2::new(2, 1), 10);

        assert_eq!(grid.get(2, 1), Tile::Bomb);
        assert_eq!(
            bombs.bombs(),
            &[ActiveBomb {
                pos: IVec2::new(2, 1),
                countdown: 10
            }]
        );
    }

    #[test]
    fn test_detonates_on_tenth_tick() {
        let (mut grid, _, _) = grid_from_map(
            "######
             #****#
             #****#
             #****#
             ######",
        );
        let mut bombs = BombSystem::new();
        bombs.place(&mut grid, IVec2::new(2, 2), 10);

        for tick in 1..10 {
            assert!(!bombs.update(&mut grid, NOWHERE, tick * 150, &mut NoopStats));
            assert_eq!(grid.get(2, 2), Tile::Bomb, "tick {tick}");
        }
        assert_eq!(bombs.bombs()[0].countdown, 1);

        bombs.update(&mut grid, NOWHERE, 1_500, &mut NoopStats);
        assert!(bombs.is_empty());
        assert_eq!(
            map_of(&grid),
            "######\n\
             #...*#\n\
             #...*#\n\
             #...*#\n\
             ######"
        );
        assert_eq!(grid.explosions().len(), 1);
        assert_eq!(grid.explosions()[0].started_ms, 1_500);
    }

    #[test]
    fn test_blast_spares_walls() {
        let (mut grid, _, _) = grid_from_map(
            "####
             #.F#
             ####",
        );
        BombSystem::detonate(&mut grid, IVec2::new(1, 1), NOWHERE, 0);

        assert_eq!(
            map_of(&grid),
            "####\n\
             #..#\n\
             ####"
        );
    }

    #[test]
    fn test_blast_kills_player_in_range() {
        let (mut grid, _, player) = grid_from_map(
            "######
             #.P..#
             ######",
        );
        assert!(BombSystem::detonate(&mut grid, IVec2::new(1, 1), player, 0));
        assert!(!BombSystem::detonate(&mut grid, IVec2::new(4, 1), player, 0));
    }

    #[test]
    fn test_bombs_count_down_independently() {
        let (mut grid, _, _) = grid_from_map(
            "#######
             #.....#
             #######",
        );
        let mut bombs = BombSystem::new();
        bombs.place(&mut grid, IVec2::new(1, 1), 2);
        bombs.update(&mut grid, NOWHERE, 0, &mut NoopStats);
        bombs.place(&mut grid, IVec2::new(5, 1), 2);

        bombs.update(&mut grid, NOWHERE, 150, &mut NoopStats);
        assert_eq!(bombs.bombs().len(), 1);
        assert_eq!(bombs.bombs()[0].pos, IVec2::new(5, 1));
        assert_eq!(grid.get(5, 1), Tile::Bomb);

        bombs.update(&mut grid, NOWHERE, 300, &mut NoopStats);
        assert!(bombs.is_empty());
        assert_eq!(grid.explosions().len(), 2);
    }

    #[test]
    fn test_out_of_bounds_placement_ignored() {
        let (mut grid, _, _) = grid_from_map(
            "###
             #.#
             ###",
        );
        let mut bombs = BombSystem::new();
        bombs.place(&mut grid, IVec2::new(7, 7), 10);
        assert!(bombs.is_empty());
    }
}
