//! Enemy movement - hunting predators and wandering builders

use glam::IVec2;

use super::enemy_roster::{EnemyId, EnemyKind, EnemyRoster};
use super::falling_system::ProcessedCells;
use super::pathfinding::Pathfinder;
use super::{GravityZones, Grid, SimStats, WorldRng};
use crate::simulation::{Direction, ORTHOGONAL, Tile};

/// Moves every enemy at most one cell per physics tick
pub struct EnemySystem {
    roster: EnemyRoster,
    /// Minimum wall-clock time between two predator moves
    predator_move_delay_ms: u64,
}

impl EnemySystem {
    pub fn new(grid: &Grid, predator_move_delay_ms: u64) -> Self {
        Self {
            roster: EnemyRoster::from_grid(grid),
            predator_move_delay_ms,
        }
    }

    pub fn roster(&self) -> &EnemyRoster {
        &self.roster
    }

    /// Run the enemy step. Enemies are snapshotted before any of them moves,
    /// so an enemy is never iterated twice. Returns true if two predators
    /// converged on the player.
    #[allow(clippy::too_many_arguments)]
    pub fn update<R: WorldRng>(
        &mut self,
        grid: &mut Grid,
        zones: &GravityZones,
        processed: &mut ProcessedCells,
        player: IVec2,
        now_ms: u64,
        rng: &mut R,
        stats: &mut dyn SimStats,
    ) -> bool {
        self.roster.sync(grid);
        let mut killed = false;

        for id in self.roster.snapshot() {
            // Absorbed by another predator earlier in this pass
            let Some(enemy) = self.roster.get(id).copied() else {
                continue;
            };
            if processed.contains(&enemy.pos) {
                continue;
            }

            let step = match enemy.kind {
                EnemyKind::Predator => {
                    if let Some(last) = enemy.last_move_ms
                        && now_ms.saturating_sub(last) < self.predator_move_delay_ms
                    {
                        continue;
                    }
                    Pathfinder::first_step(grid, enemy.pos, player)
                }
                EnemyKind::Builder => Self::wander_direction(grid, enemy.pos, rng),
            };
            let Some(dir) = step else {
                continue;
            };

            let target = enemy.pos + IVec2::from(dir.delta());
            if enemy.kind == EnemyKind::Predator && target == player {
                if grid.get_at(target) == Tile::Predator {
                    log::debug!("Two predators converged on the player at {target}");
                    killed = true;
                }
                let left_behind = zones.vacated_tile(enemy.pos);
                self.advance(grid, processed, id, enemy.pos, target, left_behind);
                stats.record_enemy_moved();
            } else if grid.get_at(target) == Tile::Empty {
                let left_behind = match enemy.kind {
                    EnemyKind::Predator => zones.vacated_tile(enemy.pos),
                    EnemyKind::Builder => Tile::Data,
                };
                self.advance(grid, processed, id, enemy.pos, target, left_behind);
                if enemy.kind == EnemyKind::Predator {
                    self.roster.mark_moved(id, now_ms);
                }
                stats.record_enemy_moved();
            }
        }

        killed
    }

    /// First empty neighbour in a fresh random permutation of the directions
    fn wander_direction<R: WorldRng>(grid: &Grid, pos: IVec2, rng: &mut R) -> Option<Direction> {
        let mut dirs = ORTHOGONAL;
        rng.shuffle(&mut dirs);
        dirs.into_iter()
            .find(|dir| grid.get_at(pos + IVec2::from(dir.delta())) == Tile::Empty)
    }

    fn advance(
        &mut self,
        grid: &mut Grid,
        processed: &mut ProcessedCells,
        id: EnemyId,
        from: IVec2,
        to: IVec2,
        left_behind: Tile,
    ) {
        let tile = grid.get_at(from);
        grid.set_at(from, left_behind);
        grid.set_at(to, tile);
        processed.insert(to);
        self.roster.relocate(id, to);
        log::trace!("{} {} moved {from} -> {to}", tile.name(), id.raw());
    }
}
