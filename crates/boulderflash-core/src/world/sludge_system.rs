//! Sludge growth - stochastic spread into empty neighbours

use glam::IVec2;

use super::{Grid, SimStats, WorldRng};
use crate::simulation::{ORTHOGONAL, Tile};

pub struct SludgeSystem;

impl SludgeSystem {
    /// Empty 4-neighbours of every sludge tile, in row-major order of the
    /// source tile. A cell next to several sludge tiles appears once per
    /// neighbour, so it gets that many chances to convert.
    pub fn growth_candidates(grid: &Grid) -> Vec<IVec2> {
        let mut candidates = Vec::new();
        for pos in grid.positions_of(Tile::Sludge) {
            for dir in ORTHOGONAL {
                let next = pos + IVec2::from(dir.delta());
                if grid.get_at(next) == Tile::Empty {
                    candidates.push(next);
                }
            }
        }
        candidates
    }

    /// One growth step. Candidates are gathered before anything converts,
    /// so new sludge never spreads again within the same step.
    pub fn update<R: WorldRng>(
        grid: &mut Grid,
        chance: f32,
        rng: &mut R,
        stats: &mut dyn SimStats,
    ) {
        for cell in Self::growth_candidates(grid) {
            if rng.check_probability(chance) && grid.get_at(cell) == Tile::Empty {
                grid.set_at(cell, Tile::Sludge);
                stats.record_sludge_growth();
                log::trace!("Sludge spread to {cell}");
            }
        }
    }
}
