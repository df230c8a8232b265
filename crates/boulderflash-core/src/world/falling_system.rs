//! Falling-object physics - gravity, reversed gravity and diagonal slides

use ahash::AHashSet;
use glam::IVec2;

use super::{GravityZones, Grid, SimStats};
use crate::simulation::{Tile, TileFlags};

/// Coordinates already resolved during the current physics tick
pub type ProcessedCells = AHashSet<IVec2>;

/// What happened to a single falling object this tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FallOutcome {
    /// Blocked, or waiting above the player
    Stayed,
    /// Fell, rose or slid one cell
    Moved,
    /// A rising Firewall hit the player
    CrushedPlayer,
}

/// Gravity updater for Firewall and Key tiles
pub struct FallingObjectUpdater;

impl FallingObjectUpdater {
    /// Run one physics pass over the whole grid.
    ///
    /// Clears `processed` first, then scans rows bottom-to-top and columns
    /// left-to-right so a column of falling objects moves one cell each
    /// without any cell being moved twice. Returns true if the player was
    /// killed.
    pub fn update(
        grid: &mut Grid,
        zones: &GravityZones,
        processed: &mut ProcessedCells,
        player: IVec2,
        stats: &mut dyn SimStats,
    ) -> bool {
        processed.clear();
        let mut killed = false;

        let width = grid.width() as i32;
        let height = grid.height() as i32;
        for y in (0..height).rev() {
            for x in 0..width {
                let pos = IVec2::new(x, y);
                if processed.contains(&pos) || !grid.get_at(pos).is_fallable() {
                    continue;
                }
                let outcome = Self::update_object(grid, zones, processed, pos, player, stats);
                if outcome == FallOutcome::CrushedPlayer {
                    log::debug!("Rising firewall at {pos} crushed the player");
                    killed = true;
                }
            }
        }

        killed
    }

    /// Resolve one fallable object at `pos`
    pub fn update_object(
        grid: &mut Grid,
        zones: &GravityZones,
        processed: &mut ProcessedCells,
        pos: IVec2,
        player: IVec2,
        stats: &mut dyn SimStats,
    ) -> FallOutcome {
        let tile = grid.get_at(pos);

        if Self::gravity_reversed(grid, zones, pos) {
            let target = pos - IVec2::Y;
            if target == player {
                return if tile == Tile::Firewall {
                    FallOutcome::CrushedPlayer
                } else {
                    FallOutcome::Stayed
                };
            }
            if grid.get_at(target).is_open() {
                Self::move_object(grid, zones, processed, pos, target, stats);
                return FallOutcome::Moved;
            }
            return FallOutcome::Stayed;
        }

        let below = pos + IVec2::Y;
        // Resting on the player is the crush timer's business, not ours
        if below == player {
            return FallOutcome::Stayed;
        }

        let below_tile = grid.get_at(below);
        if below_tile.has(TileFlags::LANDING) {
            Self::move_object(grid, zones, processed, pos, below, stats);
            return FallOutcome::Moved;
        }

        if below_tile.has(TileFlags::SLIDE_BASE) {
            // Left first
            for dx in [-1, 1] {
                let side = pos + IVec2::new(dx, 0);
                let diagonal = side + IVec2::Y;
                if grid.get_at(side).is_open()
                    && grid.get_at(diagonal).is_open()
                    && diagonal != player
                {
                    Self::move_object(grid, zones, processed, pos, side, stats);
                    return FallOutcome::Moved;
                }
            }
        }

        FallOutcome::Stayed
    }

    /// True when a registered gravity zone lies at or below `pos` in the same
    /// column with no gravity blocker (Wall, Pillar, Data, Sludge) in between.
    pub fn gravity_reversed(grid: &Grid, zones: &GravityZones, pos: IVec2) -> bool {
        let height = grid.height() as i32;
        for y in pos.y..height {
            let cell = IVec2::new(pos.x, y);
            if zones.contains(cell) {
                return true;
            }
            if grid.get_at(cell).has(TileFlags::GRAVITY_BLOCKER) {
                return false;
            }
        }
        false
    }

    fn move_object(
        grid: &mut Grid,
        zones: &GravityZones,
        processed: &mut ProcessedCells,
        from: IVec2,
        to: IVec2,
        stats: &mut dyn SimStats,
    ) {
        let tile = grid.get_at(from);
        grid.set_at(from, zones.vacated_tile(from));
        grid.set_at(to, tile);
        processed.insert(to);
        stats.record_object_moved();
        log::trace!("{} moved {from} -> {to}", tile.name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::NoopStats;
    use crate::world::test_support::{grid_from_map, map_of};

    const NOWHERE: IVec2 = IVec2::new(-10, -10);

    fn step(grid: &mut Grid, zones: &GravityZones, player: IVec2) -> bool {
        let mut processed = ProcessedCells::default();
        FallingObjectUpdater::update(grid, zones, &mut processed, player, &mut NoopStats)
    }

    #[test]
    fn test_firewall_falls_one_row_per_pass() {
        let (mut grid, zones, _) = grid_from_map(
            "#####
             #.F.#
             #...#
             #...#
             #####",
        );

        assert!(!step(&mut grid, &zones, NOWHERE));
        assert_eq!(grid.get(2, 1), Tile::Empty);
        assert_eq!(grid.get(2, 2), Tile::Firewall);

        step(&mut grid, &zones, NOWHERE);
        assert_eq!(grid.get(2, 3), Tile::Firewall);

        // Landed on the border: no further movement, no slide possible
        step(&mut grid, &zones, NOWHERE);
        assert_eq!(grid.get(2, 3), Tile::Firewall);
        assert_eq!(grid.count(Tile::Firewall), 1);
    }

    #[test]
    fn test_stacked_objects_move_once_each() {
        let (mut grid, zones, _) = grid_from_map(
            "#####
             #.F.#
             #.K.#
             #...#
             #...#
             #####",
        );

        step(&mut grid, &zones, NOWHERE);
        assert_eq!(grid.get(2, 2), Tile::Firewall);
        assert_eq!(grid.get(2, 3), Tile::Key);
        assert_eq!(grid.get(2, 4), Tile::Empty);
    }

    #[test]
    fn test_slide_prefers_left() {
        let (mut grid, zones, _) = grid_from_map(
            "#####
             #...#
             #.F.#
             #.K.#
             #####",
        );

        step(&mut grid, &zones, NOWHERE);
        assert_eq!(
            map_of(&grid),
            "#####\n\
             #...#\n\
             #F..#\n\
             #.K.#\n\
             #####"
        );
    }

    #[test]
    fn test_slide_right_when_left_blocked() {
        let (mut grid, zones, _) = grid_from_map(
            "#####
             #...#
             #*F.#
             #.K.#
             #####",
        );

        step(&mut grid, &zones, NOWHERE);
        assert_eq!(grid.get(3, 2), Tile::Firewall);
        assert_eq!(grid.get(2, 2), Tile::Empty);
    }

    #[test]
    fn test_slide_needs_open_diagonal() {
        let (mut grid, zones, _) = grid_from_map(
            "#####
             #...#
             #.F.#
             #*K*#
             #####",
        );

        step(&mut grid, &zones, NOWHERE);
        assert_eq!(grid.get(2, 2), Tile::Firewall);
    }

    #[test]
    fn test_slide_avoids_player_diagonal() {
        let (mut grid, zones, player) = grid_from_map(
            "#####
             #...#
             #.F.#
             #PK.#
             #####",
        );

        step(&mut grid, &zones, player);
        assert_eq!(grid.get(1, 2), Tile::Empty);
        assert_eq!(grid.get(3, 2), Tile::Firewall);
    }

    #[test]
    fn test_no_slide_off_data() {
        let (mut grid, zones, _) = grid_from_map(
            "#####
             #...#
             #.F.#
             #.*.#
             #####",
        );

        step(&mut grid, &zones, NOWHERE);
        assert_eq!(grid.get(2, 2), Tile::Firewall);
    }

    #[test]
    fn test_waits_above_player_without_killing() {
        let (mut grid, zones, player) = grid_from_map(
            "#####
             #.F.#
             #.P.#
             #...#
             #####",
        );

        assert!(!step(&mut grid, &zones, player));
        assert_eq!(grid.get(2, 1), Tile::Firewall);
        assert_eq!(grid.get(2, 2), Tile::Empty);
    }

    #[test]
    fn test_falling_object_overwrites_enemies() {
        let (mut grid, zones, _) = grid_from_map(
            "#######
             #.F.K.#
             #.A.B.#
             #*****#
             #######",
        );

        step(&mut grid, &zones, NOWHERE);
        assert_eq!(grid.get(2, 2), Tile::Firewall);
        assert_eq!(grid.get(4, 2), Tile::Key);
        assert_eq!(grid.count(Tile::Predator), 0);
        assert_eq!(grid.count(Tile::Builder), 0);
    }

    #[test]
    fn test_gravity_zone_reverses_fall() {
        let (mut grid, zones, _) = grid_from_map(
            "#####
             #...#
             #.F.#
             #...#
             #.G.#
             #####",
        );

        step(&mut grid, &zones, NOWHERE);
        assert_eq!(grid.get(2, 1), Tile::Firewall);
        assert_eq!(grid.get(2, 2), Tile::Empty);

        // Ceiling reached
        step(&mut grid, &zones, NOWHERE);
        assert_eq!(grid.get(2, 1), Tile::Firewall);
    }

    #[test]
    fn test_gravity_zone_shielded_by_blocker() {
        let (mut grid, zones, _) = grid_from_map(
            "#####
             #...#
             #.F.#
             #...#
             #.*.#
             #.G.#
             #####",
        );

        assert!(!FallingObjectUpdater::gravity_reversed(
            &grid,
            &zones,
            IVec2::new(2, 2)
        ));
        step(&mut grid, &zones, NOWHERE);
        assert_eq!(grid.get(2, 3), Tile::Firewall);
    }

    #[test]
    fn test_fallable_objects_do_not_shield_gravity() {
        let (grid, zones, _) = grid_from_map(
            "#####
             #.F.#
             #.K.#
             #.G.#
             #####",
        );

        assert!(FallingObjectUpdater::gravity_reversed(
            &grid,
            &zones,
            IVec2::new(2, 1)
        ));
    }

    #[test]
    fn test_leaving_zone_restores_marker() {
        let (mut grid, zones, _) = grid_from_map(
            "#####
             #...#
             #...#
             #.G.#
             #.G.#
             #####",
        );
        grid.set(2, 3, Tile::Firewall);

        step(&mut grid, &zones, NOWHERE);
        assert_eq!(grid.get(2, 2), Tile::Firewall);
        assert_eq!(grid.get(2, 3), Tile::GravityZone);
    }

    #[test]
    fn test_rising_firewall_kills_player() {
        let (mut grid, zones, player) = grid_from_map(
            "#####
             #.P.#
             #.F.#
             #.G.#
             #####",
        );

        assert!(step(&mut grid, &zones, player));
        assert_eq!(grid.get(2, 2), Tile::Firewall);
    }

    #[test]
    fn test_rising_key_does_not_kill_player() {
        let (mut grid, zones, player) = grid_from_map(
            "#####
             #.P.#
             #.K.#
             #.G.#
             #####",
        );

        assert!(!step(&mut grid, &zones, player));
        assert_eq!(grid.get(2, 2), Tile::Key);
    }

    #[test]
    fn test_processed_cells_cleared_each_pass() {
        let (mut grid, zones, _) = grid_from_map(
            "#####
             #.F.#
             #...#
             #...#
             #####",
        );
        let mut processed = ProcessedCells::default();
        processed.insert(IVec2::new(2, 1));

        FallingObjectUpdater::update(&mut grid, &zones, &mut processed, NOWHERE, &mut NoopStats);
        assert_eq!(grid.get(2, 2), Tile::Firewall);
        assert!(processed.contains(&IVec2::new(2, 2)));
        assert!(!processed.contains(&IVec2::new(2, 1)));
    }
}
