//! Map fixtures for world unit tests

use glam::IVec2;

use super::{GravityZones, Grid};
use crate::simulation::Tile;

/// Build a grid from glyph rows. `G` cells are also registered as gravity
/// zones; `P` marks the player (stored as Empty). Returns the player position,
/// or (-1, -1) when the map has none.
pub(crate) fn grid_from_map(map: &str) -> (Grid, GravityZones, IVec2) {
    let mut zones = GravityZones::new();
    let mut player = IVec2::new(-1, -1);
    let rows: Vec<Vec<Tile>> = map
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(y, line)| {
            line.chars()
                .enumerate()
                .map(|(x, c)| {
                    let pos = IVec2::new(x as i32, y as i32);
                    match c {
                        'P' => {
                            player = pos;
                            Tile::Empty
                        }
                        'G' => {
                            zones.insert(pos);
                            Tile::GravityZone
                        }
                        other => Tile::from_glyph(other).unwrap_or(Tile::Empty),
                    }
                })
                .collect()
        })
        .collect();
    (Grid::from_rows(&rows), zones, player)
}

/// Render the grid back to glyph rows (player not drawn)
pub(crate) fn map_of(grid: &Grid) -> String {
    (0..grid.height())
        .map(|y| grid.row(y).iter().map(|t| t.glyph()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
