//! Grid - bounded tile storage shared by every simulation system

use glam::IVec2;

use crate::simulation::Tile;

/// How long an explosion effect stays visible (12 frames at 60 ms)
pub const EXPLOSION_DURATION_MS: u64 = 720;

/// A visual-only record of a bomb detonation, consumed by renderers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExplosionEffect {
    /// Centre of the 3x3 blast
    pub pos: IVec2,
    /// Simulation time (ms) at which the bomb went off
    pub started_ms: u64,
}

impl ExplosionEffect {
    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.started_ms) >= EXPLOSION_DURATION_MS
    }
}

/// Fixed-size tile array with an implicit solid boundary.
///
/// Reads outside `[0, width) x [0, height)` return [`Tile::Wall`] and writes
/// there are ignored. The outermost ring is forced to Wall at construction.
/// The grid enforces no game rules; callers decide what is legal.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
    explosions: Vec<ExplosionEffect>,
}

impl Grid {
    /// Create a grid filled with Data and bordered by Wall
    pub fn new(width: usize, height: usize) -> Self {
        let mut grid = Self {
            width,
            height,
            tiles: vec![Tile::Data; width * height],
            explosions: Vec::new(),
        };
        grid.seal_border();
        grid
    }

    /// Create a grid from a row-major layout.
    ///
    /// Width is the longest row; cells missing from shorter rows are Data.
    /// The border ring is overwritten with Wall regardless of the input.
    pub fn from_rows(rows: &[Vec<Tile>]) -> Self {
        let height = rows.len();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut grid = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, &tile) in row.iter().enumerate() {
                grid.tiles[y * width + x] = tile;
            }
        }
        grid.seal_border();
        grid
    }

    fn seal_border(&mut self) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        let (w, h) = (self.width, self.height);
        for x in 0..w {
            self.tiles[x] = Tile::Wall;
            self.tiles[(h - 1) * w + x] = Tile::Wall;
        }
        for y in 0..h {
            self.tiles[y * w] = Tile::Wall;
            self.tiles[y * w + w - 1] = Tile::Wall;
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.in_bounds(x, y)
            .then(|| y as usize * self.width + x as usize)
    }

    /// Tile at (x, y); Wall when out of bounds
    pub fn get(&self, x: i32, y: i32) -> Tile {
        self.index(x, y).map_or(Tile::Wall, |i| self.tiles[i])
    }

    /// Overwrite (x, y); silently ignored when out of bounds
    pub fn set(&mut self, x: i32, y: i32, tile: Tile) {
        if let Some(i) = self.index(x, y) {
            self.tiles[i] = tile;
        }
    }

    pub fn get_at(&self, pos: IVec2) -> Tile {
        self.get(pos.x, pos.y)
    }

    pub fn set_at(&mut self, pos: IVec2, tile: Tile) {
        self.set(pos.x, pos.y, tile);
    }

    /// Row-major positions holding `tile`
    pub fn positions_of(&self, tile: Tile) -> Vec<IVec2> {
        self.positions_where(|t| t == tile)
    }

    /// Row-major positions whose tile satisfies `predicate`
    pub fn positions_where<F>(&self, predicate: F) -> Vec<IVec2>
    where
        F: Fn(Tile) -> bool,
    {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, t)| predicate(**t))
            .map(|(i, _)| IVec2::new((i % self.width) as i32, (i / self.width) as i32))
            .collect()
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Tiles of row `y` (empty slice when out of bounds)
    pub fn row(&self, y: usize) -> &[Tile] {
        if y >= self.height {
            return &[];
        }
        &self.tiles[y * self.width..(y + 1) * self.width]
    }

    /// Record a detonation for renderers
    pub fn add_explosion(&mut self, pos: IVec2, now_ms: u64) {
        self.explosions.push(ExplosionEffect {
            pos,
            started_ms: now_ms,
        });
    }

    /// Explosion effects recorded so far (expired ones included until pruned)
    pub fn explosions(&self) -> &[ExplosionEffect] {
        &self.explosions
    }

    /// Drop effects older than [`EXPLOSION_DURATION_MS`]
    pub fn expire_explosions(&mut self, now_ms: u64) {
        self.explosions.retain(|e| !e.is_expired(now_ms));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(grid: &Grid) -> Vec<Tile> {
        (0..grid.height()).flat_map(|y| grid.row(y).to_vec()).collect()
    }

    #[test]
    fn test_new_fills_data_inside_walls() {
        let grid = Grid::new(5, 4);
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 4);
        for y in 0..4 {
            for x in 0..5 {
                let border = x == 0 || y == 0 || x == 4 || y == 3;
                let expected = if border { Tile::Wall } else { Tile::Data };
                assert_eq!(grid.get(x, y), expected, "({x}, {y})");
            }
        }
    }

    #[test]
    fn test_out_of_bounds_reads_are_wall() {
        let mut grid = Grid::new(6, 6);
        grid.set(2, 2, Tile::Empty);
        for (x, y) in [(-1, 0), (0, -1), (6, 0), (0, 6), (-100, 50), (i32::MAX, i32::MIN)] {
            assert_eq!(grid.get(x, y), Tile::Wall);
        }
    }

    #[test]
    fn test_out_of_bounds_writes_are_ignored() {
        let mut grid = Grid::new(6, 6);
        let before = snapshot(&grid);
        grid.set(-1, 2, Tile::Empty);
        grid.set(6, 2, Tile::Empty);
        grid.set(2, 6, Tile::Sludge);
        grid.set(i32::MIN, i32::MAX, Tile::Key);
        assert_eq!(snapshot(&grid), before);
    }

    #[test]
    fn test_set_overwrites_without_validation() {
        let mut grid = Grid::new(5, 5);
        grid.set(2, 2, Tile::Predator);
        assert_eq!(grid.get(2, 2), Tile::Predator);
        // No rule enforcement: even the border can be rewritten after construction
        grid.set(0, 0, Tile::Empty);
        assert_eq!(grid.get(0, 0), Tile::Empty);
    }

    #[test]
    fn test_from_rows_forces_border() {
        let rows = vec![vec![Tile::Empty; 4]; 4];
        let grid = Grid::from_rows(&rows);
        assert_eq!(grid.get(0, 0), Tile::Wall);
        assert_eq!(grid.get(3, 1), Tile::Wall);
        assert_eq!(grid.get(1, 3), Tile::Wall);
        assert_eq!(grid.get(1, 1), Tile::Empty);
        assert_eq!(grid.get(2, 2), Tile::Empty);
    }

    #[test]
    fn test_from_rows_pads_short_rows_with_data() {
        let rows = vec![
            vec![Tile::Wall; 5],
            vec![Tile::Wall, Tile::Empty],
            vec![Tile::Wall; 5],
        ];
        let grid = Grid::from_rows(&rows);
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.get(1, 1), Tile::Empty);
        assert_eq!(grid.get(2, 1), Tile::Data);
        assert_eq!(grid.get(4, 1), Tile::Wall);
    }

    #[test]
    fn test_empty_grid_is_all_wall() {
        let grid = Grid::new(0, 0);
        assert_eq!(grid.get(0, 0), Tile::Wall);
        assert!(grid.row(0).is_empty());
    }

    #[test]
    fn test_positions_of_is_row_major() {
        let mut grid = Grid::new(5, 5);
        grid.set(3, 1, Tile::Teleporter);
        grid.set(1, 3, Tile::Teleporter);
        grid.set(2, 1, Tile::Teleporter);
        assert_eq!(
            grid.positions_of(Tile::Teleporter),
            vec![IVec2::new(2, 1), IVec2::new(3, 1), IVec2::new(1, 3)]
        );
        assert_eq!(grid.count(Tile::Teleporter), 3);
    }

    #[test]
    fn test_explosions_expire() {
        let mut grid = Grid::new(5, 5);
        grid.add_explosion(IVec2::new(2, 2), 1_000);
        grid.add_explosion(IVec2::new(1, 1), 1_500);
        assert_eq!(grid.explosions().len(), 2);

        grid.expire_explosions(1_000 + EXPLOSION_DURATION_MS - 1);
        assert_eq!(grid.explosions().len(), 2);

        grid.expire_explosions(1_000 + EXPLOSION_DURATION_MS);
        assert_eq!(grid.explosions().len(), 1);
        assert_eq!(grid.explosions()[0].pos, IVec2::new(1, 1));
    }
}
