//! Grid directions

use serde::{Deserialize, Serialize};

/// One of the four axis-aligned grid directions.
///
/// Rows grow downwards: `Down` is `(0, 1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Orthogonal neighbour order used by every scan in the engine.
///
/// Order: S, N, E, W. Pathfinding tie-breaks follow this order.
pub const ORTHOGONAL: [Direction; 4] = [
    Direction::Down,
    Direction::Up,
    Direction::Right,
    Direction::Left,
];

impl Direction {
    /// Cell offset `(dx, dy)` for one step in this direction
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}
