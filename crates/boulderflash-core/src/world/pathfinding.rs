//! Breadth-first pathfinding for hunting enemies

use std::collections::VecDeque;

use glam::IVec2;

use super::Grid;
use crate::simulation::{Direction, ORTHOGONAL, Tile};

/// Grid pathfinding utilities - stateless
pub struct Pathfinder;

impl Pathfinder {
    /// First step of a shortest 4-connected path from `start` to `goal`.
    ///
    /// Only Empty tiles are walkable; `goal` itself is always accepted
    /// whatever it holds. Ties between equally short paths are broken by
    /// [`ORTHOGONAL`] order. Returns None when `goal` is unreachable or equal
    /// to `start`.
    pub fn first_step(grid: &Grid, start: IVec2, goal: IVec2) -> Option<Direction> {
        if start == goal {
            return None;
        }

        let width = grid.width();
        let mut visited = vec![false; width * grid.height()];
        let index = |p: IVec2| p.y as usize * width + p.x as usize;
        if grid.in_bounds(start.x, start.y) {
            visited[index(start)] = true;
        }

        let mut queue: VecDeque<(IVec2, Option<Direction>)> = VecDeque::new();
        queue.push_back((start, None));

        while let Some((pos, first)) = queue.pop_front() {
            if pos == goal {
                return first;
            }

            for dir in ORTHOGONAL {
                let next = pos + IVec2::from(dir.delta());
                if !grid.in_bounds(next.x, next.y) || visited[index(next)] {
                    continue;
                }
                if grid.get_at(next) != Tile::Empty && next != goal {
                    continue;
                }
                visited[index(next)] = true;
                queue.push_back((next, first.or(Some(dir))));
            }
        }

        None
    }
}
