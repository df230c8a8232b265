//! Enemy arena - stable ids for grid-resident enemies

use ahash::AHashMap;
use glam::IVec2;

use super::Grid;
use crate::simulation::Tile;

/// Stable identifier of an enemy for the lifetime of a level
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnemyId(u32);

impl EnemyId {
    pub fn raw(self) -> u32 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    Predator,
    Builder,
}

impl EnemyKind {
    pub fn tile(self) -> Tile {
        match self {
            EnemyKind::Predator => Tile::Predator,
            EnemyKind::Builder => Tile::Builder,
        }
    }

    pub fn from_tile(tile: Tile) -> Option<Self> {
        match tile {
            Tile::Predator => Some(EnemyKind::Predator),
            Tile::Builder => Some(EnemyKind::Builder),
            _ => None,
        }
    }
}

/// Per-enemy state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Enemy {
    pub id: EnemyId,
    pub kind: EnemyKind,
    pub pos: IVec2,
    /// Time of the last move onto an empty cell; None until the first one
    pub last_move_ms: Option<u64>,
}

/// Arena of enemies keyed by stable id, with a position lookup.
///
/// The grid stays the source of truth: [`EnemyRoster::sync`] drops entries
/// whose tile was overwritten (crushed, blasted) and adopts enemy tiles that
/// appeared without being registered.
#[derive(Clone, Debug, Default)]
pub struct EnemyRoster {
    slots: Vec<Option<Enemy>>,
    by_pos: AHashMap<IVec2, EnemyId>,
}

impl EnemyRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from every enemy tile on the grid
    pub fn from_grid(grid: &Grid) -> Self {
        let mut roster = Self::new();
        roster.sync(grid);
        roster
    }

    pub fn len(&self) -> usize {
        self.by_pos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_pos.is_empty()
    }

    pub fn get(&self, id: EnemyId) -> Option<&Enemy> {
        self.slots.get(id.0 as usize).and_then(Option::as_ref)
    }

    pub fn at(&self, pos: IVec2) -> Option<&Enemy> {
        self.by_pos.get(&pos).and_then(|&id| self.get(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Enemy> {
        self.slots.iter().flatten()
    }

    /// Register a new enemy; replaces whatever was tracked at `pos`
    pub fn spawn(&mut self, kind: EnemyKind, pos: IVec2) -> EnemyId {
        if let Some(old) = self.by_pos.get(&pos).copied() {
            self.remove(old);
        }
        let id = EnemyId(self.slots.len() as u32);
        self.slots.push(Some(Enemy {
            id,
            kind,
            pos,
            last_move_ms: None,
        }));
        self.by_pos.insert(pos, id);
        id
    }

    pub fn remove(&mut self, id: EnemyId) -> Option<Enemy> {
        let enemy = self.slots.get_mut(id.0 as usize)?.take()?;
        if self.by_pos.get(&enemy.pos) == Some(&id) {
            self.by_pos.remove(&enemy.pos);
        }
        Some(enemy)
    }

    /// Move an enemy; an enemy already tracked at `to` is absorbed
    pub fn relocate(&mut self, id: EnemyId, to: IVec2) {
        if let Some(other) = self.by_pos.get(&to).copied()
            && other != id
        {
            self.remove(other);
        }
        let Some(enemy) = self.slots.get_mut(id.0 as usize).and_then(Option::as_mut) else {
            return;
        };
        if self.by_pos.get(&enemy.pos) == Some(&id) {
            self.by_pos.remove(&enemy.pos);
        }
        enemy.pos = to;
        self.by_pos.insert(to, id);
    }

    pub fn mark_moved(&mut self, id: EnemyId, now_ms: u64) {
        if let Some(enemy) = self.slots.get_mut(id.0 as usize).and_then(Option::as_mut) {
            enemy.last_move_ms = Some(now_ms);
        }
    }

    /// Reconcile with the grid
    pub fn sync(&mut self, grid: &Grid) {
        let stale: Vec<EnemyId> = self
            .iter()
            .filter(|e| grid.get_at(e.pos) != e.kind.tile())
            .map(|e| e.id)
            .collect();
        for id in stale {
            if let Some(enemy) = self.remove(id) {
                log::trace!("{:?} {} at {} is gone", enemy.kind, id.0, enemy.pos);
            }
        }

        for pos in grid.positions_where(Tile::is_enemy) {
            if self.by_pos.contains_key(&pos) {
                continue;
            }
            if let Some(kind) = EnemyKind::from_tile(grid.get_at(pos)) {
                self.spawn(kind, pos);
            }
        }
    }

    /// Live ids in row-major order of their current position
    pub fn snapshot(&self) -> Vec<EnemyId> {
        let mut enemies: Vec<&Enemy> = self.iter().collect();
        enemies.sort_by_key(|e| (e.pos.y, e.pos.x));
        enemies.into_iter().map(|e| e.id).collect()
    }
}
