//! Persistent reversed-gravity coordinates

use ahash::AHashSet;
use glam::IVec2;

use crate::simulation::Tile;

/// Set of coordinates that reverse gravity, independent of what is drawn there.
///
/// A mover passing through a zone temporarily hides the GravityZone tile; the
/// coordinate stays registered so the tile can be restored when it leaves.
#[derive(Clone, Debug, Default)]
pub struct GravityZones {
    zones: AHashSet<IVec2>,
}

impl GravityZones {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, pos: IVec2) {
        self.zones.insert(pos);
    }

    pub fn contains(&self, pos: IVec2) -> bool {
        self.zones.contains(&pos)
    }

    pub fn clear(&mut self) {
        self.zones.clear();
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Tile a mover leaves behind at `pos`
    pub fn vacated_tile(&self, pos: IVec2) -> Tile {
        if self.contains(pos) {
            Tile::GravityZone
        } else {
            Tile::Empty
        }
    }
}

impl FromIterator<IVec2> for GravityZones {
    fn from_iter<I: IntoIterator<Item = IVec2>>(iter: I) -> Self {
        Self {
            zones: iter.into_iter().collect(),
        }
    }
}
