use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::simulation::{Direction, Tile};
use crate::world::{Engine, Grid, WorldRng};

/// Result of a single player move attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Nothing changed
    Blocked,
    /// Walked or dug one cell
    Moved,
    /// Pushed a firewall one cell sideways and followed it
    Pushed,
    /// Jumped to another teleporter
    Teleported,
    /// Picked up a key
    CollectedKey,
    /// Stepped onto the exit with every key collected
    ReachedExit,
    /// Walked into a lethal tile, or stepped down under a firewall
    Killed,
}

/// The player of one level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub position: IVec2,
    pub keys_collected: u32,
    pub keys_required: u32,
    pub bombs: u32,
    pub pillars: u32,
    pub is_dead: bool,
}

impl Player {
    pub fn new(position: IVec2, keys_required: u32, bombs: u32, pillars: u32) -> Self {
        Self {
            position,
            keys_collected: 0,
            keys_required,
            bombs,
            pillars,
            is_dead: false,
        }
    }

    pub fn has_all_keys(&self) -> bool {
        self.keys_collected >= self.keys_required
    }

    /// Try to move one cell in `dir`, applying the tile's interaction
    pub fn try_move<R: WorldRng>(&mut self, engine: &mut Engine<R>, dir: Direction) -> MoveOutcome {
        if self.is_dead {
            return MoveOutcome::Blocked;
        }

        if dir == Direction::Down && engine.is_crush_threat(self.position) {
            log::info!("Player stepped out from under a firewall at {}", self.position);
            self.is_dead = true;
            return MoveOutcome::Killed;
        }

        let delta = IVec2::from(dir.delta());
        let target = self.position + delta;
        if !engine.grid().in_bounds(target.x, target.y) {
            return MoveOutcome::Blocked;
        }

        let vacated = engine.gravity_zones().vacated_tile(target);
        let grid = engine.grid_mut();
        match grid.get_at(target) {
            Tile::Wall | Tile::Pillar | Tile::Bomb | Tile::Builder | Tile::GravityZone => {
                MoveOutcome::Blocked
            }
            Tile::Firewall => {
                let beyond = target + delta;
                if dir.is_horizontal() && grid.get_at(beyond).is_open() {
                    grid.set_at(beyond, Tile::Firewall);
                    grid.set_at(target, vacated);
                    self.position = target;
                    MoveOutcome::Pushed
                } else {
                    MoveOutcome::Blocked
                }
            }
            Tile::Teleporter => match Self::teleport_destination(grid, target) {
                Some(dest) => {
                    log::debug!("Teleported {target} -> {dest}");
                    self.position = dest;
                    MoveOutcome::Teleported
                }
                None => MoveOutcome::Blocked,
            },
            Tile::Key => {
                self.keys_collected += 1;
                grid.set_at(target, vacated);
                self.position = target;
                log::debug!(
                    "Key collected ({}/{})",
                    self.keys_collected,
                    self.keys_required
                );
                MoveOutcome::CollectedKey
            }
            Tile::Exit => {
                if self.has_all_keys() {
                    self.position = target;
                    MoveOutcome::ReachedExit
                } else {
                    MoveOutcome::Blocked
                }
            }
            Tile::Predator | Tile::Sludge => {
                log::info!("Player walked into {} at {target}", grid.get_at(target).name());
                self.position = target;
                self.is_dead = true;
                MoveOutcome::Killed
            }
            Tile::Data => {
                grid.set_at(target, vacated);
                self.position = target;
                MoveOutcome::Moved
            }
            Tile::Empty => {
                self.position = target;
                MoveOutcome::Moved
            }
        }
    }

    /// First teleporter other than `entry` in row-major order
    fn teleport_destination(grid: &Grid, entry: IVec2) -> Option<IVec2> {
        grid.positions_of(Tile::Teleporter)
            .into_iter()
            .find(|&pos| pos != entry)
    }

    /// Drop a bomb on the current cell. Returns false with no bombs left.
    pub fn place_bomb<R: WorldRng>(&mut self, engine: &mut Engine<R>) -> bool {
        if self.bombs == 0 || self.is_dead {
            return false;
        }
        self.bombs -= 1;
        engine.place_bomb(self.position);
        true
    }

    /// Leave a pillar on the current cell. Returns false with no pillars left.
    pub fn place_pillar<R: WorldRng>(&mut self, engine: &mut Engine<R>) -> bool {
        if self.pillars == 0 || self.is_dead {
            return false;
        }
        self.pillars -= 1;
        engine.place_pillar(self.position);
        true
    }
}
