//! Tile kinds and their behavioural properties

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Content of a single grid cell.
///
/// The player is never stored in the grid; its position is tracked separately.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Tile {
    #[default]
    Empty = 0,
    /// Destructible fill, dug away by the player
    Data = 1,
    /// Indestructible; also what every out-of-bounds query returns
    Wall = 2,
    /// Fallable, pushable rock
    Firewall = 3,
    /// Fallable collectible
    Key = 4,
    Exit = 5,
    /// Hunting enemy
    Predator = 7,
    /// Wandering enemy that leaves Data behind
    Builder = 8,
    /// Visual marker of a reversed-gravity coordinate
    GravityZone = 9,
    /// Countdown marker of an active bomb
    Bomb = 10,
    Teleporter = 11,
    /// Player-placed block
    Pillar = 12,
    /// Spreading liquid
    Sludge = 13,
}

bitflags! {
    /// Behaviour classes a tile belongs to
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct TileFlags: u16 {
        /// Subject to falling-object physics
        const FALLABLE = 1 << 0;
        /// A falling object resting on this tile may slide off diagonally
        const SLIDE_BASE = 1 << 1;
        /// A falling object moves into this tile (enemies get overwritten)
        const LANDING = 1 << 2;
        /// Free space for slides, reversed-gravity moves and pushes
        const OPEN = 1 << 3;
        /// The player can step (or die) here, so it never traps the player
        const ESCAPE = 1 << 4;
        /// Survives bomb blasts
        const BLAST_PROOF = 1 << 5;
        /// Moved by the enemy step
        const ENEMY = 1 << 6;
        /// Shields a falling object from a gravity zone further down its column
        const GRAVITY_BLOCKER = 1 << 7;
    }
}

impl Tile {
    /// All tile kinds, in id order
    pub const ALL: [Tile; 13] = [
        Tile::Empty,
        Tile::Data,
        Tile::Wall,
        Tile::Firewall,
        Tile::Key,
        Tile::Exit,
        Tile::Predator,
        Tile::Builder,
        Tile::GravityZone,
        Tile::Bomb,
        Tile::Teleporter,
        Tile::Pillar,
        Tile::Sludge,
    ];

    pub fn flags(self) -> TileFlags {
        match self {
            Tile::Empty => TileFlags::LANDING | TileFlags::OPEN | TileFlags::ESCAPE,
            Tile::Data => TileFlags::ESCAPE | TileFlags::GRAVITY_BLOCKER,
            Tile::Wall => {
                TileFlags::SLIDE_BASE | TileFlags::BLAST_PROOF | TileFlags::GRAVITY_BLOCKER
            }
            Tile::Firewall => TileFlags::FALLABLE | TileFlags::SLIDE_BASE,
            Tile::Key => TileFlags::FALLABLE | TileFlags::SLIDE_BASE | TileFlags::ESCAPE,
            Tile::Exit => TileFlags::ESCAPE,
            Tile::Predator => TileFlags::LANDING | TileFlags::ESCAPE | TileFlags::ENEMY,
            Tile::Builder => TileFlags::LANDING | TileFlags::ENEMY,
            Tile::GravityZone => TileFlags::LANDING | TileFlags::OPEN,
            Tile::Bomb => TileFlags::empty(),
            Tile::Teleporter => TileFlags::ESCAPE,
            Tile::Pillar => TileFlags::SLIDE_BASE | TileFlags::GRAVITY_BLOCKER,
            Tile::Sludge => TileFlags::GRAVITY_BLOCKER,
        }
    }

    pub fn has(self, flags: TileFlags) -> bool {
        self.flags().contains(flags)
    }

    pub fn is_fallable(self) -> bool {
        self.has(TileFlags::FALLABLE)
    }

    pub fn is_open(self) -> bool {
        self.has(TileFlags::OPEN)
    }

    pub fn is_enemy(self) -> bool {
        self.has(TileFlags::ENEMY)
    }

    pub fn name(self) -> &'static str {
        match self {
            Tile::Empty => "empty",
            Tile::Data => "data",
            Tile::Wall => "wall",
            Tile::Firewall => "firewall",
            Tile::Key => "key",
            Tile::Exit => "exit",
            Tile::Predator => "predator",
            Tile::Builder => "builder",
            Tile::GravityZone => "gravity zone",
            Tile::Bomb => "bomb",
            Tile::Teleporter => "teleporter",
            Tile::Pillar => "pillar",
            Tile::Sludge => "sludge",
        }
    }

    /// Character used by level maps and the text renderer
    pub fn glyph(self) -> char {
        match self {
            Tile::Empty => '.',
            Tile::Data => '*',
            Tile::Wall => '#',
            Tile::Firewall => 'F',
            Tile::Key => 'K',
            Tile::Exit => 'X',
            Tile::Predator => 'A',
            Tile::Builder => 'B',
            Tile::GravityZone => 'G',
            Tile::Bomb => 'o',
            Tile::Teleporter => 'T',
            Tile::Pillar => '|',
            Tile::Sludge => 'S',
        }
    }

    /// Inverse of [`Tile::glyph`]. The player marker `P` is not a tile.
    pub fn from_glyph(c: char) -> Option<Tile> {
        Tile::ALL.into_iter().find(|tile| tile.glyph() == c)
    }
}
