//! Player actions

use serde::{Deserialize, Serialize};

use crate::simulation::Direction;

/// One discrete player command, as produced by an input device or a script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Move(Direction),
    PlaceBomb,
    PlacePillar,
    Wait,
}

impl Action {
    /// Script character: `U D L R` moves, `B` bomb, `P` pillar, `.` wait
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'U' => Some(Action::Move(Direction::Up)),
            'D' => Some(Action::Move(Direction::Down)),
            'L' => Some(Action::Move(Direction::Left)),
            'R' => Some(Action::Move(Direction::Right)),
            'B' => Some(Action::PlaceBomb),
            'P' => Some(Action::PlacePillar),
            '.' => Some(Action::Wait),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Action::Move(Direction::Up) => 'U',
            Action::Move(Direction::Down) => 'D',
            Action::Move(Direction::Left) => 'L',
            Action::Move(Direction::Right) => 'R',
            Action::PlaceBomb => 'B',
            Action::PlacePillar => 'P',
            Action::Wait => '.',
        }
    }
}
