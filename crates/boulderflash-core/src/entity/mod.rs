pub mod input;
pub mod player;

pub use input::Action;
pub use player::{MoveOutcome, Player};
