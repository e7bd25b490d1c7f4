//! Players and matches.

pub mod match_state;
pub mod player;

pub use match_state::Game;
pub use player::Player;
