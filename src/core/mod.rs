//! Core engine types: errors, RNG, player numbers, configuration.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{GameConfig, DEFAULT_BOOSTER_SIZE, DEFAULT_FIELD_SIZE};
pub use error::{Result, TriadError};
pub use player::{Owner, PlayerNumber};
pub use rng::{GameRng, GameRngState};
