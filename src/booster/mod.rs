//! Booster pack generation.

pub mod pack;

pub use pack::Booster;
