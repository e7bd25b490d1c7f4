//! Match configuration.
//!
//! Games configure the engine at startup with a `GameConfig`. Every rule in
//! the engine assumes the default 3x3 field; the dimensions are exposed so a
//! presentation layer can read them rather than hardcode them.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// Default field width and height.
pub const DEFAULT_FIELD_SIZE: usize = 3;

/// Default number of cards in a booster pack.
pub const DEFAULT_BOOSTER_SIZE: usize = 11;

/// Configuration for a match and its booster draws.
///
/// ## Example
///
/// ```
/// use triad::core::GameConfig;
///
/// let config = GameConfig::default().with_seed(42).with_booster_size(5);
/// assert_eq!(config.field_width, 3);
/// assert_eq!(config.booster_size, 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of field columns.
    #[serde(default = "default_field_size")]
    pub field_width: usize,

    /// Number of field rows.
    #[serde(default = "default_field_size")]
    pub field_height: usize,

    /// Cards drawn per booster when the caller does not specify a count.
    #[serde(default = "default_booster_size")]
    pub booster_size: usize,

    /// RNG seed. `None` seeds from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_field_size() -> usize {
    DEFAULT_FIELD_SIZE
}

fn default_booster_size() -> usize {
    DEFAULT_BOOSTER_SIZE
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: DEFAULT_FIELD_SIZE,
            field_height: DEFAULT_FIELD_SIZE,
            booster_size: DEFAULT_BOOSTER_SIZE,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field dimensions.
    #[must_use]
    pub fn with_field_size(mut self, width: usize, height: usize) -> Self {
        self.field_width = width;
        self.field_height = height;
        self
    }

    /// Set the default booster size.
    #[must_use]
    pub fn with_booster_size(mut self, size: usize) -> Self {
        self.booster_size = size;
        self
    }

    /// Fix the RNG seed for reproducible draws.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the RNG this configuration describes.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}
