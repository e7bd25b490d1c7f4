//! # triad
//!
//! A collectible-card battle engine: a catalog of cards grouped into sets,
//! weighted booster packs, per-player decks and hands, and a 3x3 field
//! scored by ownership majority.
//!
//! ## Design Principles
//!
//! 1. **Explicit Catalog**: The `CatalogRegistry` is built once at startup
//!    and passed by reference. There is no process-wide registry.
//!
//! 2. **Two Failure Tiers**: Missing sets and cards raise a `TriadError`.
//!    Expected outcomes (occupied cell, short deck, bad index) are plain
//!    `bool` / `Option` results.
//!
//! 3. **All or Nothing**: No operation is partially applied on failure.
//!
//! ## Architecture
//!
//! - **Persistent Decks**: `Deck` clones in O(1) via `im-rs`, so a hand's
//!   private snapshot costs nothing to take.
//!
//! - **Deterministic Draws**: Boosters sample from a seedable `GameRng`.
//!
//! ## Modules
//!
//! - `core`: Errors, RNG, player numbers, configuration
//! - `cards`: Cards, qualified ids, set registry, catalog ingestion
//! - `booster`: Weighted booster generation
//! - `zones`: Decks and hands
//! - `field`: The grid and its cells
//! - `game`: Players and matches

pub mod core;
pub mod cards;
pub mod booster;
pub mod zones;
pub mod field;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameRng, GameRngState,
    Owner, PlayerNumber,
    Result, TriadError,
};

pub use crate::cards::{
    Card, CardData, CardSet, CatalogRegistry, Direction, QualifiedCardId, Ranks, SetData,
};

pub use crate::booster::Booster;

pub use crate::zones::{Deck, Hand};

pub use crate::field::{Field, FieldPosition, FieldScore};

pub use crate::game::{Game, Player};
