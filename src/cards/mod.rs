//! Card catalog: cards, qualified ids, the set registry and ingestion.
//!
//! ## Key Types
//!
//! - `Card`: Immutable catalog entry with derived rarity and weight
//! - `QualifiedCardId`: `set:card` identifier
//! - `CardSet`: Named, ordered collection of cards
//! - `CatalogRegistry`: Every set, built once and then read
//! - `SetData` / `CardData`: Raw catalog documents

pub mod card;
pub mod id;
pub mod loader;
pub mod registry;

pub use card::{Card, Direction, Ranks, RARITY_WEIGHTS};
pub use id::QualifiedCardId;
pub use loader::{CardData, SetData};
pub use registry::{CardSet, CatalogRegistry};
