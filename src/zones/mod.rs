//! Player-owned card pools.
//!
//! ## Key Types
//!
//! - `Deck`: Multiset of owned cards, cheap to snapshot
//! - `Hand`: Ordered working set drawn from a private deck snapshot

pub mod deck;
pub mod hand;

pub use deck::Deck;
pub use hand::Hand;
