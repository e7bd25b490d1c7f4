//! Player decks: multisets of catalog cards.
//!
//! A `Deck` maps qualified card ids to quantities. It is backed by an `im`
//! persistent map, so `clone()` is O(1) and the copy is fully independent:
//! mutating either side never shows through to the other.

use im::OrdMap;
use serde::{Deserialize, Serialize};

use crate::cards::{CatalogRegistry, QualifiedCardId};
use crate::core::error::{Result, TriadError};

/// Multiset of qualified card ids.
///
/// Quantities never go negative: a removal that would underflow fails and
/// leaves the deck untouched. Entries that reach zero are dropped.
///
/// ## Example
///
/// ```
/// use triad::cards::{Card, CatalogRegistry, QualifiedCardId};
/// use triad::zones::Deck;
///
/// let mut registry = CatalogRegistry::new();
/// registry.register("zeepkist", "Zeepkist").unwrap();
/// registry.add_card("zeepkist", "001", Card::new("Geezard", 1, [1, 4, 1, 5], None)).unwrap();
///
/// let id = QualifiedCardId::new("zeepkist", "001");
/// let mut deck = Deck::new();
/// deck.add_card(&registry, &id, 2).unwrap();
///
/// assert!(!deck.remove_card(&id, 3));
/// assert_eq!(deck.quantity(&id), 2);
/// assert!(deck.remove_card(&id, 2));
/// assert_eq!(deck.quantity(&id), 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: OrdMap<QualifiedCardId, u32>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` copies of a catalog card.
    ///
    /// Fails with `CardNotFound` if the card is not in the registry, and with
    /// `QuantityOverflow` if the count would not fit in a `u32`. Either way
    /// the deck is left untouched.
    pub fn add_card(&mut self, registry: &CatalogRegistry, id: &QualifiedCardId, quantity: u32) -> Result<()> {
        if !registry.contains(id) {
            return Err(TriadError::CardNotFound(id.to_string()));
        }
        if quantity == 0 {
            return Ok(());
        }

        let total = self
            .quantity(id)
            .checked_add(quantity)
            .ok_or_else(|| TriadError::QuantityOverflow(id.to_string()))?;
        self.cards.insert(id.clone(), total);
        Ok(())
    }

    /// Remove `quantity` copies. Returns `false`, changing nothing, when the
    /// deck holds fewer than `quantity`.
    pub fn remove_card(&mut self, id: &QualifiedCardId, quantity: u32) -> bool {
        let current = self.quantity(id);
        if current < quantity {
            return false;
        }

        match current - quantity {
            0 => {
                self.cards.remove(id);
            }
            remaining => {
                self.cards.insert(id.clone(), remaining);
            }
        }
        true
    }

    /// Copies of `id` held, zero when absent.
    #[must_use]
    pub fn quantity(&self, id: &QualifiedCardId) -> u32 {
        self.cards.get(id).copied().unwrap_or(0)
    }

    /// Iterate `(id, quantity)` in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&QualifiedCardId, u32)> {
        self.cards.iter().map(|(id, &quantity)| (id, quantity))
    }

    /// Read-only view of the underlying map.
    #[must_use]
    pub fn cards(&self) -> &OrdMap<QualifiedCardId, u32> {
        &self.cards
    }

    /// Number of distinct card ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Total copies across all ids.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.cards.values().map(|&quantity| u64::from(quantity)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    fn registry() -> CatalogRegistry {
        let mut registry = CatalogRegistry::new();
        registry.register("z", "Zeepkist").unwrap();
        registry.add_card("z", "a", Card::new("A", 1, [1, 1, 1, 1], None)).unwrap();
        registry.add_card("z", "b", Card::new("B", 2, [2, 2, 2, 2], None)).unwrap();
        registry
    }

    fn id(card: &str) -> QualifiedCardId {
        QualifiedCardId::new("z", card)
    }

    #[test]
    fn test_add_accumulates() {
        let registry = registry();
        let mut deck = Deck::new();

        deck.add_card(&registry, &id("a"), 1).unwrap();
        deck.add_card(&registry, &id("a"), 2).unwrap();
        deck.add_card(&registry, &id("b"), 1).unwrap();

        assert_eq!(deck.quantity(&id("a")), 3);
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.total(), 4);
    }

    #[test]
    fn test_add_overflow_is_rejected() {
        let registry = registry();
        let mut deck = Deck::new();
        deck.add_card(&registry, &id("a"), u32::MAX).unwrap();

        let err = deck.add_card(&registry, &id("a"), 2).unwrap_err();
        assert!(matches!(err, TriadError::QuantityOverflow(ref c) if c == "z:a"));
        assert_eq!(deck.quantity(&id("a")), u32::MAX);

        assert!(deck.remove_card(&id("a"), 1));
        deck.add_card(&registry, &id("a"), 1).unwrap();
        assert_eq!(deck.quantity(&id("a")), u32::MAX);
    }

    #[test]
    fn test_add_unknown_card() {
        let registry = registry();
        let mut deck = Deck::new();

        let err = deck.add_card(&registry, &id("nope"), 1).unwrap_err();
        assert!(matches!(err, TriadError::CardNotFound(ref c) if c == "z:nope"));
        assert!(deck.is_empty());
    }

    #[test]
    fn test_remove_underflow_is_noop() {
        let registry = registry();
        let mut deck = Deck::new();
        deck.add_card(&registry, &id("a"), 1).unwrap();

        assert!(!deck.remove_card(&id("a"), 2));
        assert_eq!(deck.quantity(&id("a")), 1);

        assert!(!deck.remove_card(&id("b"), 1));
        assert_eq!(deck.quantity(&id("b")), 0);
    }

    #[test]
    fn test_remove_zero_always_succeeds() {
        let mut deck = Deck::new();
        assert!(deck.remove_card(&id("a"), 0));
        assert!(deck.is_empty());
    }

    #[test]
    fn test_clone_is_independent() {
        let registry = registry();
        let mut deck = Deck::new();
        deck.add_card(&registry, &id("a"), 2).unwrap();

        let mut copy = deck.clone();
        assert!(copy.remove_card(&id("a"), 2));
        copy.add_card(&registry, &id("b"), 5).unwrap();

        assert_eq!(deck.quantity(&id("a")), 2);
        assert_eq!(deck.quantity(&id("b")), 0);
        assert_eq!(copy.quantity(&id("a")), 0);
    }

    #[test]
    fn test_iter_in_id_order() {
        let registry = registry();
        let mut deck = Deck::new();
        deck.add_card(&registry, &id("b"), 1).unwrap();
        deck.add_card(&registry, &id("a"), 4).unwrap();

        let entries: Vec<_> = deck.iter().map(|(id, q)| (id.to_string(), q)).collect();
        assert_eq!(entries, vec![("z:a".to_string(), 4), ("z:b".to_string(), 1)]);
    }
}
