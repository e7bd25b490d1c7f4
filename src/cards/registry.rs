//! Catalog registry for set and card lookup.
//!
//! The `CatalogRegistry` holds every registered set and its cards. It is
//! built once at startup (see `cards::loader`) and passed by reference to
//! boosters, decks and hands afterwards.
//!
//! Cards within a set keep their insertion order. That order is the stable
//! scan order boosters sample in, and the order weight and rate tables are
//! reported in.

use std::sync::Arc;

use log::{debug, warn};
use rustc_hash::FxHashMap;

use super::card::Card;
use super::id::QualifiedCardId;
use crate::core::error::{Result, TriadError};

/// A named collection of cards.
#[derive(Clone, Debug, Default)]
pub struct CardSet {
    name: String,
    cards: Vec<(String, Arc<Card>)>,
    index: FxHashMap<String, usize>,
}

impl CardSet {
    /// Create an empty set.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Display name of the set.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Insert a card, or overwrite the card already stored under `card_id`.
    ///
    /// An overwritten card keeps its original position in the scan order.
    pub fn add_card(&mut self, card_id: impl Into<String>, card: Card) {
        let card_id = card_id.into();
        let card = Arc::new(card);

        if let Some(&slot) = self.index.get(&card_id) {
            warn!("overwriting card {card_id} in set {}", self.name);
            self.cards[slot].1 = card;
            return;
        }

        self.index.insert(card_id.clone(), self.cards.len());
        self.cards.push((card_id, card));
    }

    /// Look up a card by its id within this set.
    #[must_use]
    pub fn get_card(&self, card_id: &str) -> Option<&Arc<Card>> {
        self.index.get(card_id).map(|&slot| &self.cards[slot].1)
    }

    /// Iterate `(card id, card)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<Card>)> {
        self.cards.iter().map(|(id, card)| (id.as_str(), card))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Sum of all card weights.
    #[must_use]
    pub fn total_weight(&self) -> u64 {
        self.cards.iter().map(|(_, card)| u64::from(card.weight())).sum()
    }
}

/// Registry of every set in the catalog.
///
/// ## Example
///
/// ```
/// use triad::cards::{Card, CatalogRegistry, QualifiedCardId};
///
/// let mut registry = CatalogRegistry::new();
/// registry.register("zeepkist", "Zeepkist").unwrap();
/// registry.add_card("zeepkist", "001", Card::new("Geezard", 1, [1, 4, 1, 5], None)).unwrap();
///
/// let id = QualifiedCardId::new("zeepkist", "001");
/// assert_eq!(registry.get_card(&id).unwrap().name(), "Geezard");
/// assert!(registry.get_card_str("zeepkist:999").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CatalogRegistry {
    sets: FxHashMap<String, CardSet>,
}

impl CatalogRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new, empty set.
    ///
    /// Fails with `DuplicateSet` if the id is taken; the existing set is left
    /// untouched.
    pub fn register(&mut self, set_id: impl Into<String>, name: impl Into<String>) -> Result<&mut CardSet> {
        let set_id = set_id.into();
        if self.sets.contains_key(&set_id) {
            return Err(TriadError::DuplicateSet(set_id));
        }

        let set = CardSet::new(name);
        debug!("registered set {set_id} ({})", set.name());
        Ok(self.sets.entry(set_id).or_insert(set))
    }

    /// Insert or overwrite a card in a registered set.
    pub fn add_card(&mut self, set_id: &str, card_id: impl Into<String>, card: Card) -> Result<()> {
        let set = self
            .sets
            .get_mut(set_id)
            .ok_or_else(|| TriadError::SetNotFound(set_id.to_string()))?;
        set.add_card(card_id, card);
        Ok(())
    }

    /// Get a set by id.
    #[must_use]
    pub fn set(&self, set_id: &str) -> Option<&CardSet> {
        self.sets.get(set_id)
    }

    /// Get a set by id, raising `SetNotFound` if it is unknown.
    pub fn require_set(&self, set_id: &str) -> Result<&CardSet> {
        self.set(set_id)
            .ok_or_else(|| TriadError::SetNotFound(set_id.to_string()))
    }

    /// Registered set ids in ascending order.
    #[must_use]
    pub fn set_ids(&self) -> Vec<&str> {
        let mut ids: Vec<_> = self.sets.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Look up a card. A missing card is an expected outcome when probing.
    #[must_use]
    pub fn get_card(&self, id: &QualifiedCardId) -> Option<&Arc<Card>> {
        self.get_card_in(id.set_id(), id.card_id())
    }

    /// Look up a card by its two id parts.
    #[must_use]
    pub fn get_card_in(&self, set_id: &str, card_id: &str) -> Option<&Arc<Card>> {
        self.sets.get(set_id)?.get_card(card_id)
    }

    /// Look up a card by its `set:card` string. Malformed strings, including
    /// ones with more than one `:`, find nothing.
    #[must_use]
    pub fn get_card_str(&self, id: &str) -> Option<&Arc<Card>> {
        let (set_id, card_id) = id.split_once(':')?;
        if card_id.contains(':') {
            return None;
        }
        self.get_card_in(set_id, card_id)
    }

    /// Look up a card that must exist, raising `CardNotFound` otherwise.
    pub fn require_card(&self, id: &QualifiedCardId) -> Result<&Arc<Card>> {
        self.get_card(id)
            .ok_or_else(|| TriadError::CardNotFound(id.to_string()))
    }

    /// Whether the card exists.
    #[must_use]
    pub fn contains(&self, id: &QualifiedCardId) -> bool {
        self.get_card(id).is_some()
    }

    /// Per-card sampling weights of a set, in scan order.
    pub fn card_weights(&self, set_id: &str) -> Result<Vec<(&str, u32)>> {
        let set = self.require_set(set_id)?;
        Ok(set.iter().map(|(id, card)| (id, card.weight())).collect())
    }

    /// Per-card draw probability (`weight / total weight`), in scan order.
    ///
    /// An empty set has no rates. Fails with `ZeroWeight` when the set has
    /// cards but no weight to normalise by.
    pub fn rates(&self, set_id: &str) -> Result<Vec<(&str, f64)>> {
        let set = self.require_set(set_id)?;
        if set.is_empty() {
            return Ok(Vec::new());
        }

        let total = set.total_weight();
        if total == 0 {
            return Err(TriadError::ZeroWeight(set_id.to_string()));
        }

        let total = total as f64;
        Ok(set
            .iter()
            .map(|(id, card)| (id, f64::from(card.weight()) / total))
            .collect())
    }

    /// Every registered card, ordered by set id, then level, then card id.
    ///
    /// Used for catalog enumeration only, never for draws.
    #[must_use]
    pub fn all_card_ids(&self) -> Vec<QualifiedCardId> {
        let mut ids = Vec::with_capacity(self.len());

        for set_id in self.set_ids() {
            let set = &self.sets[set_id];
            let mut cards: Vec<_> = set.iter().collect();
            cards.sort_by(|(id_a, card_a), (id_b, card_b)| {
                card_a.level().cmp(&card_b.level()).then_with(|| id_a.cmp(id_b))
            });
            ids.extend(cards.into_iter().map(|(card_id, _)| QualifiedCardId::new(set_id, card_id)));
        }

        ids
    }

    /// Total number of cards across all sets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.values().map(CardSet::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
