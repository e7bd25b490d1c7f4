//! Hands: cards drawn from a private deck snapshot.
//!
//! A `Hand` captures a clone of the owner's `Deck` when it is created. Every
//! card added to the hand is debited from that snapshot, never from the
//! owner's live deck.

use std::iter;
use std::sync::Arc;

use log::debug;

use super::deck::Deck;
use crate::cards::{Card, CatalogRegistry, QualifiedCardId};
use crate::core::error::Result;

/// Ordered cards in hand plus the pool they are drawn from.
#[derive(Clone, Debug, Default)]
pub struct Hand {
    cards: Vec<Arc<Card>>,
    pool: Deck,
}

impl Hand {
    /// Create an empty hand drawing from a snapshot of `deck`.
    #[must_use]
    pub fn new(deck: &Deck) -> Self {
        Self {
            cards: Vec::new(),
            pool: deck.clone(),
        }
    }

    /// Cards in hand, in the order they were added.
    #[must_use]
    pub fn cards(&self) -> &[Arc<Card>] {
        &self.cards
    }

    /// What is left of the deck snapshot.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.pool
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Move `quantity` copies of a card from the pool into the hand.
    ///
    /// Raises `CardNotFound` for an unknown card. Returns `Ok(false)`, with
    /// nothing changed, when the pool holds too few copies.
    pub fn add_card(&mut self, registry: &CatalogRegistry, id: &QualifiedCardId, quantity: u32) -> Result<bool> {
        let card = registry.require_card(id)?;
        if !self.pool.remove_card(id, quantity) {
            return Ok(false);
        }

        self.cards
            .extend(iter::repeat(card).take(quantity as usize).cloned());
        Ok(true)
    }

    /// Add several cards, all or nothing.
    ///
    /// Every request is first debited from a scratch copy of the pool; only
    /// when all succeed are the pool and hand updated. Repeated ids are
    /// debited cumulatively.
    pub fn add_cards<I>(&mut self, registry: &CatalogRegistry, requests: I) -> Result<bool>
    where
        I: IntoIterator<Item = (QualifiedCardId, u32)>,
    {
        let mut scratch = self.pool.clone();
        let mut drawn = Vec::new();

        for (id, quantity) in requests {
            let card = registry.require_card(&id)?;
            if !scratch.remove_card(&id, quantity) {
                debug!("hand cannot take {quantity} of {id}");
                return Ok(false);
            }
            drawn.extend(iter::repeat(card).take(quantity as usize).cloned());
        }

        self.pool = scratch;
        self.cards.extend(drawn);
        Ok(true)
    }

    /// Remove and return the card at `index`.
    pub fn remove_card(&mut self, index: usize) -> Option<Arc<Card>> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    /// The card at `index`.
    #[must_use]
    pub fn get_card(&self, index: usize) -> Option<&Arc<Card>> {
        self.cards.get(index)
    }
}
