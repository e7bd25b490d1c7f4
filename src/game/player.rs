//! Players: a deck, and a hand once one has been dealt.

use std::sync::Arc;

use log::debug;

use crate::booster::Booster;
use crate::cards::{Card, CatalogRegistry, QualifiedCardId};
use crate::core::error::Result;
use crate::core::rng::GameRng;
use crate::zones::{Deck, Hand};

/// A player's card pools.
///
/// The deck starts empty and fills from boosters. `initialize_hand`
/// snapshots it into a `Hand`, which is then the only source of cards for
/// field placement.
#[derive(Clone, Debug, Default)]
pub struct Player {
    deck: Deck,
    hand: Option<Hand>,
}

impl Player {
    /// Create a player with an empty deck and no hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn hand(&self) -> Option<&Hand> {
        self.hand.as_ref()
    }

    pub fn hand_mut(&mut self) -> Option<&mut Hand> {
        self.hand.as_mut()
    }

    /// Cards in hand; empty before a hand is dealt.
    #[must_use]
    pub fn hand_cards(&self) -> &[Arc<Card>] {
        self.hand.as_ref().map(Hand::cards).unwrap_or_default()
    }

    /// Open a booster of `count` cards and add every card to the deck.
    ///
    /// Returns the drawn ids in draw order.
    pub fn open_booster(
        &mut self,
        registry: &CatalogRegistry,
        set_id: &str,
        count: usize,
        rng: &mut GameRng,
    ) -> Result<Vec<QualifiedCardId>> {
        let mut booster = Booster::new(registry, set_id, count, rng)?;
        let cards = booster.open_booster().unwrap_or_default();

        for id in &cards {
            self.deck.add_card(registry, id, 1)?;
        }
        Ok(cards)
    }

    /// Deal a fresh hand from a snapshot of the current deck, replacing any
    /// previous hand.
    pub fn initialize_hand(&mut self) -> &mut Hand {
        debug!("dealing hand from {} cards", self.deck.total());
        self.hand.insert(Hand::new(&self.deck))
    }

    /// Move cards into the hand, all or nothing.
    ///
    /// Returns `Ok(false)` when no hand has been dealt yet.
    pub fn add_cards<I>(&mut self, registry: &CatalogRegistry, requests: I) -> Result<bool>
    where
        I: IntoIterator<Item = (QualifiedCardId, u32)>,
    {
        match self.hand.as_mut() {
            Some(hand) => hand.add_cards(registry, requests),
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::TriadError;

    fn registry() -> CatalogRegistry {
        let mut registry = CatalogRegistry::new();
        registry.register("z", "Zeepkist").unwrap();
        registry.add_card("z", "a", Card::new("A", 1, [1, 1, 1, 1], None)).unwrap();
        registry.add_card("z", "b", Card::new("B", 7, [5, 5, 5, 5], None)).unwrap();
        registry
    }

    #[test]
    fn test_open_booster_fills_deck() {
        let registry = registry();
        let mut player = Player::new();
        let mut rng = GameRng::new(11);

        let drawn = player.open_booster(&registry, "z", 11, &mut rng).unwrap();
        assert_eq!(drawn.len(), 11);
        assert_eq!(player.deck().total(), 11);

        for id in &drawn {
            assert!(player.deck().quantity(id) >= 1);
        }

        player.open_booster(&registry, "z", 4, &mut rng).unwrap();
        assert_eq!(player.deck().total(), 15);
    }

    #[test]
    fn test_open_booster_unknown_set() {
        let registry = registry();
        let mut player = Player::new();
        let err = player
            .open_booster(&registry, "missing", 11, &mut GameRng::new(1))
            .unwrap_err();
        assert!(matches!(err, TriadError::SetNotFound(_)));
        assert!(player.deck().is_empty());
    }

    #[test]
    fn test_add_cards_requires_hand() {
        let registry = registry();
        let mut player = Player::new();
        player.open_booster(&registry, "z", 5, &mut GameRng::new(2)).unwrap();

        let request = vec![(QualifiedCardId::new("z", "a"), 1)];
        assert!(!player.add_cards(&registry, request.clone()).unwrap());
        assert!(player.hand_cards().is_empty());

        player.initialize_hand();
        let id = QualifiedCardId::new("z", "a");
        let expected = player.deck().quantity(&id) >= 1;
        assert_eq!(player.add_cards(&registry, request).unwrap(), expected);
    }

    #[test]
    fn test_initialize_hand_replaces_previous() {
        let mut registry = registry();
        registry.register("solo", "Solo").unwrap();
        registry.add_card("solo", "x", Card::new("X", 1, [1, 1, 1, 1], None)).unwrap();

        let mut player = Player::new();
        let mut rng = GameRng::new(5);
        player.open_booster(&registry, "solo", 3, &mut rng).unwrap();

        let x = QualifiedCardId::new("solo", "x");
        player.initialize_hand();
        assert!(player.add_cards(&registry, vec![(x.clone(), 3)]).unwrap());
        assert_eq!(player.hand_cards().len(), 3);

        // Deck itself is untouched by hand draws
        assert_eq!(player.deck().quantity(&x), 3);

        let hand = player.initialize_hand();
        assert!(hand.is_empty());
        assert_eq!(hand.deck().quantity(&x), 3);
    }
}
