//! Property tests for catalog rates, booster draws and deck quantities.

use proptest::prelude::*;

use triad::booster::Booster;
use triad::cards::{Card, CatalogRegistry, QualifiedCardId};
use triad::core::GameRng;
use triad::zones::{Deck, Hand};

/// Build a single-set registry from a list of levels.
fn registry_with_levels(levels: &[u32]) -> CatalogRegistry {
    let mut registry = CatalogRegistry::new();
    registry.register("set", "Set").unwrap();
    for (i, &level) in levels.iter().enumerate() {
        registry
            .add_card("set", format!("c{i}"), Card::new(format!("Card {i}"), level, [1, 1, 1, 1], None))
            .unwrap();
    }
    registry
}

proptest! {
    #[test]
    fn rates_sum_to_one(levels in prop::collection::vec(1u32..=10, 1..30)) {
        let registry = registry_with_levels(&levels);
        let rates = registry.rates("set").unwrap();

        prop_assert_eq!(rates.len(), levels.len());
        let total: f64 = rates.iter().map(|(_, rate)| rate).sum();
        prop_assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn booster_has_exact_length(
        levels in prop::collection::vec(1u32..=12, 1..20),
        count in 0usize..40,
        seed in any::<u64>(),
    ) {
        // Guarantee at least one weighted card
        let mut levels = levels;
        levels.push(5);
        let registry = registry_with_levels(&levels);

        let mut rng = GameRng::new(seed);
        let mut booster = Booster::new(&registry, "set", count, &mut rng).unwrap();
        let cards = booster.open_booster().unwrap();

        prop_assert_eq!(cards.len(), count);
        for id in &cards {
            let card = registry.get_card(id);
            prop_assert!(card.is_some());
            prop_assert!(card.unwrap().weight() > 0);
        }
    }

    #[test]
    fn deck_never_underflows(held in 0u32..10, requested in 0u32..20) {
        let registry = registry_with_levels(&[1]);
        let id = QualifiedCardId::new("set", "c0");

        let mut deck = Deck::new();
        deck.add_card(&registry, &id, held).unwrap();

        let removed = deck.remove_card(&id, requested);
        if requested > held {
            prop_assert!(!removed);
            prop_assert_eq!(deck.quantity(&id), held);
        } else {
            prop_assert!(removed);
            prop_assert_eq!(deck.quantity(&id), held - requested);
        }
    }

    #[test]
    fn hand_add_cards_is_atomic(a_held in 0u32..4, a_req in 0u32..6, b_req in 0u32..6) {
        let registry = registry_with_levels(&[1, 2]);
        let a = QualifiedCardId::new("set", "c0");
        let b = QualifiedCardId::new("set", "c1");

        let mut deck = Deck::new();
        deck.add_card(&registry, &a, a_held).unwrap();
        deck.add_card(&registry, &b, 3).unwrap();

        let mut hand = Hand::new(&deck);
        let before = hand.deck().clone();
        let ok = hand.add_cards(&registry, vec![(b.clone(), b_req), (a.clone(), a_req)]).unwrap();

        if a_req <= a_held && b_req <= 3 {
            prop_assert!(ok);
            prop_assert_eq!(hand.len() as u32, a_req + b_req);
        } else {
            prop_assert!(!ok);
            prop_assert!(hand.is_empty());
            prop_assert_eq!(hand.deck(), &before);
        }
    }
}
