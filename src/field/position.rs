//! A single field cell.

use std::sync::Arc;

use crate::cards::Card;
use crate::core::player::{Owner, PlayerNumber};

/// One cell of the field: at most one card, plus its owner.
///
/// The card slot is write-once. Ownership can later flip between the two
/// players via `change_player`.
#[derive(Clone, Debug, Default)]
pub struct FieldPosition {
    card: Option<Arc<Card>>,
    owner: Owner,
}

impl FieldPosition {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn card(&self) -> Option<&Arc<Card>> {
        self.card.as_ref()
    }

    #[must_use]
    pub fn owner(&self) -> Owner {
        self.owner
    }

    #[must_use]
    pub fn is_occupied(&self) -> bool {
        self.card.is_some()
    }

    /// Place a card for `player`. Fails if a card is already here.
    pub fn place_card(&mut self, card: Arc<Card>, player: PlayerNumber) -> bool {
        if self.card.is_some() {
            return false;
        }
        self.card = Some(card);
        self.owner = Owner::Player(player);
        true
    }

    /// Swap ownership between player 1 and 2. No-op when unclaimed.
    pub fn change_player(&mut self) {
        self.owner = self.owner.flipped();
    }
}

impl std::fmt::Display for FieldPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.card {
            Some(card) => write!(f, "{card}")?,
            None => f.write_str("None")?,
        }
        if let Owner::Player(player) = self.owner {
            write!(f, " ({player})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> Arc<Card> {
        Arc::new(Card::new("Geezard", 1, [1, 4, 1, 5], None))
    }

    #[test]
    fn test_write_once() {
        let mut cell = FieldPosition::new();
        let first = card();

        assert!(cell.place_card(Arc::clone(&first), PlayerNumber::One));
        assert!(!cell.place_card(card(), PlayerNumber::Two));

        assert!(Arc::ptr_eq(cell.card().unwrap(), &first));
        assert_eq!(cell.owner(), Owner::Player(PlayerNumber::One));
    }

    #[test]
    fn test_change_player() {
        let mut cell = FieldPosition::new();
        cell.change_player();
        assert_eq!(cell.owner(), Owner::Unclaimed);

        cell.place_card(card(), PlayerNumber::Two);
        cell.change_player();
        assert_eq!(cell.owner(), Owner::Player(PlayerNumber::One));
        cell.change_player();
        assert_eq!(cell.owner(), Owner::Player(PlayerNumber::Two));
    }

    #[test]
    fn test_display() {
        let mut cell = FieldPosition::new();
        assert_eq!(cell.to_string(), "None");

        cell.place_card(card(), PlayerNumber::One);
        assert_eq!(cell.to_string(), "Geezard (1) [1, 4, 1, 5] (Player 1)");
    }
}
