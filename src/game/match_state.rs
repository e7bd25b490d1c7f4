//! A match: two seats and one field.
//!
//! `Game` owns both players and the field. Placing a card is the single
//! mutating match operation; it reads from the acting player's hand and
//! writes into a field cell.
//!
//! Turn order is not enforced, and a placed card stays in the hand. Both
//! are left to the caller.

use std::sync::Arc;

use log::debug;

use super::player::Player;
use crate::cards::{Card, CatalogRegistry, QualifiedCardId};
use crate::core::config::GameConfig;
use crate::core::error::Result;
use crate::core::player::PlayerNumber;
use crate::core::rng::GameRng;
use crate::field::{Field, FieldScore};

/// Two player seats bound to one field.
///
/// ## Example
///
/// ```
/// use triad::cards::{Card, CatalogRegistry, QualifiedCardId};
/// use triad::core::GameRng;
/// use triad::game::{Game, Player};
///
/// let mut registry = CatalogRegistry::new();
/// registry.register("zeepkist", "Zeepkist").unwrap();
/// registry.add_card("zeepkist", "001", Card::new("Geezard", 1, [1, 4, 1, 5], None)).unwrap();
///
/// let mut player = Player::new();
/// player.open_booster(&registry, "zeepkist", 5, &mut GameRng::new(1)).unwrap();
/// player.initialize_hand();
/// player.add_cards(&registry, vec![(QualifiedCardId::new("zeepkist", "001"), 2)]).unwrap();
///
/// let mut game = Game::new();
/// assert!(game.set_player(1, player));
/// assert!(game.place_card(1, 0, 1, 1));
/// assert_eq!(game.score().as_array(), [8, 1, 0]);
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    field: Field,
    players: [Option<Player>; 2],
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Create a match on an empty 3x3 field with both seats empty.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// Create a match using `config` for field size and booster size.
    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        Self {
            field: Field::from_config(&config),
            config,
            players: [None, None],
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Mutable field access for capture rules built on `Field::change_player`.
    pub fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }

    /// Seat `player` at `number` (1 or 2), replacing whoever sat there.
    ///
    /// Returns `false` for any other seat number; no seat changes.
    pub fn set_player(&mut self, number: u8, player: Player) -> bool {
        let Some(seat) = PlayerNumber::from_raw(number) else {
            return false;
        };
        debug!("seated {seat}");
        self.players[seat.index()] = Some(player);
        true
    }

    /// Remove and return the player at `number`.
    pub fn take_player(&mut self, number: u8) -> Option<Player> {
        let seat = PlayerNumber::from_raw(number)?;
        self.players[seat.index()].take()
    }

    #[must_use]
    pub fn player(&self, number: u8) -> Option<&Player> {
        let seat = PlayerNumber::from_raw(number)?;
        self.players[seat.index()].as_ref()
    }

    pub fn player_mut(&mut self, number: u8) -> Option<&mut Player> {
        let seat = PlayerNumber::from_raw(number)?;
        self.players[seat.index()].as_mut()
    }

    /// Cards in the hand of the player at `number`.
    ///
    /// `None` for an invalid or empty seat; an empty slice if the player has
    /// not been dealt a hand.
    #[must_use]
    pub fn get_hand(&self, number: u8) -> Option<&[Arc<Card>]> {
        self.player(number).map(Player::hand_cards)
    }

    /// Open a booster of the configured size for the player at `number`.
    ///
    /// Returns `Ok(None)` for an invalid or empty seat.
    pub fn open_booster(
        &mut self,
        number: u8,
        registry: &CatalogRegistry,
        set_id: &str,
        rng: &mut GameRng,
    ) -> Result<Option<Vec<QualifiedCardId>>> {
        let count = self.config.booster_size;
        match self.player_mut(number) {
            Some(player) => player.open_booster(registry, set_id, count, rng).map(Some),
            None => Ok(None),
        }
    }

    /// Place the card at `index` in the acting player's hand onto `(x, y)`.
    ///
    /// Returns `false` for a bad player number, an empty seat, a missing
    /// hand, an invalid hand index, or a rejected field placement.
    pub fn place_card(&mut self, player: u8, index: usize, x: usize, y: usize) -> bool {
        let Some(seat) = PlayerNumber::from_raw(player) else {
            return false;
        };
        let card = self.players[seat.index()]
            .as_ref()
            .and_then(Player::hand)
            .and_then(|hand| hand.get_card(index))
            .map(Arc::clone);

        match card {
            Some(card) => self.field.place_card(x, y, card, seat),
            None => false,
        }
    }

    /// Current ownership tally.
    #[must_use]
    pub fn score(&self) -> FieldScore {
        self.field.get_field_score()
    }
}
