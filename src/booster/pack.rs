//! Weighted booster pack generation.
//!
//! A booster draws `count` cards from one set with replacement. Each draw
//! picks `w` uniformly in `[0, T)` where `T` is the set's total weight, then
//! walks the set in scan order subtracting card weights until `w` falls
//! inside a card's band. Draws are independent.

use log::{debug, trace, warn};

use crate::cards::{CatalogRegistry, QualifiedCardId};
use crate::core::error::{Result, TriadError};
use crate::core::rng::GameRng;

/// A sealed booster pack. Contents are drawn at construction and handed out
/// exactly once by `open_booster`.
///
/// ## Example
///
/// ```
/// use triad::booster::Booster;
/// use triad::cards::{Card, CatalogRegistry};
/// use triad::core::GameRng;
///
/// let mut registry = CatalogRegistry::new();
/// registry.register("zeepkist", "Zeepkist").unwrap();
/// registry.add_card("zeepkist", "001", Card::new("Geezard", 1, [1, 4, 1, 5], None)).unwrap();
///
/// let mut rng = GameRng::new(42);
/// let mut booster = Booster::new(&registry, "zeepkist", 3, &mut rng).unwrap();
///
/// let cards = booster.open_booster().unwrap();
/// assert_eq!(cards.len(), 3);
/// assert!(booster.open_booster().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct Booster {
    set_id: String,
    cards: Vec<QualifiedCardId>,
    opened: bool,
}

impl Booster {
    /// Draw a booster of `count` cards from `set_id`.
    ///
    /// Fails with `SetNotFound` for an unknown set and `ZeroWeight` when the
    /// set has nothing to sample.
    pub fn new(registry: &CatalogRegistry, set_id: &str, count: usize, rng: &mut GameRng) -> Result<Self> {
        let weights = registry.card_weights(set_id)?;
        let total: u64 = weights.iter().map(|&(_, weight)| u64::from(weight)).sum();
        if total == 0 {
            return Err(TriadError::ZeroWeight(set_id.to_string()));
        }

        let mut cards = Vec::with_capacity(count);
        for _ in 0..count {
            let Some(mut remainder) = rng.gen_below(total) else {
                return Err(TriadError::ZeroWeight(set_id.to_string()));
            };
            for &(card_id, weight) in &weights {
                let weight = u64::from(weight);
                if remainder < weight {
                    trace!("drew {set_id}:{card_id}");
                    cards.push(QualifiedCardId::new(set_id, card_id));
                    break;
                }
                remainder -= weight;
            }
        }

        debug!("sealed booster of {count} cards from set {set_id}");
        Ok(Self {
            set_id: set_id.to_string(),
            cards,
            opened: false,
        })
    }

    /// Take the drawn cards. Returns `None` once the booster has been opened.
    pub fn open_booster(&mut self) -> Option<Vec<QualifiedCardId>> {
        if self.opened {
            warn!("booster from set {} was already opened", self.set_id);
            return None;
        }
        self.opened = true;
        Some(std::mem::take(&mut self.cards))
    }

    #[must_use]
    pub fn is_opened(&self) -> bool {
        self.opened
    }

    #[must_use]
    pub fn set_id(&self) -> &str {
        &self.set_id
    }

    /// Render the sealed contents as card descriptions.
    #[must_use]
    pub fn describe(&self, registry: &CatalogRegistry) -> String {
        if self.opened {
            return "Booster already opened".to_string();
        }
        self.cards
            .iter()
            .filter_map(|id| registry.get_card(id))
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
