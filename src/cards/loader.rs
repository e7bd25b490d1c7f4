//! Catalog ingestion.
//!
//! External catalog data arrives as one document per set:
//!
//! ```json
//! {
//!   "name": "Zeepkist",
//!   "cards": {
//!     "001": { "name": "Geezard", "level": 1, "ranks": [1, 4, 1, 5], "image": "001.png" }
//!   }
//! }
//! ```
//!
//! This module is the only place raw card data becomes a `Card`. Key order
//! of the `cards` object is preserved and becomes the set's scan order.

use std::fmt;

use log::debug;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use super::card::{Card, Ranks};
use super::registry::CatalogRegistry;
use crate::core::error::{Result, TriadError};

/// Raw card data as supplied by a catalog document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardData {
    pub name: String,
    pub level: u32,
    pub ranks: Ranks,
    #[serde(default)]
    pub image: Option<String>,
}

impl CardData {
    /// Validate and convert into a catalog `Card`.
    pub fn into_card(self, card_id: &str) -> Result<Card> {
        if self.level == 0 {
            return Err(TriadError::InvalidCard {
                card_id: card_id.to_string(),
                reason: "level must be at least 1".to_string(),
            });
        }
        Ok(Card::new(self.name, self.level, self.ranks, self.image))
    }
}

/// Raw set document.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SetData {
    pub name: String,
    #[serde(deserialize_with = "ordered_entries")]
    pub cards: Vec<(String, CardData)>,
}

impl SetData {
    /// Parse a set document from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

fn ordered_entries<'de, D>(deserializer: D) -> std::result::Result<Vec<(String, CardData)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct EntriesVisitor;

    impl<'de> Visitor<'de> for EntriesVisitor {
        type Value = Vec<(String, CardData)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of card id to card data")
        }

        fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry::<String, CardData>()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(EntriesVisitor)
}

impl CatalogRegistry {
    /// Register a set and all of its cards.
    ///
    /// Every card is validated before anything is registered, so a bad card
    /// leaves the registry unchanged.
    pub fn load_set(&mut self, set_id: &str, data: SetData) -> Result<()> {
        let cards = data
            .cards
            .into_iter()
            .map(|(card_id, raw)| {
                let card = raw.into_card(&card_id)?;
                Ok((card_id, card))
            })
            .collect::<Result<Vec<_>>>()?;

        let count = cards.len();
        let set = self.register(set_id, data.name)?;
        for (card_id, card) in cards {
            set.add_card(card_id, card);
        }

        debug!("loaded set {set_id} with {count} cards");
        Ok(())
    }

    /// Parse a set document and register it.
    pub fn load_set_json(&mut self, set_id: &str, json: &str) -> Result<()> {
        self.load_set(set_id, SetData::from_json(json)?)
    }

    /// Build a registry from `(set id, set data)` pairs.
    pub fn from_sets<I, S>(sets: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, SetData)>,
        S: AsRef<str>,
    {
        let mut registry = Self::new();
        for (set_id, data) in sets {
            registry.load_set(set_id.as_ref(), data)?;
        }
        Ok(registry)
    }
}
