//! Qualified card identifiers.
//!
//! A catalog card is identified by the pair `(set id, card id)`, written
//! `set:card` when it has to travel as a single string.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::error::TriadError;

/// A `setId:cardId` pair uniquely identifying a catalog card.
///
/// Ordering is by set id, then card id. The string form holds exactly one
/// `:`, so neither part may contain one.
///
/// ```
/// use triad::cards::QualifiedCardId;
///
/// let id: QualifiedCardId = "zeepkist:003".parse().unwrap();
/// assert_eq!(id.set_id(), "zeepkist");
/// assert_eq!(id.card_id(), "003");
/// assert_eq!(id.to_string(), "zeepkist:003");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QualifiedCardId {
    set_id: String,
    card_id: String,
}

impl QualifiedCardId {
    #[must_use]
    pub fn new(set_id: impl Into<String>, card_id: impl Into<String>) -> Self {
        Self {
            set_id: set_id.into(),
            card_id: card_id.into(),
        }
    }

    #[must_use]
    pub fn set_id(&self) -> &str {
        &self.set_id
    }

    #[must_use]
    pub fn card_id(&self) -> &str {
        &self.card_id
    }
}

impl FromStr for QualifiedCardId {
    type Err = TriadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((set_id, card_id)) if !set_id.is_empty() && !card_id.is_empty() && !card_id.contains(':') => {
                Ok(Self::new(set_id, card_id))
            }
            _ => Err(TriadError::InvalidCardId(s.to_string())),
        }
    }
}

impl TryFrom<String> for QualifiedCardId {
    type Error = TriadError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<QualifiedCardId> for String {
    fn from(id: QualifiedCardId) -> Self {
        id.to_string()
    }
}

impl std::fmt::Display for QualifiedCardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.set_id, self.card_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_malformed() {
        assert!("zeepkist".parse::<QualifiedCardId>().is_err());
        assert!(":003".parse::<QualifiedCardId>().is_err());
        assert!("zeepkist:".parse::<QualifiedCardId>().is_err());

        let err = "zeepkist:003:extra".parse::<QualifiedCardId>().unwrap_err();
        assert!(matches!(err, TriadError::InvalidCardId(ref s) if s == "zeepkist:003:extra"));
    }

    #[test]
    fn test_ordering() {
        let mut ids = vec![
            QualifiedCardId::new("b", "1"),
            QualifiedCardId::new("a", "2"),
            QualifiedCardId::new("a", "1"),
        ];
        ids.sort();
        let rendered: Vec<_> = ids.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["a:1", "a:2", "b:1"]);
    }

    #[test]
    fn test_serializes_as_string() {
        let id = QualifiedCardId::new("zeepkist", "007");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"zeepkist:007\"");

        let back: QualifiedCardId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_str::<QualifiedCardId>("\"bad\"").is_err());
    }
}
