//! Raised errors for catalog inconsistencies.
//!
//! The engine signals two kinds of failure:
//!
//! - **Raised** (`TriadError`): code referenced a set or card that does not
//!   exist, or catalog data is malformed. These propagate with `?`.
//! - **Sentinel** (`bool` / `Option`): expected, recoverable outcomes such as
//!   an occupied field cell, an out-of-range index or insufficient deck
//!   quantity. These never become a `TriadError`.

use thiserror::Error;

/// Errors raised by catalog lookups and ingestion.
#[derive(Debug, Error)]
pub enum TriadError {
    #[error("the set could not be found: {0}")]
    SetNotFound(String),

    #[error("the card could not be found: {0}")]
    CardNotFound(String),

    #[error("a set with id {0} is already registered")]
    DuplicateSet(String),

    /// The set has no sampling weight (empty, or only level > 10 cards).
    #[error("set {0} has zero total weight")]
    ZeroWeight(String),

    /// A deck quantity would exceed `u32::MAX`.
    #[error("quantity overflow for card {0}")]
    QuantityOverflow(String),

    #[error("invalid qualified card id: {0:?}")]
    InvalidCardId(String),

    #[error("invalid card {card_id}: {reason}")]
    InvalidCard { card_id: String, reason: String },

    #[error("catalog json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, TriadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = TriadError::SetNotFound("zeepkist".into());
        assert_eq!(err.to_string(), "the set could not be found: zeepkist");

        let err = TriadError::CardNotFound("zeepkist:001".into());
        assert_eq!(err.to_string(), "the card could not be found: zeepkist:001");
    }

    #[test]
    fn test_json_conversion() {
        let parse: std::result::Result<u32, _> = serde_json::from_str("nope");
        let err: TriadError = parse.unwrap_err().into();
        assert!(matches!(err, TriadError::Json(_)));
    }
}
