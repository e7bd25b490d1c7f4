//! Player numbers and field ownership tags.
//!
//! A match always has exactly two seats, numbered 1 and 2. Field cells carry
//! an `Owner`, which is either unclaimed (tag 0) or one of the two players.

use serde::{Deserialize, Serialize};

/// One of the two seats in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerNumber {
    One,
    Two,
}

impl PlayerNumber {
    /// Both seats, in order.
    pub const ALL: [PlayerNumber; 2] = [PlayerNumber::One, PlayerNumber::Two];

    /// Convert a raw seat number (1 or 2).
    ///
    /// ```
    /// use triad::core::PlayerNumber;
    ///
    /// assert_eq!(PlayerNumber::from_raw(2), Some(PlayerNumber::Two));
    /// assert_eq!(PlayerNumber::from_raw(0), None);
    /// assert_eq!(PlayerNumber::from_raw(3), None);
    /// ```
    #[must_use]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            1 => Some(PlayerNumber::One),
            2 => Some(PlayerNumber::Two),
            _ => None,
        }
    }

    /// The raw seat number (1 or 2).
    #[must_use]
    pub const fn raw(self) -> u8 {
        match self {
            PlayerNumber::One => 1,
            PlayerNumber::Two => 2,
        }
    }

    /// 0-based slot index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.raw() as usize - 1
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerNumber::One => PlayerNumber::Two,
            PlayerNumber::Two => PlayerNumber::One,
        }
    }
}

impl std::fmt::Display for PlayerNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.raw())
    }
}

/// Ownership tag of a field cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    #[default]
    Unclaimed,
    Player(PlayerNumber),
}

impl Owner {
    /// Raw tag: 0 for unclaimed, otherwise the seat number.
    ///
    /// Doubles as the index into a `[unclaimed, p1, p2]` score triple.
    #[must_use]
    pub const fn raw(self) -> u8 {
        match self {
            Owner::Unclaimed => 0,
            Owner::Player(player) => player.raw(),
        }
    }

    #[must_use]
    pub const fn player(self) -> Option<PlayerNumber> {
        match self {
            Owner::Unclaimed => None,
            Owner::Player(player) => Some(player),
        }
    }

    #[must_use]
    pub const fn is_claimed(self) -> bool {
        matches!(self, Owner::Player(_))
    }

    /// Swap between player 1 and 2. Unclaimed stays unclaimed.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Owner::Unclaimed => Owner::Unclaimed,
            Owner::Player(player) => Owner::Player(player.opponent()),
        }
    }
}

impl From<PlayerNumber> for Owner {
    fn from(player: PlayerNumber) -> Self {
        Owner::Player(player)
    }
}
