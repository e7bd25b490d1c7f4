//! Card catalog entries.
//!
//! A `Card` is the immutable description of one playable card: name, level,
//! the four edge ranks and an optional image reference. Rarity and sampling
//! weight are derived from the level.

use serde::{Deserialize, Serialize};

/// Sampling weight per rarity tier, indexed by `Card::rarity`.
///
/// Tier 1 is the most common and tier 4 the rarest; tier 0 (level > 10)
/// never appears in boosters.
pub const RARITY_WEIGHTS: [u32; 5] = [0, 250, 50, 10, 1];

/// One edge of a card, also used as a neighbour direction on the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Top = 0,
    Right = 1,
    Bottom = 2,
    Left = 3,
}

impl Direction {
    /// All directions in rank order.
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
    ];

    /// Index into a card's rank array.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The facing edge: `(index + 2) mod 4`.
    #[must_use]
    pub const fn opposite(self) -> Self {
        Self::ALL[(self as usize + 2) % 4]
    }

    /// Grid offset `(dx, dy)` with y growing downwards.
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::Top => (0, -1),
            Direction::Right => (1, 0),
            Direction::Bottom => (0, 1),
            Direction::Left => (-1, 0),
        }
    }
}

/// Edge ranks in `[top, right, bottom, left]` order.
pub type Ranks = [u32; 4];

/// Immutable catalog card.
///
/// ## Example
///
/// ```
/// use triad::cards::Card;
///
/// let card = Card::new("Geezard", 10, [1, 4, 1, 5], None);
/// assert_eq!(card.rarity(), 4);
/// assert_eq!(card.weight(), 1);
/// assert_eq!(card.to_string(), "Geezard (10) [1, 4, 1, 5]");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    name: String,
    level: u32,
    ranks: Ranks,
    image: Option<String>,
}

impl Card {
    /// Create a card. Ingestion code validates `level >= 1` first.
    #[must_use]
    pub fn new(name: impl Into<String>, level: u32, ranks: Ranks, image: Option<String>) -> Self {
        Self {
            name: name.into(),
            level,
            ranks,
            image,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[must_use]
    pub fn ranks(&self) -> Ranks {
        self.ranks
    }

    /// Rank on one edge.
    #[must_use]
    pub fn rank(&self, direction: Direction) -> u32 {
        self.ranks[direction.index()]
    }

    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Rarity tier 0-4 derived from the level.
    #[must_use]
    pub fn rarity(&self) -> usize {
        match self.level {
            l if l > 10 => 0,
            10 => 4,
            8 | 9 => 3,
            6 | 7 => 2,
            _ => 1,
        }
    }

    /// Booster sampling weight.
    #[must_use]
    pub fn weight(&self) -> u32 {
        RARITY_WEIGHTS[self.rarity()]
    }

    /// Whether this card's edge beats the facing edge of `other`.
    ///
    /// Compares `self.ranks[direction]` against `other.ranks[opposite]`,
    /// strictly greater wins. Pure: nothing on the field changes.
    #[must_use]
    pub fn compare(&self, other: &Card, direction: Direction) -> bool {
        self.rank(direction) > other.rank(direction.opposite())
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [top, right, bottom, left] = self.ranks;
        write!(
            f,
            "{} ({}) [{}, {}, {}, {}]",
            self.name, self.level, top, right, bottom, left
        )
    }
}
