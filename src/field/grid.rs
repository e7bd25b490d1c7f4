//! The playing field.
//!
//! A grid of `FieldPosition`s addressed by `(x, y)`, where `x` is the column
//! and `y` the row, both starting at 0 in the top-left corner. Every
//! coordinate is bounds-checked; out-of-range access is a sentinel result,
//! never a panic.

use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::position::FieldPosition;
use crate::cards::{Card, Direction};
use crate::core::config::{GameConfig, DEFAULT_FIELD_SIZE};
use crate::core::player::{Owner, PlayerNumber};

/// Cell ownership tally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldScore {
    pub unclaimed: usize,
    pub player_one: usize,
    pub player_two: usize,
}

impl FieldScore {
    /// `[unclaimed, player 1, player 2]`.
    #[must_use]
    pub fn as_array(&self) -> [usize; 3] {
        [self.unclaimed, self.player_one, self.player_two]
    }

    /// Number of cells counted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.unclaimed + self.player_one + self.player_two
    }

    /// Player owning strictly more cells, `None` on a tie.
    #[must_use]
    pub fn leader(&self) -> Option<PlayerNumber> {
        match self.player_one.cmp(&self.player_two) {
            std::cmp::Ordering::Greater => Some(PlayerNumber::One),
            std::cmp::Ordering::Less => Some(PlayerNumber::Two),
            std::cmp::Ordering::Equal => None,
        }
    }

    fn count(&mut self, owner: Owner) {
        match owner {
            Owner::Unclaimed => self.unclaimed += 1,
            Owner::Player(PlayerNumber::One) => self.player_one += 1,
            Owner::Player(PlayerNumber::Two) => self.player_two += 1,
        }
    }
}

/// In-bounds neighbour of a cell: the direction it lies in, and its coordinates.
pub type Neighbor = (Direction, usize, usize);

/// Grid of field positions, 3x3 by default.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use triad::cards::Card;
/// use triad::core::{Owner, PlayerNumber};
/// use triad::field::Field;
///
/// let mut field = Field::new();
/// let card = Arc::new(Card::new("Geezard", 1, [1, 4, 1, 5], None));
///
/// assert!(field.place_card(1, 1, Arc::clone(&card), PlayerNumber::One));
/// assert!(!field.place_card(1, 1, card, PlayerNumber::Two));
/// assert_eq!(field.get_player(1, 1), Some(Owner::Player(PlayerNumber::One)));
/// assert_eq!(field.get_field_score().as_array(), [8, 1, 0]);
/// ```
#[derive(Clone, Debug)]
pub struct Field {
    width: usize,
    height: usize,
    grid: Vec<Vec<FieldPosition>>,
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}

impl Field {
    /// Create an empty 3x3 field.
    #[must_use]
    pub fn new() -> Self {
        Self::with_dimensions(DEFAULT_FIELD_SIZE, DEFAULT_FIELD_SIZE)
    }

    /// Create an empty field of the given size.
    #[must_use]
    pub fn with_dimensions(width: usize, height: usize) -> Self {
        let grid: Vec<Vec<FieldPosition>> = (0..width)
            .map(|_| (0..height).map(|_| FieldPosition::new()).collect::<Vec<_>>())
            .collect();
        Self { width, height, grid }
    }

    /// Create an empty field sized by `config`.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self::with_dimensions(config.field_width, config.field_height)
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    #[must_use]
    pub fn get_cells(&self) -> usize {
        self.width * self.height
    }

    #[must_use]
    pub fn is_valid(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// The cell at `(x, y)`.
    #[must_use]
    pub fn position(&self, x: usize, y: usize) -> Option<&FieldPosition> {
        self.grid.get(x)?.get(y)
    }

    fn position_mut(&mut self, x: usize, y: usize) -> Option<&mut FieldPosition> {
        self.grid.get_mut(x)?.get_mut(y)
    }

    /// Place a card for `player`. Fails out of range or on an occupied cell.
    pub fn place_card(&mut self, x: usize, y: usize, card: Arc<Card>, player: PlayerNumber) -> bool {
        let Some(cell) = self.position_mut(x, y) else {
            return false;
        };

        let placed = cell.place_card(Arc::clone(&card), player);
        if placed {
            debug!("{player} placed {} at ({x}, {y})", card.name());
        }
        placed
    }

    /// Card at `(x, y)`; `None` when out of range or empty.
    #[must_use]
    pub fn get_card(&self, x: usize, y: usize) -> Option<&Arc<Card>> {
        self.position(x, y)?.card()
    }

    /// Owner of `(x, y)`; `None` when out of range.
    #[must_use]
    pub fn get_player(&self, x: usize, y: usize) -> Option<Owner> {
        self.position(x, y).map(FieldPosition::owner)
    }

    /// Flip ownership of `(x, y)`. Returns `false` when out of range.
    pub fn change_player(&mut self, x: usize, y: usize) -> bool {
        match self.position_mut(x, y) {
            Some(cell) => {
                cell.change_player();
                true
            }
            None => false,
        }
    }

    /// In-bounds neighbours of `(x, y)`, in `Direction::ALL` order.
    #[must_use]
    pub fn neighbors(&self, x: usize, y: usize) -> SmallVec<[Neighbor; 4]> {
        let mut result = SmallVec::new();
        if !self.is_valid(x, y) {
            return result;
        }

        for direction in Direction::ALL {
            let (dx, dy) = direction.offset();
            let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
                continue;
            };
            if self.is_valid(nx, ny) {
                result.push((direction, nx, ny));
            }
        }
        result
    }

    /// Ownership tally over every cell.
    #[must_use]
    pub fn get_field_score(&self) -> FieldScore {
        let mut score = FieldScore::default();
        for cell in self.grid.iter().flatten() {
            score.count(cell.owner());
        }
        score
    }

    /// Whether every cell holds a card.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.grid.iter().flatten().all(FieldPosition::is_occupied)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows: Vec<String> = (0..self.height)
            .map(|y| {
                let cells: Vec<String> = (0..self.width)
                    .map(|x| self.grid[x][y].to_string())
                    .collect();
                format!("[{}]", cells.join(", "))
            })
            .collect();
        write!(f, "[{}]", rows.join(", "))
    }
}
