//! The playing field and its cells.
//!
//! Capture is left to callers: `Card::compare` decides whether an edge wins,
//! `Field::neighbors` finds the adjacent cells, and `Field::change_player`
//! flips a cell. The placement path itself never flips anything.

pub mod grid;
pub mod position;

pub use grid::{Field, FieldScore, Neighbor};
pub use position::FieldPosition;
