//! Board data structures.
//!
//! - [`Piece`], [`Move`], [`Point`] - cell markers, move intents and resolved positions
//! - [`Board`] - the grid with gravity placement and win detection
//! - [`Direction`] - the four lines a run of pieces can lie on

pub use self::{board::*, direction::*, piece::*};

pub(crate) mod board;
pub(crate) mod direction;
pub(crate) mod piece;
mod render;
