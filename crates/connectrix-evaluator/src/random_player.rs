//! A player that drops its piece into a random column.

use connectrix_engine::{Board, MoveError, MoveStrategy, Piece};
use rand::{Rng as _, RngCore};

/// Picks a column uniformly at random.
///
/// When the drawn column is full, the next column to the right is tried, wrapping around to
/// column 0, until an open column is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RandomPlayer {
    piece: Piece,
}

impl RandomPlayer {
    #[must_use]
    pub fn new(piece: Piece) -> Self {
        Self { piece }
    }
}

impl MoveStrategy for RandomPlayer {
    fn piece(&self) -> Piece {
        self.piece
    }

    fn set_piece(&mut self, piece: Piece) {
        self.piece = piece;
    }

    fn select_column(&mut self, board: &Board, rng: &mut dyn RngCore) -> Result<usize, MoveError> {
        let columns = board.columns();
        let drawn = rng.random_range(0..columns);
        (0..columns)
            .map(|offset| (drawn + offset) % columns)
            .find(|&column| !board.is_column_full(column))
            .ok_or(MoveError::BoardFull)
    }
}
