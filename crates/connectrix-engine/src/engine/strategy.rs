use std::fmt;

use rand::RngCore;

use crate::{
    MoveError,
    core::{
        board::Board,
        piece::{Move, Piece, Point},
    },
};

/// Chooses where a player drops its piece.
///
/// Implementors only decide the column; [`MoveStrategy::make_move`] validates the player and
/// the board, then applies exactly one piece.
pub trait MoveStrategy: fmt::Debug {
    /// Marker this player drops, or [`Piece::EMPTY`] if none has been assigned yet.
    fn piece(&self) -> Piece;

    /// Assigns the marker this player drops.
    fn set_piece(&mut self, piece: Piece);

    /// Picks a column that is not full.
    ///
    /// Called only with a non-empty piece assigned and a board that is not full.
    fn select_column(&mut self, board: &Board, rng: &mut dyn RngCore) -> Result<usize, MoveError>;

    /// Places one piece on `board` and returns where it landed.
    ///
    /// # Errors
    ///
    /// - [`MoveError::MissingPiece`] if no piece has been assigned
    /// - [`MoveError::BoardFull`] if no column can take a piece
    /// - [`MoveError::Placement`] if the selected column is rejected by the board
    fn make_move(&mut self, board: &mut Board, rng: &mut dyn RngCore) -> Result<Point, MoveError> {
        let piece = self.piece();
        if piece.is_empty() {
            return Err(MoveError::MissingPiece);
        }
        if board.is_full() {
            return Err(MoveError::BoardFull);
        }
        let column = self.select_column(board, rng)?;
        Ok(board.place(Move::new(piece, column))?)
    }
}

impl<T> MoveStrategy for Box<T>
where
    T: MoveStrategy + ?Sized,
{
    fn piece(&self) -> Piece {
        (**self).piece()
    }

    fn set_piece(&mut self, piece: Piece) {
        (**self).set_piece(piece);
    }

    fn select_column(&mut self, board: &Board, rng: &mut dyn RngCore) -> Result<usize, MoveError> {
        (**self).select_column(board, rng)
    }

    fn make_move(&mut self, board: &mut Board, rng: &mut dyn RngCore) -> Result<Point, MoveError> {
        (**self).make_move(board, rng)
    }
}
