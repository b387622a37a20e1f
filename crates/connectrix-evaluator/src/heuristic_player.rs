//! Single-ply lookahead player driven by [`Weights`].
//!
//! For every open column the player plays the move on a copy of the board and scores:
//!
//! 1. its own runs of 2/3/4 on that copy, weighted by the `score_connect_*` weights
//! 2. the runs the opponent would get by replying in the same column, weighted by the
//!    `score_giving_connect_*` weights (zero when the move filled the column)
//!
//! The column with the highest total is played. Ties are broken uniformly at random.

use connectrix_engine::{Board, Move, MoveError, MoveStrategy, Piece, PlacementError};
use rand::{RngCore, seq::IndexedRandom as _};

use crate::{board_analysis::RunCounts, weights::Weights};

/// Heuristic player with fixed weights.
///
/// # Example
///
/// ```
/// use connectrix_engine::{Board, Move, MoveStrategy, Piece, Point};
/// use connectrix_evaluator::{heuristic_player::HeuristicPlayer, weights::Weights};
///
/// let weights = Weights {
///     score_connect_four: 1000,
///     ..Weights::default()
/// };
/// let mut player = HeuristicPlayer::new(Piece::PLAYER_ONE, weights);
///
/// let mut board = Board::standard();
/// for column in 0..3 {
///     board.place(Move::new(Piece::PLAYER_ONE, column)).unwrap();
/// }
/// let point = player.make_move(&mut board, &mut rand::rng()).unwrap();
/// assert_eq!(point, Point::new(3, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeuristicPlayer {
    piece: Piece,
    weights: Weights,
}

impl HeuristicPlayer {
    #[must_use]
    pub fn new(piece: Piece, weights: Weights) -> Self {
        Self { piece, weights }
    }

    #[must_use]
    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Scores playing into `column` on `board`.
    ///
    /// # Errors
    ///
    /// Returns the placement error if this player's piece cannot be dropped into `column`.
    pub fn column_score(&self, board: &Board, column: usize) -> Result<i64, PlacementError> {
        let mut after = board.clone();
        after.place(Move::new(self.piece, column))?;
        let own = self.weights.connect_score(&RunCounts::of(self.piece, &after));

        if after.is_column_full(column) {
            return Ok(own);
        }
        let reply = Move::new(self.piece.opponent(), column);
        let giving = self
            .weights
            .giving_score(&RunCounts::after_move(reply, &after)?);
        Ok(own.saturating_add(giving))
    }

    /// Scores `board` as it stands: own runs with the connect weights plus the opponent's runs
    /// with the giving weights.
    #[must_use]
    pub fn board_score(&self, board: &Board) -> i64 {
        let own = self.weights.connect_score(&RunCounts::of(self.piece, board));
        let opponent = RunCounts::of(self.piece.opponent(), board);
        own.saturating_add(self.weights.giving_score(&opponent))
    }
}

impl MoveStrategy for HeuristicPlayer {
    fn piece(&self) -> Piece {
        self.piece
    }

    fn set_piece(&mut self, piece: Piece) {
        self.piece = piece;
    }

    fn select_column(&mut self, board: &Board, rng: &mut dyn RngCore) -> Result<usize, MoveError> {
        let mut best_score = i64::MIN;
        let mut best_columns = Vec::with_capacity(board.columns());

        for column in board.open_columns() {
            let score = self.column_score(board, column)?;
            tracing::trace!(piece = self.piece.value(), column, score, "column scored");
            if score > best_score {
                best_score = score;
                best_columns.clear();
            }
            if score == best_score {
                best_columns.push(column);
            }
        }

        best_columns
            .choose(rng)
            .copied()
            .ok_or(MoveError::BoardFull)
    }
}
