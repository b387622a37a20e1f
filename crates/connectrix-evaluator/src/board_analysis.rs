//! Run counting on a board.
//!
//! A *run* is a maximal line of consecutive cells holding the same piece along one of the four
//! [`Direction`]s. Every maximal run is counted exactly once per direction, in the bucket for
//! its length. Runs longer than [`CONNECT_LENGTH`] land in the [`CONNECT_LENGTH`] bucket, so a
//! line of five counts as one run of four and nothing else.
//!
//! A lone piece is a run of length 1 in each of the four directions.
//!
//! # Example
//!
//! ```
//! use connectrix_engine::{Board, Move, Piece};
//! use connectrix_evaluator::board_analysis::{count_runs_of_length, count_runs_of_length_after_move};
//!
//! let mut board = Board::standard();
//! for column in 0..3 {
//!     board.place(Move::new(Piece::PLAYER_ONE, column)).unwrap();
//! }
//! assert_eq!(count_runs_of_length(3, Piece::PLAYER_ONE, &board), 1);
//! assert_eq!(count_runs_of_length(4, Piece::PLAYER_ONE, &board), 0);
//!
//! let four = count_runs_of_length_after_move(4, Move::new(Piece::PLAYER_ONE, 3), &board).unwrap();
//! assert_eq!(four, 1);
//! // the board itself is untouched
//! assert_eq!(board.pieces_placed(), 3);
//! ```

use connectrix_engine::{Board, CONNECT_LENGTH, Direction, Move, Piece, PlacementError, Point};

/// Number of runs of a single piece, bucketed by length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunCounts {
    by_length: [usize; CONNECT_LENGTH + 1],
}

impl RunCounts {
    /// Counts every run of `piece` on `board` in one pass.
    ///
    /// The empty piece has no runs.
    #[must_use]
    pub fn of(piece: Piece, board: &Board) -> Self {
        let mut counts = Self::default();
        if piece.is_empty() {
            return counts;
        }

        for column in 0..board.columns() {
            for row in 0..board.rows() {
                let origin = Point::new(column, row);
                if board.cell_at(origin) != Some(piece) {
                    continue;
                }
                for direction in Direction::ALL {
                    // only the first cell of a run starts the count
                    if piece_along(board, origin, direction, -1) == Some(piece) {
                        continue;
                    }
                    let mut distance = 1;
                    while piece_along(board, origin, direction, distance) == Some(piece) {
                        distance += 1;
                    }
                    let length = distance.unsigned_abs().min(CONNECT_LENGTH);
                    counts.by_length[length] += 1;
                }
            }
        }

        counts
    }

    /// Counts the runs of `mv.piece` on a copy of `board` with `mv` applied.
    ///
    /// # Errors
    ///
    /// Returns the placement error if `mv` cannot be played on `board`.
    pub fn after_move(mv: Move, board: &Board) -> Result<Self, PlacementError> {
        let mut after = board.clone();
        after.place(mv)?;
        Ok(Self::of(mv.piece, &after))
    }

    /// Number of runs of exactly `length` pieces.
    ///
    /// Length 0 and lengths above [`CONNECT_LENGTH`] have no runs.
    #[must_use]
    pub fn get(&self, length: usize) -> usize {
        match length {
            0 => 0,
            _ => self.by_length.get(length).copied().unwrap_or(0),
        }
    }

    #[must_use]
    pub fn twos(&self) -> usize {
        self.get(2)
    }

    #[must_use]
    pub fn threes(&self) -> usize {
        self.get(3)
    }

    #[must_use]
    pub fn fours(&self) -> usize {
        self.get(CONNECT_LENGTH)
    }
}

fn piece_along(board: &Board, origin: Point, direction: Direction, distance: isize) -> Option<Piece> {
    direction
        .step(origin, distance)
        .and_then(|point| board.cell_at(point))
}

/// Counts the runs of exactly `length` pieces of `piece` over all four directions.
#[must_use]
pub fn count_runs_of_length(length: usize, piece: Piece, board: &Board) -> usize {
    RunCounts::of(piece, board).get(length)
}

/// Counts the runs of exactly `length` pieces of `mv.piece` as if `mv` had been played.
///
/// The move is applied to a clone; `board` is never modified.
///
/// # Errors
///
/// - [`PlacementError::ColumnFull`] if the target column is full
/// - [`PlacementError::ColumnOutOfRange`] if the target column is not on the board
/// - [`PlacementError::InvalidPiece`] if `mv.piece` is empty
pub fn count_runs_of_length_after_move(
    length: usize,
    mv: Move,
    board: &Board,
) -> Result<usize, PlacementError> {
    Ok(RunCounts::after_move(mv, board)?.get(length))
}
