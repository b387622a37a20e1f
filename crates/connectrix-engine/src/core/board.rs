use crate::PlacementError;

use super::{
    direction::Direction,
    piece::{Move, Piece, Point},
};

/// Number of aligned pieces that wins a game.
pub const CONNECT_LENGTH: usize = 4;

/// Connect Four game grid.
///
/// The grid has a fixed number of columns and rows chosen at construction. Pieces are only
/// added through [`Board::place`], which applies gravity: a piece lands on the lowest empty
/// cell of its column. Row 0 is the bottom row.
///
/// Cloning a board deep-copies the grid, so hypothetical moves can be played on a clone
/// without touching the original.
///
/// # Example
///
/// ```
/// use connectrix_engine::{Board, Move, Piece, Point};
///
/// let mut board = Board::standard();
/// let point = board.place(Move::new(Piece::PLAYER_ONE, 3)).unwrap();
/// assert_eq!(point, Point::new(3, 0));
///
/// let point = board.place(Move::new(Piece::PLAYER_TWO, 3)).unwrap();
/// assert_eq!(point, Point::new(3, 1));
/// assert!(!board.has_connect_four(Some(point)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: usize,
    rows: usize,
    // column-major: cells[column * rows + row]
    cells: Vec<Piece>,
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    pub const STANDARD_COLUMNS: usize = 7;
    pub const STANDARD_ROWS: usize = 6;

    /// Creates an empty board.
    ///
    /// # Panics
    ///
    /// Panics if `columns` or `rows` is zero.
    #[must_use]
    pub fn new(columns: usize, rows: usize) -> Self {
        assert!(columns > 0 && rows > 0, "board must have at least one cell");
        Self {
            columns,
            rows,
            cells: vec![Piece::EMPTY; columns * rows],
        }
    }

    /// Creates an empty 7×6 board.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(Self::STANDARD_COLUMNS, Self::STANDARD_ROWS)
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the piece at `(column, row)`, or `None` if the cell is off the board.
    #[inline]
    #[must_use]
    pub fn cell(&self, column: usize, row: usize) -> Option<Piece> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        Some(self.cells[column * self.rows + row])
    }

    #[inline]
    #[must_use]
    pub fn cell_at(&self, point: Point) -> Option<Piece> {
        self.cell(point.column, point.row)
    }

    /// Returns a copy of the grid, indexed as `grid[column][row]`.
    ///
    /// The copy is detached from the board; mutating it has no effect on the board.
    #[must_use]
    pub fn grid(&self) -> Vec<Vec<Piece>> {
        self.cells
            .chunks_exact(self.rows)
            .map(<[Piece]>::to_vec)
            .collect()
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn pieces_placed(&self) -> usize {
        self.cells.iter().filter(|p| !p.is_empty()).count()
    }

    /// Number of pieces stacked in `column` (0 for an off-board column).
    #[must_use]
    pub fn column_height(&self, column: usize) -> usize {
        if column >= self.columns {
            return 0;
        }
        let column_cells = &self.cells[column * self.rows..][..self.rows];
        column_cells
            .iter()
            .position(|p| p.is_empty())
            .unwrap_or(self.rows)
    }

    /// Checks whether the top cell of `column` is occupied.
    ///
    /// Columns beyond the right edge report full, so they are never offered as a move.
    #[must_use]
    pub fn is_column_full(&self, column: usize) -> bool {
        self.cell(column, self.rows - 1)
            .is_none_or(|top| !top.is_empty())
    }

    /// Checks whether every column is full.
    #[must_use]
    pub fn is_full(&self) -> bool {
        (0..self.columns).all(|column| self.is_column_full(column))
    }

    /// Iterates over the columns that can still take a piece, left to right.
    pub fn open_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.columns).filter(|&column| !self.is_column_full(column))
    }

    /// Drops `mv.piece` into `mv.column` and returns where it landed.
    ///
    /// # Errors
    ///
    /// - [`PlacementError::ColumnOutOfRange`] if the column is not on the board
    /// - [`PlacementError::ColumnFull`] if the column's top cell is occupied
    /// - [`PlacementError::InvalidPiece`] if the piece is [`Piece::EMPTY`]
    pub fn place(&mut self, mv: Move) -> Result<Point, PlacementError> {
        let Move { piece, column } = mv;
        if column >= self.columns {
            return Err(PlacementError::ColumnOutOfRange {
                column,
                columns: self.columns,
            });
        }
        if self.is_column_full(column) {
            return Err(PlacementError::ColumnFull { column });
        }
        if piece.is_empty() {
            return Err(PlacementError::InvalidPiece);
        }

        let row = self.column_height(column);
        self.cells[column * self.rows + row] = piece;
        Ok(Point::new(column, row))
    }

    /// Checks whether the piece at `last_move` is part of four in a row.
    ///
    /// Only lines through `last_move` are inspected, since only the latest piece can complete
    /// a new line. Each direction is walked outward both ways from the point and the scan stops
    /// as soon as four matching pieces are counted.
    ///
    /// Returns `false` for `None` (no move played yet), for an off-board point and for an
    /// empty cell.
    #[must_use]
    pub fn has_connect_four(&self, last_move: Option<Point>) -> bool {
        let Some(point) = last_move else {
            return false;
        };
        let Some(piece) = self.cell_at(point) else {
            return false;
        };
        if piece.is_empty() {
            return false;
        }

        Direction::ALL
            .into_iter()
            .any(|direction| self.line_reaches(point, piece, direction, CONNECT_LENGTH))
    }

    fn line_reaches(&self, origin: Point, piece: Piece, direction: Direction, target: usize) -> bool {
        let mut count = 1;
        for sense in [1, -1] {
            let mut distance = sense;
            while count < target && self.piece_along(origin, direction, distance) == Some(piece) {
                count += 1;
                distance += sense;
            }
        }
        count >= target
    }

    fn piece_along(&self, origin: Point, direction: Direction, distance: isize) -> Option<Piece> {
        direction
            .step(origin, distance)
            .and_then(|point| self.cell_at(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE: Piece = Piece::PLAYER_ONE;
    const TWO: Piece = Piece::PLAYER_TWO;

    fn place(board: &mut Board, piece: Piece, column: usize) -> Point {
        board.place(Move::new(piece, column)).unwrap()
    }

    /// Builds a `/` staircase of `ONE` over `TWO` fillers starting at `first_column`.
    fn forward_staircase(board: &mut Board, first_column: usize) -> Point {
        let mut last = None;
        for step in 0..CONNECT_LENGTH {
            for _ in 0..step {
                place(board, TWO, first_column + step);
            }
            last = Some(place(board, ONE, first_column + step));
        }
        last.unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::standard();
        assert_eq!(board.columns(), 7);
        assert_eq!(board.rows(), 6);
        assert_eq!(board.pieces_placed(), 0);
        for column in 0..7 {
            for row in 0..6 {
                assert_eq!(board.cell(column, row), Some(Piece::EMPTY));
            }
        }
        assert_eq!(board.cell(7, 0), None);
        assert_eq!(board.cell(0, 6), None);
    }

    #[test]
    fn test_place_applies_gravity() {
        let mut board = Board::standard();
        assert_eq!(place(&mut board, ONE, 3), Point::new(3, 0));
        assert_eq!(place(&mut board, TWO, 3), Point::new(3, 1));
        assert_eq!(place(&mut board, ONE, 4), Point::new(4, 0));
        assert_eq!(board.cell(3, 1), Some(TWO));
        assert_eq!(board.column_height(3), 2);
        assert_eq!(board.pieces_placed(), 3);
    }

    #[test]
    fn test_column_fills_after_rows_placements() {
        let mut board = Board::standard();
        for placed in 1..board.rows() {
            place(&mut board, ONE, 0);
            assert!(!board.is_column_full(0), "full after {placed} pieces");
        }
        place(&mut board, ONE, 0);
        assert!(board.is_column_full(0));
        assert_eq!(
            board.place(Move::new(TWO, 0)),
            Err(PlacementError::ColumnFull { column: 0 })
        );
    }

    #[test]
    fn test_place_rejects_empty_piece() {
        let mut board = Board::standard();
        assert_eq!(
            board.place(Move::new(Piece::EMPTY, 2)),
            Err(PlacementError::InvalidPiece)
        );
        assert_eq!(board.pieces_placed(), 0);
    }

    #[test]
    fn test_place_rejects_out_of_range_column() {
        let mut board = Board::standard();
        assert_eq!(
            board.place(Move::new(ONE, 7)),
            Err(PlacementError::ColumnOutOfRange {
                column: 7,
                columns: 7
            })
        );
        assert!(board.is_column_full(7));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(4, 4);
        for column in 0..4 {
            for _ in 0..4 {
                assert!(!board.is_full());
                place(&mut board, ONE, column);
            }
        }
        assert!(board.is_full());
        assert_eq!(board.open_columns().count(), 0);
    }

    #[test]
    fn test_one_open_column_is_not_full() {
        let mut board = Board::standard();
        for column in 0..6 {
            for _ in 0..6 {
                place(&mut board, ONE, column);
            }
        }
        place(&mut board, TWO, 6);
        assert!(!board.is_full());
        assert_eq!(board.open_columns().collect::<Vec<_>>(), vec![6]);
    }

    #[test]
    fn test_no_connect_four_without_move() {
        let board = Board::standard();
        assert!(!board.has_connect_four(None));
    }

    #[test]
    fn test_no_connect_four_with_three_pieces() {
        let mut board = Board::standard();
        let mut last = None;
        for column in 0..3 {
            last = Some(place(&mut board, ONE, column));
        }
        assert!(!board.has_connect_four(last));
    }

    #[test]
    fn test_horizontal_connect_four() {
        let mut board = Board::standard();
        let mut last = None;
        for column in 0..4 {
            last = Some(place(&mut board, ONE, column));
        }
        assert_eq!(last, Some(Point::new(3, 0)));
        assert!(board.has_connect_four(last));
    }

    #[test]
    fn test_horizontal_connect_four_completed_in_middle() {
        let mut board = Board::standard();
        for column in [0, 1, 3] {
            place(&mut board, ONE, column);
        }
        let last = place(&mut board, ONE, 2);
        assert!(board.has_connect_four(Some(last)));
    }

    #[test]
    fn test_vertical_connect_four() {
        let mut board = Board::standard();
        let mut last = None;
        for _ in 0..4 {
            last = Some(place(&mut board, ONE, 0));
        }
        assert!(board.has_connect_four(last));
    }

    #[test]
    fn test_interrupted_vertical_line() {
        let mut board = Board::standard();
        for _ in 0..2 {
            place(&mut board, ONE, 0);
        }
        place(&mut board, TWO, 0);
        let last = place(&mut board, ONE, 0);
        assert!(!board.has_connect_four(Some(last)));
    }

    #[test]
    fn test_forward_diagonal_connect_four() {
        let mut board = Board::standard();
        let last = forward_staircase(&mut board, 0);
        assert_eq!(last, Point::new(3, 3));
        assert!(board.has_connect_four(Some(last)));
    }

    #[test]
    fn test_backward_diagonal_connect_four() {
        let mut board = Board::standard();
        let mut last = None;
        // staircase descending to the right: column 3 is lowest
        for (column, fillers) in [(0, 3), (1, 2), (2, 1), (3, 0)] {
            for _ in 0..fillers {
                place(&mut board, TWO, column);
            }
            last = Some(place(&mut board, ONE, column));
        }
        assert_eq!(last, Some(Point::new(3, 0)));
        assert!(board.has_connect_four(last));
    }

    #[test]
    fn test_connect_four_ignores_empty_and_off_board_points() {
        let mut board = Board::standard();
        forward_staircase(&mut board, 0);
        assert!(!board.has_connect_four(Some(Point::new(6, 5))));
        assert!(!board.has_connect_four(Some(Point::new(9, 0))));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut board = Board::standard();
        place(&mut board, ONE, 2);
        let before = board.grid();

        let mut cloned = board.clone();
        place(&mut cloned, TWO, 2);
        place(&mut cloned, TWO, 5);

        assert_eq!(board.grid(), before);
        assert_ne!(cloned.grid(), before);
        assert_eq!(cloned.pieces_placed(), 3);
    }

    #[test]
    fn test_grid_is_a_copy() {
        let mut board = Board::standard();
        place(&mut board, ONE, 0);
        let mut grid = board.grid();
        grid[0][0] = TWO;
        grid[1][0] = TWO;
        assert_eq!(board.cell(0, 0), Some(ONE));
        assert_eq!(board.cell(1, 0), Some(Piece::EMPTY));
        assert_eq!(grid.len(), 7);
        assert!(grid.iter().all(|column| column.len() == 6));
    }
}
