//! Plain-text board rendering.

use std::fmt;

use super::board::Board;

impl fmt::Display for Board {
    /// Draws the board top row first, one text line per row.
    ///
    /// ```
    /// use connectrix_engine::{Board, Move, Piece};
    ///
    /// let mut board = Board::new(4, 2);
    /// board.place(Move::new(Piece::PLAYER_ONE, 1)).unwrap();
    /// board.place(Move::new(Piece::PLAYER_TWO, 1)).unwrap();
    /// board.place(Move::new(Piece::PLAYER_ONE, 3)).unwrap();
    ///
    /// let expected = "\
    /// |   | 2 |   |   |
    /// |   | 1 |   | 1 |
    /// +---+---+---+---+
    ///   0   1   2   3
    /// ";
    /// assert_eq!(board.to_string(), expected);
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.rows()).rev() {
            for column in 0..self.columns() {
                let piece = self.cell(column, row).unwrap_or_default();
                write!(f, "| {piece} ")?;
            }
            writeln!(f, "|")?;
        }

        for _ in 0..self.columns() {
            f.write_str("+---")?;
        }
        writeln!(f, "+")?;

        for column in 0..self.columns() {
            if column > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{column:>3}")?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Move, Piece};

    use super::*;

    #[test]
    fn test_render_empty_board_dimensions() {
        let rendered = Board::standard().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        // 6 rows, separator, column footer
        assert_eq!(lines.len(), 8);
        assert!(lines[..6].iter().all(|line| *line == "|   |   |   |   |   |   |   |"));
        assert_eq!(lines[6], "+---+---+---+---+---+---+---+");
        assert_eq!(lines[7], "  0   1   2   3   4   5   6");
    }

    #[test]
    fn test_render_wide_footer_has_no_trailing_space() {
        let rendered = Board::new(11, 4).to_string();
        let footer = rendered.lines().last().unwrap();
        assert_eq!(footer, "  0   1   2   3   4   5   6   7   8   9  10");
    }

    #[test]
    fn test_render_bottom_row_last() {
        let mut board = Board::new(4, 4);
        board.place(Move::new(Piece::PLAYER_TWO, 0)).unwrap();
        let rendered = board.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[3], "| 2 |   |   |   |");
        assert_eq!(lines[0], "|   |   |   |   |");
    }
}
