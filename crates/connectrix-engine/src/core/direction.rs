use super::piece::Point;

/// One of the four lines a run of pieces can lie on.
///
/// Each direction is described by a unit step `(d_column, d_row)`; walking the opposite sense
/// uses a negative distance in [`Direction::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row.
    Horizontal,
    /// Bottom to top along a column.
    Vertical,
    /// Bottom-left to top-right (`/`).
    ForwardDiagonal,
    /// Top-left to bottom-right (`\`).
    BackwardDiagonal,
}

impl Direction {
    pub const ALL: [Self; 4] = [
        Self::Horizontal,
        Self::Vertical,
        Self::ForwardDiagonal,
        Self::BackwardDiagonal,
    ];

    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Horizontal => (1, 0),
            Self::Vertical => (0, 1),
            Self::ForwardDiagonal => (1, 1),
            Self::BackwardDiagonal => (1, -1),
        }
    }

    /// Returns the point `distance` steps away from `origin` along this direction.
    ///
    /// Returns `None` when the result would have a negative coordinate. Upper bounds are not
    /// checked here; the board answers `None` for cells beyond its edge.
    #[must_use]
    pub fn step(self, origin: Point, distance: isize) -> Option<Point> {
        let (d_column, d_row) = self.delta();
        let column = origin.column.checked_add_signed(d_column * distance)?;
        let row = origin.row.checked_add_signed(d_row * distance)?;
        Some(Point::new(column, row))
    }
}
