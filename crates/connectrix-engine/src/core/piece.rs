use std::fmt;

use serde::{Deserialize, Serialize};

/// Marker stored in a board cell.
///
/// The value `0` is reserved for an empty cell ([`Piece::EMPTY`]) and is never a valid player
/// marker. The two player markers used by games are [`Piece::PLAYER_ONE`] and
/// [`Piece::PLAYER_TWO`].
///
/// # Example
///
/// ```
/// use connectrix_engine::Piece;
///
/// assert!(Piece::EMPTY.is_empty());
/// assert_eq!(Piece::PLAYER_ONE.opponent(), Piece::PLAYER_TWO);
/// assert_eq!(Piece::PLAYER_TWO.opponent(), Piece::PLAYER_ONE);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Piece(u8);

impl Piece {
    /// Value of a cell with no piece in it.
    pub const EMPTY: Self = Self(0);
    /// Marker of the player who moves first.
    pub const PLAYER_ONE: Self = Self(1);
    /// Marker of the player who moves second.
    pub const PLAYER_TWO: Self = Self(2);

    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == Self::EMPTY.0
    }

    /// Returns the marker of the other player.
    ///
    /// Any marker other than [`Piece::PLAYER_ONE`] is answered with [`Piece::PLAYER_ONE`].
    #[must_use]
    pub const fn opponent(self) -> Self {
        if self.0 == Self::PLAYER_ONE.0 {
            Self::PLAYER_TWO
        } else {
            Self::PLAYER_ONE
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.pad(" ")
        } else {
            fmt::Display::fmt(&self.0, f)
        }
    }
}

/// A player's intent: drop `piece` into `column`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub piece: Piece,
    pub column: usize,
}

impl Move {
    #[must_use]
    pub const fn new(piece: Piece, column: usize) -> Self {
        Self { piece, column }
    }
}

/// Resolved board position of a placed piece.
///
/// Row 0 is the bottom row of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub column: usize,
    pub row: usize,
}

impl Point {
    #[must_use]
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}
