pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Reason a piece could not be dropped into a column.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlacementError {
    #[display("column {column} is out of range (board has {columns} columns)")]
    ColumnOutOfRange { column: usize, columns: usize },
    #[display("column {column} is full")]
    ColumnFull { column: usize },
    #[display("cannot place the empty piece")]
    InvalidPiece,
}

/// Reason a player could not make a move.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
    derive_more::IsVariant,
)]
pub enum MoveError {
    #[display("board is full")]
    BoardFull,
    #[display("player has no piece assigned")]
    MissingPiece,
    #[display("piece placement failed")]
    #[from]
    Placement(PlacementError),
}
