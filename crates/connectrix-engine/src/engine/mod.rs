//! Turn-based play on top of the core board.
//!
//! - [`MoveStrategy`] - how a player picks its column
//! - [`Game`] - alternates two players until a win or a full board
//! - [`GameState`] / [`Outcome`] - where a game stands and how it ended
//!
//! # Game Flow
//!
//! 1. [`Game::new`] assigns [`Piece::PLAYER_ONE`](crate::Piece::PLAYER_ONE) to the first
//!    player and [`Piece::PLAYER_TWO`](crate::Piece::PLAYER_TWO) to the second
//! 2. Each [`Game::step`] lets the player to move drop exactly one piece
//! 3. A full board ends the game in a draw; otherwise four in a row through the placed piece
//!    ends it with the mover as winner
//! 4. [`Game::play`] repeats step 2 until the game is finished

pub use self::{game::*, strategy::*};

mod game;
mod strategy;
