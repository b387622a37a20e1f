//! Board evaluation and automated players for Connect Four.
//!
//! # Architecture
//!
//! ```text
//! HeuristicPlayer (pick the best column)
//!     ↓ uses
//! Weights (weighted sum of run counts)
//!     ↓ uses
//! board_analysis (count runs of 2/3/4 pieces)
//! ```
//!
//! - [`board_analysis`] - counts maximal runs of a piece on a board, optionally after a
//!   hypothetical move
//! - [`weights`] - the six signed weights of a heuristic player
//! - [`random_player`] - uniform random column choice
//! - [`heuristic_player`] - single-ply lookahead scored by [`weights::Weights`]
//!
//! Both players implement [`connectrix_engine::MoveStrategy`] and can be handed to
//! [`connectrix_engine::Game`].

pub mod board_analysis;
pub mod heuristic_player;
pub mod random_player;
pub mod weights;
