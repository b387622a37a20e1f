use rand::RngCore;

use crate::{
    MoveError,
    core::{
        board::Board,
        piece::{Piece, Point},
    },
};

use super::strategy::MoveStrategy;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Outcome {
    /// The player holding this piece connected four.
    Winner(Piece),
    /// The board filled up.
    Draw,
}

impl Outcome {
    #[must_use]
    pub fn winner(self) -> Option<Piece> {
        match self {
            Self::Winner(piece) => Some(piece),
            Self::Draw => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameState {
    NotStarted,
    InProgress,
    Finished(Outcome),
}

/// A two-player game on one board.
///
/// The game owns its board and borrows the two players for its duration. The first player is
/// assigned [`Piece::PLAYER_ONE`] and moves first; the second is assigned
/// [`Piece::PLAYER_TWO`]. Turns alternate strictly.
///
/// After every move the board is checked for a draw (board full) before the placed piece is
/// checked for four in a row, so a winning move that fills the last cell ends in a draw.
///
/// # Example
///
/// ```
/// use connectrix_engine::{Board, Game, GameState, MoveError, MoveStrategy, Outcome, Piece};
/// use rand::RngCore;
///
/// #[derive(Debug)]
/// struct Leftmost(Piece);
///
/// impl MoveStrategy for Leftmost {
///     fn piece(&self) -> Piece {
///         self.0
///     }
///     fn set_piece(&mut self, piece: Piece) {
///         self.0 = piece;
///     }
///     fn select_column(&mut self, board: &Board, _rng: &mut dyn RngCore) -> Result<usize, MoveError> {
///         board.open_columns().next().ok_or(MoveError::BoardFull)
///     }
/// }
///
/// let mut first = Leftmost(Piece::EMPTY);
/// let mut second = Leftmost(Piece::EMPTY);
/// let mut game = Game::new(Board::standard(), &mut first, &mut second);
/// assert_eq!(game.state(), GameState::NotStarted);
///
/// let outcome = game.play(&mut rand::rng()).unwrap();
/// // columns fill left to right alternating 1-2-1-2..., so player one owns the bottom row
/// assert_eq!(outcome, Outcome::Winner(Piece::PLAYER_ONE));
/// assert!(game.state().is_finished());
/// ```
#[derive(Debug)]
pub struct Game<'a> {
    board: Board,
    players: [&'a mut dyn MoveStrategy; 2],
    state: GameState,
    next: usize,
    last_move: Option<Point>,
    moves_played: usize,
}

impl<'a> Game<'a> {
    /// Sets up a game and assigns the players' pieces.
    #[must_use]
    pub fn new(
        board: Board,
        first: &'a mut dyn MoveStrategy,
        second: &'a mut dyn MoveStrategy,
    ) -> Self {
        first.set_piece(Piece::PLAYER_ONE);
        second.set_piece(Piece::PLAYER_TWO);
        Self {
            board,
            players: [first, second],
            state: GameState::NotStarted,
            next: 0,
            last_move: None,
            moves_played: 0,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Returns the outcome once the game is finished.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            GameState::Finished(outcome) => Some(outcome),
            GameState::NotStarted | GameState::InProgress => None,
        }
    }

    #[must_use]
    pub fn last_move(&self) -> Option<Point> {
        self.last_move
    }

    #[must_use]
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Piece of the player whose turn it is.
    #[must_use]
    pub fn next_piece(&self) -> Piece {
        self.players[self.next].piece()
    }

    /// Plays a single move and returns the resulting state.
    ///
    /// Does nothing on a finished game.
    ///
    /// # Errors
    ///
    /// Returns the error of the player whose turn it is; the game state is left unchanged.
    pub fn step(&mut self, rng: &mut dyn RngCore) -> Result<GameState, MoveError> {
        if self.state.is_finished() {
            return Ok(self.state);
        }

        let point = self.players[self.next].make_move(&mut self.board, rng)?;
        let piece = self.players[self.next].piece();
        self.last_move = Some(point);
        self.moves_played += 1;
        tracing::trace!(
            piece = piece.value(),
            column = point.column,
            row = point.row,
            "piece placed"
        );

        self.state = if self.board.is_full() {
            GameState::Finished(Outcome::Draw)
        } else if self.board.has_connect_four(self.last_move) {
            GameState::Finished(Outcome::Winner(piece))
        } else {
            GameState::InProgress
        };
        self.next = 1 - self.next;
        Ok(self.state)
    }

    /// Plays until the game is finished.
    ///
    /// # Errors
    ///
    /// Aborts with the first error returned by a player.
    pub fn play(&mut self, rng: &mut dyn RngCore) -> Result<Outcome, MoveError> {
        self.play_with(rng, |_, _| {})
    }

    /// Plays until the game is finished, calling `observer` with the board and the placed point
    /// after every move.
    ///
    /// # Errors
    ///
    /// Aborts with the first error returned by a player.
    pub fn play_with<F>(&mut self, rng: &mut dyn RngCore, mut observer: F) -> Result<Outcome, MoveError>
    where
        F: FnMut(&Board, Point),
    {
        loop {
            let state = self.step(rng)?;
            if let Some(point) = self.last_move {
                observer(&self.board, point);
            }
            if let GameState::Finished(outcome) = state {
                return Ok(outcome);
            }
        }
    }
}
