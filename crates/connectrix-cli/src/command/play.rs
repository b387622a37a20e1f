use std::{path::PathBuf, thread, time::Duration};

use connectrix_engine::{Board, CONNECT_LENGTH, Game, MoveStrategy, Outcome, Piece};
use connectrix_evaluator::{
    heuristic_player::HeuristicPlayer, random_player::RandomPlayer, weights::Weights,
};

use crate::util;

/// Weights used by a heuristic player when no candidate file is given.
const DEFAULT_WEIGHTS: Weights = Weights {
    score_connect_two: 2,
    score_connect_three: 10,
    score_connect_four: 1000,
    score_giving_connect_two: -2,
    score_giving_connect_three: -20,
    score_giving_connect_four: -800,
};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum PlayerKind {
    Random,
    #[default]
    Heuristic,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Strategy of the player moving first (random or heuristic)
    #[arg(long, default_value = "heuristic")]
    first: PlayerKind,
    /// Candidate file (JSON format) with the first player's weights
    #[arg(long)]
    first_candidate: Option<PathBuf>,
    /// Strategy of the player moving second (random or heuristic)
    #[arg(long, default_value = "random")]
    second: PlayerKind,
    /// Candidate file (JSON format) with the second player's weights
    #[arg(long)]
    second_candidate: Option<PathBuf>,
    /// Number of board columns
    #[arg(long, default_value_t = Board::STANDARD_COLUMNS)]
    columns: usize,
    /// Number of board rows
    #[arg(long, default_value_t = Board::STANDARD_ROWS)]
    rows: usize,
    /// Pause between moves in milliseconds
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,
    /// Seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,
}

fn build_player(
    kind: PlayerKind,
    candidate: Option<&PathBuf>,
    piece: Piece,
) -> anyhow::Result<Box<dyn MoveStrategy>> {
    let player: Box<dyn MoveStrategy> = match (kind, candidate) {
        (PlayerKind::Random, None) => Box::new(RandomPlayer::new(piece)),
        (PlayerKind::Random, Some(path)) => {
            anyhow::bail!("a random player takes no candidate file: {}", path.display())
        }
        (PlayerKind::Heuristic, None) => Box::new(HeuristicPlayer::new(piece, DEFAULT_WEIGHTS)),
        (PlayerKind::Heuristic, Some(path)) => {
            let candidate = util::read_candidate_file(path)?;
            tracing::info!(
                id = candidate.id,
                generation = candidate.generation,
                path = %path.display(),
                "candidate loaded"
            );
            Box::new(candidate.player(piece))
        }
    };
    Ok(player)
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        first,
        first_candidate,
        second,
        second_candidate,
        columns,
        rows,
        delay_ms,
        seed,
    } = arg;

    anyhow::ensure!(
        *columns >= CONNECT_LENGTH && *rows >= CONNECT_LENGTH,
        "board must be at least {CONNECT_LENGTH}x{CONNECT_LENGTH}, got {columns}x{rows}"
    );

    let mut first_player = build_player(*first, first_candidate.as_ref(), Piece::PLAYER_ONE)?;
    let mut second_player = build_player(*second, second_candidate.as_ref(), Piece::PLAYER_TWO)?;
    tracing::info!(first = ?first, second = ?second, columns, rows, "game started");

    let mut rng = util::rng_from_seed(*seed);
    let delay = Duration::from_millis(*delay_ms);
    let mut game = Game::new(
        Board::new(*columns, *rows),
        &mut *first_player,
        &mut *second_player,
    );

    println!("{}", game.board());
    let outcome = game.play_with(&mut *rng, |board, point| {
        println!("Piece placed at column {}, row {}", point.column, point.row);
        println!("{board}");
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    })?;

    match outcome {
        Outcome::Winner(piece) => println!("Player {piece} wins after {} moves", game.moves_played()),
        Outcome::Draw => println!("Draw after {} moves", game.moves_played()),
    }
    tracing::info!(?outcome, moves = game.moves_played(), "game finished");
    Ok(())
}
