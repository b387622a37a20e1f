//! Population and generation loop.
//!
//! # Algorithm Overview
//!
//! 1. **Initialize** - [`Population::random`] draws every candidate's weights from the
//!    parameter bounds (ids from 0, generation 1)
//! 2. **Play** - [`Population::play_round`] matches candidates according to the
//!    [`RoundEvaluation`] mode; after each game both sides are scored with their own
//!    [`board_score`](connectrix_evaluator::heuristic_player::HeuristicPlayer::board_score) on
//!    the final board, whatever the result
//! 3. **Select** - [`Population::select_elites`] ranks by round score, keeps the top pool and
//!    samples the elites from it at random
//! 4. **Refill** - [`Population::next_generation`] carries the elites over unchanged and fills
//!    the population with fresh random candidates of the next generation
//!
//! [`evolve`] repeats steps 2-4 for the configured number of iterations.
//!
//! # Current Limitations
//!
//! - No crossover or mutation: new candidates are drawn fresh from the parameter bounds, so
//!   `parentSelectionPercentage` and `childMutationPercentage` have no effect yet
//! - Matches run sequentially

use connectrix_engine::{Board, Game, MoveError, Outcome, Piece};
use rand::{Rng, RngCore, seq::SliceRandom as _};

use crate::{
    candidate::{Candidate, GameResult},
    params::{EvolutionParameters, ParameterError, RoundEvaluation},
    statistics::ScoreStats,
};

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum EvolutionError {
    #[display("invalid evolution parameters")]
    Parameter(ParameterError),
    #[display("match aborted")]
    Move(MoveError),
}

/// Summary of one game between two candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchReport {
    pub first_id: u64,
    pub second_id: u64,
    pub outcome: Outcome,
    pub first_score: i64,
    pub second_score: i64,
    pub moves: usize,
}

#[derive(Debug, Clone)]
pub struct Population {
    generation: u64,
    next_id: u64,
    candidates: Vec<Candidate>,
}

impl Population {
    /// Creates the first generation with random weights.
    ///
    /// The population size is rounded up to an even number.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::MissingScoreType`] if a weight has no bounds.
    pub fn random<R>(params: &EvolutionParameters, rng: &mut R) -> Result<Self, ParameterError>
    where
        R: Rng + ?Sized,
    {
        let size = params.even_population_size();
        let candidates = (0..size as u64)
            .map(|id| Candidate::random(params, id, 1, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            generation: 1,
            next_id: size as u64,
            candidates,
        })
    }

    /// Wraps existing candidates; new ids continue after the highest id present.
    #[must_use]
    pub fn from_candidates(generation: u64, candidates: Vec<Candidate>) -> Self {
        let next_id = candidates.iter().map(|c| c.id + 1).max().unwrap_or(0);
        Self {
            generation,
            next_id,
            candidates,
        }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Plays one round and scores every candidate.
    ///
    /// Each candidate's round score is reset first, then summed over its games of the round.
    /// Every game is played on a copy of `board`.
    ///
    /// - [`RoundEvaluation::SingleMatch`]: shuffled pairs play once; the first of a pair moves
    ///   first. With an odd count the last candidate sits out.
    /// - [`RoundEvaluation::DoubleMatch`]: shuffled pairs play twice with roles swapped.
    /// - [`RoundEvaluation::PlayEveryone`]: every candidate plays every other once, the first
    ///   mover alternating between pairings.
    ///
    /// # Errors
    ///
    /// - [`ParameterError::UnsupportedRoundEvaluation`] for [`RoundEvaluation::Tournament`]
    /// - [`EvolutionError::Move`] if a player fails to move
    pub fn play_round(
        &mut self,
        mode: RoundEvaluation,
        board: &Board,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<MatchReport>, EvolutionError> {
        for candidate in &mut self.candidates {
            candidate.start_round();
        }

        let pairings = match mode {
            RoundEvaluation::SingleMatch => self.shuffled_pairs(rng),
            RoundEvaluation::DoubleMatch => self
                .shuffled_pairs(rng)
                .into_iter()
                .flat_map(|(a, b)| [(a, b), (b, a)])
                .collect(),
            RoundEvaluation::PlayEveryone => self.round_robin(),
            RoundEvaluation::Tournament => {
                return Err(ParameterError::UnsupportedRoundEvaluation {
                    round_evaluation: mode,
                }
                .into());
            }
        };

        let mut reports = Vec::with_capacity(pairings.len());
        for (first, second) in pairings {
            reports.push(self.play_match(first, second, board, rng)?);
        }
        Ok(reports)
    }

    fn shuffled_pairs(&self, rng: &mut dyn RngCore) -> Vec<(usize, usize)> {
        let mut order = (0..self.candidates.len()).collect::<Vec<_>>();
        order.shuffle(rng);
        order
            .chunks_exact(2)
            .map(|pair| (pair[0], pair[1]))
            .collect()
    }

    fn round_robin(&self) -> Vec<(usize, usize)> {
        let n = self.candidates.len();
        (0..n)
            .flat_map(|a| (a + 1..n).map(move |b| (a, b)))
            .enumerate()
            .map(|(k, (a, b))| if k % 2 == 0 { (a, b) } else { (b, a) })
            .collect()
    }

    fn play_match(
        &mut self,
        first: usize,
        second: usize,
        board: &Board,
        rng: &mut dyn RngCore,
    ) -> Result<MatchReport, EvolutionError> {
        let mut first_player = self.candidates[first].player(Piece::PLAYER_ONE);
        let mut second_player = self.candidates[second].player(Piece::PLAYER_TWO);

        let mut game = Game::new(board.clone(), &mut first_player, &mut second_player);
        let outcome = game.play(rng)?;
        let moves = game.moves_played();
        let final_board = game.into_board();

        let first_score = first_player.board_score(&final_board);
        let second_score = second_player.board_score(&final_board);
        self.candidates[first]
            .record_game(first_score, GameResult::for_piece(outcome, Piece::PLAYER_ONE));
        self.candidates[second]
            .record_game(second_score, GameResult::for_piece(outcome, Piece::PLAYER_TWO));

        let report = MatchReport {
            first_id: self.candidates[first].id,
            second_id: self.candidates[second].id,
            outcome,
            first_score,
            second_score,
            moves,
        };
        tracing::debug!(
            first = report.first_id,
            second = report.second_id,
            ?outcome,
            first_score,
            second_score,
            moves,
            "match finished"
        );
        Ok(report)
    }

    /// Statistics of the current round scores, or `None` for an empty population.
    #[must_use]
    pub fn score_stats(&self) -> Option<ScoreStats> {
        ScoreStats::new(self.candidates.iter().map(Candidate::last_game_score))
    }

    /// Picks `selection_size` elites at random among the `pool_size` best round scores.
    ///
    /// Both sizes are capped at the population size, and the selection at the pool size.
    pub fn select_elites<R>(&self, selection_size: usize, pool_size: usize, rng: &mut R) -> Vec<Candidate>
    where
        R: Rng + ?Sized,
    {
        let mut ranked = self.candidates.iter().collect::<Vec<_>>();
        ranked.sort_by_key(|c| std::cmp::Reverse(c.last_game_score()));
        ranked.truncate(pool_size);
        ranked.shuffle(rng);
        ranked.truncate(selection_size);
        ranked.into_iter().cloned().collect()
    }

    /// Builds the next generation from `elites`.
    ///
    /// The elites keep their id, generation and scores. The population is refilled to
    /// [`EvolutionParameters::even_population_size`] with random candidates of the next
    /// generation, numbered after the highest id handed out so far.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::MissingScoreType`] if a weight has no bounds.
    pub fn next_generation<R>(
        &self,
        elites: Vec<Candidate>,
        params: &EvolutionParameters,
        rng: &mut R,
    ) -> Result<Self, ParameterError>
    where
        R: Rng + ?Sized,
    {
        let generation = self.generation + 1;
        let size = params.even_population_size();
        let mut next_id = self.next_id;
        let mut candidates = elites;
        candidates.truncate(size);
        while candidates.len() < size {
            candidates.push(Candidate::random(params, next_id, generation, rng)?);
            next_id += 1;
        }
        Ok(Self {
            generation,
            next_id,
            candidates,
        })
    }
}

/// Final state of an evolution run.
#[derive(Debug, Clone)]
pub struct Evolution {
    /// Generation of the last round played.
    pub generation: u64,
    /// Elites selected after the last round.
    pub elites: Vec<Candidate>,
    /// Population of the last round, with its round scores.
    pub population: Population,
}

/// Runs the whole evolution loop.
///
/// # Errors
///
/// - [`EvolutionError::Parameter`] if `params` fail validation
/// - [`EvolutionError::Move`] if a match is aborted
pub fn evolve<R>(params: &EvolutionParameters, rng: &mut R) -> Result<Evolution, EvolutionError>
where
    R: RngCore,
{
    params.validate()?;
    let board = params.new_board()?;
    let selection_size = params.elite_selection_size();
    let pool_size = params.elite_pool_size();

    let mut population = Population::random(params, rng)?;
    tracing::info!(
        size = population.len(),
        selection_size,
        pool_size,
        "initial population created"
    );

    let mut iteration = 1;
    loop {
        let reports = population.play_round(params.round_evaluation, &board, rng)?;
        let draws = reports.iter().filter(|r| r.outcome.is_draw()).count();
        let elites = population.select_elites(selection_size, pool_size, rng);

        if let Some(stats) = population.score_stats() {
            tracing::info!(
                iteration,
                generation = population.generation(),
                matches = reports.len(),
                draws,
                min = stats.min,
                max = stats.max,
                mean = stats.mean,
                median = stats.median,
                "round finished"
            );
        }

        if iteration >= params.iterations {
            return Ok(Evolution {
                generation: population.generation(),
                elites,
                population,
            });
        }
        population = population.next_generation(elites, params, rng)?;
        iteration += 1;
    }
}
