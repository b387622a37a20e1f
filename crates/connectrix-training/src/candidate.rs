//! Candidates: heuristic players tracked across generations.

use connectrix_engine::{Outcome, Piece};
use connectrix_evaluator::{heuristic_player::HeuristicPlayer, weights::Weights};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::params::{EvolutionParameters, ParameterError};

/// Result of one game from a candidate's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// Reads `outcome` from the side of the player holding `piece`.
    #[must_use]
    pub fn for_piece(outcome: Outcome, piece: Piece) -> Self {
        match outcome {
            Outcome::Winner(winner) if winner == piece => Self::Win,
            Outcome::Winner(_) => Self::Loss,
            Outcome::Draw => Self::Draw,
        }
    }
}

/// Results accumulated over every game a candidate has played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scores {
    pub highest_game_score: i64,
    pub number_of_wins: u64,
    pub number_of_loses: u64,
}

/// A heuristic player with its evolutionary metadata.
///
/// Serialized as
///
/// ```json
/// {
///   "id": 3,
///   "generation": 1,
///   "characteristics": { "scoreConnectTwo": 5, ..., "scoreGivingConnectFour": -12 },
///   "scores": { "highestGameScore": 40, "numberOfWins": 2, "numberOfLoses": 1 }
/// }
/// ```
///
/// `scores` is absent for a candidate that has never played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: u64,
    pub generation: u64,
    #[serde(rename = "characteristics")]
    pub weights: Weights,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scores: Option<Scores>,
    #[serde(skip)]
    last_game_score: i64,
}

impl Candidate {
    #[must_use]
    pub fn new(id: u64, generation: u64, weights: Weights) -> Self {
        Self {
            id,
            generation,
            weights,
            scores: None,
            last_game_score: 0,
        }
    }

    /// Creates a candidate with weights drawn from `params`.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::MissingScoreType`] if a weight has no bounds.
    pub fn random<R>(
        params: &EvolutionParameters,
        id: u64,
        generation: u64,
        rng: &mut R,
    ) -> Result<Self, ParameterError>
    where
        R: Rng + ?Sized,
    {
        Ok(Self::new(id, generation, params.random_weights(rng)?))
    }

    /// Builds the player that plays with this candidate's weights.
    #[must_use]
    pub fn player(&self, piece: Piece) -> HeuristicPlayer {
        HeuristicPlayer::new(piece, self.weights)
    }

    /// Board score of the current round; the sum over the round's games.
    #[must_use]
    pub fn last_game_score(&self) -> i64 {
        self.last_game_score
    }

    pub(crate) fn start_round(&mut self) {
        self.last_game_score = 0;
    }

    /// Adds one finished game to the round score and the prior-run scores.
    pub fn record_game(&mut self, board_score: i64, result: GameResult) {
        self.last_game_score = self.last_game_score.saturating_add(board_score);

        let scores = self.scores.get_or_insert(Scores {
            highest_game_score: board_score,
            ..Scores::default()
        });
        scores.highest_game_score = scores.highest_game_score.max(board_score);
        match result {
            GameResult::Win => scores.number_of_wins += 1,
            GameResult::Loss => scores.number_of_loses += 1,
            GameResult::Draw => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights() -> Weights {
        Weights {
            score_connect_two: 5,
            score_connect_three: 9,
            score_connect_four: 30,
            score_giving_connect_two: -4,
            score_giving_connect_three: -8,
            score_giving_connect_four: -12,
        }
    }

    #[test]
    fn test_game_result_for_piece() {
        let won = Outcome::Winner(Piece::PLAYER_TWO);
        assert_eq!(GameResult::for_piece(won, Piece::PLAYER_TWO), GameResult::Win);
        assert_eq!(GameResult::for_piece(won, Piece::PLAYER_ONE), GameResult::Loss);
        assert!(GameResult::for_piece(Outcome::Draw, Piece::PLAYER_ONE).is_draw());
    }

    #[test]
    fn test_record_game_tracks_scores() {
        let mut candidate = Candidate::new(0, 1, weights());
        assert_eq!(candidate.scores, None);

        candidate.record_game(-7, GameResult::Loss);
        assert_eq!(candidate.last_game_score(), -7);
        assert_eq!(
            candidate.scores,
            Some(Scores {
                highest_game_score: -7,
                number_of_wins: 0,
                number_of_loses: 1
            })
        );

        candidate.record_game(12, GameResult::Win);
        candidate.record_game(3, GameResult::Draw);
        assert_eq!(candidate.last_game_score(), 8);
        let scores = candidate.scores.unwrap();
        assert_eq!(scores.highest_game_score, 12);
        assert_eq!(scores.number_of_wins, 1);
        assert_eq!(scores.number_of_loses, 1);

        candidate.start_round();
        assert_eq!(candidate.last_game_score(), 0);
        assert_eq!(candidate.scores, Some(scores));
    }

    #[test]
    fn test_json_shape() {
        let mut candidate = Candidate::new(3, 2, weights());
        let json = serde_json::to_value(&candidate).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["generation"], 2);
        assert_eq!(json["characteristics"]["scoreGivingConnectFour"], -12);
        assert!(json.get("scores").is_none());
        assert!(json.get("lastGameScore").is_none());

        candidate.record_game(40, GameResult::Win);
        let json = serde_json::to_value(&candidate).unwrap();
        assert_eq!(json["scores"]["highestGameScore"], 40);
        assert_eq!(json["scores"]["numberOfWins"], 1);
        assert_eq!(json["scores"]["numberOfLoses"], 0);
    }

    #[test]
    fn test_parse_candidate_file() {
        let json = r#"{
            "id": 11,
            "generation": 4,
            "characteristics": {
                "scoreConnectTwo": 5,
                "scoreConnectThree": 9,
                "scoreConnectFour": 30,
                "scoreGivingConnectTwo": -4,
                "scoreGivingConnectThree": -8,
                "scoreGivingConnectFour": -12
            },
            "scores": { "highestGameScore": 20, "numberOfWins": 3, "numberOfLoses": 2 }
        }"#;
        let candidate: Candidate = serde_json::from_str(json).unwrap();
        assert_eq!(candidate.id, 11);
        assert_eq!(candidate.generation, 4);
        assert_eq!(candidate.weights, weights());
        assert_eq!(candidate.scores.map(|s| s.number_of_wins), Some(3));
        assert_eq!(candidate.last_game_score(), 0);

        let player = candidate.player(Piece::PLAYER_TWO);
        assert_eq!(player.weights(), &weights());
    }
}
