//! Heuristic weights.
//!
//! A heuristic player scores a board as a linear combination of run counts:
//!
//! ```text
//! score = c₂·own₂ + c₃·own₃ + c₄·own₄ + g₂·opp₂ + g₃·opp₃ + g₄·opp₄
//! ```
//!
//! where `ownₙ`/`oppₙ` are the runs of length `n` of the player's and the opponent's piece, the
//! `c` weights reward connecting and the `g` weights (usually negative) penalise giving the
//! opponent runs.

use serde::{Deserialize, Serialize};

use crate::board_analysis::RunCounts;

/// The six signed weights of a heuristic player.
///
/// Serialized with camel-case keys (`scoreConnectTwo`, ..., `scoreGivingConnectFour`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weights {
    pub score_connect_two: i64,
    pub score_connect_three: i64,
    pub score_connect_four: i64,
    pub score_giving_connect_two: i64,
    pub score_giving_connect_three: i64,
    pub score_giving_connect_four: i64,
}

impl Weights {
    /// Weighted sum of the player's own runs.
    #[must_use]
    pub fn connect_score(&self, counts: &RunCounts) -> i64 {
        weighted(self.score_connect_two, counts.twos())
            .saturating_add(weighted(self.score_connect_three, counts.threes()))
            .saturating_add(weighted(self.score_connect_four, counts.fours()))
    }

    /// Weighted sum of the opponent's runs.
    #[must_use]
    pub fn giving_score(&self, counts: &RunCounts) -> i64 {
        weighted(self.score_giving_connect_two, counts.twos())
            .saturating_add(weighted(self.score_giving_connect_three, counts.threes()))
            .saturating_add(weighted(self.score_giving_connect_four, counts.fours()))
    }
}

fn weighted(weight: i64, count: usize) -> i64 {
    weight.saturating_mul(i64::try_from(count).unwrap_or(i64::MAX))
}

#[cfg(test)]
mod tests {
    use connectrix_engine::{Board, Move, Piece};

    use super::*;

    fn sample() -> Weights {
        Weights {
            score_connect_two: 2,
            score_connect_three: 10,
            score_connect_four: 100,
            score_giving_connect_two: -3,
            score_giving_connect_three: -30,
            score_giving_connect_four: -300,
        }
    }

    #[test]
    fn test_connect_and_giving_scores() {
        let mut board = Board::standard();
        for column in 0..3 {
            board.place(Move::new(Piece::PLAYER_ONE, column)).unwrap();
        }
        board.place(Move::new(Piece::PLAYER_ONE, 0)).unwrap();
        let counts = RunCounts::of(Piece::PLAYER_ONE, &board);
        // horizontal three, vertical pair in column 0, `\` pair (0,1)-(1,0)
        assert_eq!(counts.threes(), 1);
        assert_eq!(counts.twos(), 2);
        assert_eq!(sample().connect_score(&counts), 14);
        assert_eq!(sample().giving_score(&counts), -36);
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["scoreConnectTwo"], 2);
        assert_eq!(json["scoreGivingConnectFour"], -300);

        let parsed: Weights = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, sample());
    }
}
