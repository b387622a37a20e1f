//! Evolution parameters loaded from JSON.
//!
//! ```json
//! {
//!   "populationSize": 40,
//!   "iterations": 50,
//!   "roundEvaluation": "SingleMatch",
//!   "parentSelectionPercentage": 10,
//!   "childMutationPercentage": 10,
//!   "elitismPercentage": 5,
//!   "elitePoolPercentage": 20,
//!   "board": { "columns": 7, "rows": 6 },
//!   "candidateScoreParameters": [
//!     { "scoreType": "ScoreConnectTwo", "min": 2, "max": 20 },
//!     ...
//!   ]
//! }
//! ```
//!
//! `elitePoolPercentage` and `board` are optional. Bounds may be given in either order; a pair
//! with `min > max` is read as `[max, min)`.

use connectrix_engine::{Board, CONNECT_LENGTH};
use connectrix_evaluator::weights::Weights;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One of the six heuristic weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreType {
    ScoreConnectTwo,
    ScoreConnectThree,
    ScoreConnectFour,
    GiveConnectTwo,
    GiveConnectThree,
    GiveConnectFour,
}

impl ScoreType {
    pub const ALL: [Self; 6] = [
        Self::ScoreConnectTwo,
        Self::ScoreConnectThree,
        Self::ScoreConnectFour,
        Self::GiveConnectTwo,
        Self::GiveConnectThree,
        Self::GiveConnectFour,
    ];

    fn weight_mut(self, weights: &mut Weights) -> &mut i64 {
        match self {
            Self::ScoreConnectTwo => &mut weights.score_connect_two,
            Self::ScoreConnectThree => &mut weights.score_connect_three,
            Self::ScoreConnectFour => &mut weights.score_connect_four,
            Self::GiveConnectTwo => &mut weights.score_giving_connect_two,
            Self::GiveConnectThree => &mut weights.score_giving_connect_three,
            Self::GiveConnectFour => &mut weights.score_giving_connect_four,
        }
    }
}

/// Bounds of one weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreParameter {
    pub score_type: ScoreType,
    pub min: i64,
    pub max: i64,
}

impl ScoreParameter {
    /// Returns the bounds as `(low, high)` with `low <= high`.
    #[must_use]
    pub fn bounds(&self) -> (i64, i64) {
        (self.min.min(self.max), self.min.max(self.max))
    }

    /// Draws a weight uniformly from `[low, high)`; equal bounds always yield that value.
    pub fn sample<R>(&self, rng: &mut R) -> i64
    where
        R: Rng + ?Sized,
    {
        let (low, high) = self.bounds();
        if low == high {
            low
        } else {
            rng.random_range(low..high)
        }
    }
}

/// How the candidates of a generation are matched against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RoundEvaluation {
    /// Shuffled pairs, one game each.
    #[default]
    SingleMatch,
    /// Shuffled pairs, two games each with roles swapped.
    DoubleMatch,
    /// Every candidate plays every other candidate once.
    PlayEveryone,
    /// Accepted by the parser, rejected by [`EvolutionParameters::validate`].
    Tournament,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSize {
    pub columns: usize,
    pub rows: usize,
}

impl Default for BoardSize {
    fn default() -> Self {
        Self {
            columns: Board::STANDARD_COLUMNS,
            rows: Board::STANDARD_ROWS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParameterError {
    #[display("population size must be at least 2, got {size}")]
    PopulationTooSmall { size: usize },
    #[display("iterations must be at least 1")]
    NoIterations,
    #[display("{name} must be between 0 and 100, got {value}")]
    PercentageOutOfRange { name: &'static str, value: usize },
    #[display("elite pool ({pool}%) must not be smaller than the elite selection ({selection}%)")]
    PoolSmallerThanSelection { pool: usize, selection: usize },
    #[display("board must be at least {min}x{min}, got {columns}x{rows}")]
    BoardTooSmall {
        columns: usize,
        rows: usize,
        min: usize,
    },
    #[display("no bounds given for {score_type:?}")]
    MissingScoreType { score_type: ScoreType },
    #[display("bounds for {score_type:?} given more than once")]
    DuplicateScoreType { score_type: ScoreType },
    #[display("round evaluation {round_evaluation:?} is not supported")]
    UnsupportedRoundEvaluation { round_evaluation: RoundEvaluation },
}

fn default_elite_pool_percentage() -> usize {
    20
}

/// Parameters of an evolution run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvolutionParameters {
    pub population_size: usize,
    pub iterations: usize,
    #[serde(default)]
    pub round_evaluation: RoundEvaluation,
    /// Reserved for a crossover operator; validated but unused.
    pub parent_selection_percentage: usize,
    /// Reserved for a mutation operator; validated but unused.
    pub child_mutation_percentage: usize,
    /// Share of the population carried over to the next generation.
    pub elitism_percentage: usize,
    /// Share of the population, ranked by score, that elites are drawn from.
    #[serde(default = "default_elite_pool_percentage")]
    pub elite_pool_percentage: usize,
    #[serde(default)]
    pub board: BoardSize,
    pub candidate_score_parameters: Vec<ScoreParameter>,
}

impl EvolutionParameters {
    /// Checks the parameters before a run.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParameterError`] found.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.population_size < 2 {
            return Err(ParameterError::PopulationTooSmall {
                size: self.population_size,
            });
        }
        if self.iterations == 0 {
            return Err(ParameterError::NoIterations);
        }
        for (name, value) in [
            ("parentSelectionPercentage", self.parent_selection_percentage),
            ("childMutationPercentage", self.child_mutation_percentage),
            ("elitismPercentage", self.elitism_percentage),
            ("elitePoolPercentage", self.elite_pool_percentage),
        ] {
            if value > 100 {
                return Err(ParameterError::PercentageOutOfRange { name, value });
            }
        }
        if self.elite_pool_percentage < self.elitism_percentage {
            return Err(ParameterError::PoolSmallerThanSelection {
                pool: self.elite_pool_percentage,
                selection: self.elitism_percentage,
            });
        }
        let BoardSize { columns, rows } = self.board;
        if columns < CONNECT_LENGTH || rows < CONNECT_LENGTH {
            return Err(ParameterError::BoardTooSmall {
                columns,
                rows,
                min: CONNECT_LENGTH,
            });
        }
        for score_type in ScoreType::ALL {
            match self
                .candidate_score_parameters
                .iter()
                .filter(|p| p.score_type == score_type)
                .count()
            {
                0 => return Err(ParameterError::MissingScoreType { score_type }),
                1 => {}
                _ => return Err(ParameterError::DuplicateScoreType { score_type }),
            }
        }
        if self.round_evaluation == RoundEvaluation::Tournament {
            return Err(ParameterError::UnsupportedRoundEvaluation {
                round_evaluation: self.round_evaluation,
            });
        }
        Ok(())
    }

    /// Population size rounded up to an even number so every candidate has a partner.
    #[must_use]
    pub fn even_population_size(&self) -> usize {
        self.population_size + self.population_size % 2
    }

    /// Number of elites carried over, as a rounded share of the population.
    #[must_use]
    pub fn elite_selection_size(&self) -> usize {
        percentage_of(self.elitism_percentage, self.even_population_size())
    }

    /// Number of top-ranked candidates elites are drawn from.
    #[must_use]
    pub fn elite_pool_size(&self) -> usize {
        percentage_of(self.elite_pool_percentage, self.even_population_size())
    }

    #[must_use]
    pub fn score_parameter(&self, score_type: ScoreType) -> Option<&ScoreParameter> {
        self.candidate_score_parameters
            .iter()
            .find(|p| p.score_type == score_type)
    }

    /// Creates an empty board of the configured size.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::BoardTooSmall`] for a board smaller than 4×4.
    pub fn new_board(&self) -> Result<Board, ParameterError> {
        let BoardSize { columns, rows } = self.board;
        if columns < CONNECT_LENGTH || rows < CONNECT_LENGTH {
            return Err(ParameterError::BoardTooSmall {
                columns,
                rows,
                min: CONNECT_LENGTH,
            });
        }
        Ok(Board::new(columns, rows))
    }

    /// Draws every weight from its bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::MissingScoreType`] if a weight has no bounds.
    pub fn random_weights<R>(&self, rng: &mut R) -> Result<Weights, ParameterError>
    where
        R: Rng + ?Sized,
    {
        let mut weights = Weights::default();
        for score_type in ScoreType::ALL {
            let parameter = self
                .score_parameter(score_type)
                .ok_or(ParameterError::MissingScoreType { score_type })?;
            *score_type.weight_mut(&mut weights) = parameter.sample(rng);
        }
        Ok(weights)
    }
}

fn percentage_of(percentage: usize, total: usize) -> usize {
    (percentage * total + 50) / 100
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    const SAMPLE: &str = include_str!("../../../params/evolution_parameters.json");

    fn sample() -> EvolutionParameters {
        serde_json::from_str(SAMPLE).unwrap()
    }

    #[test]
    fn test_parse_sample_file() {
        let params = sample();
        assert_eq!(params.population_size, 40);
        assert_eq!(params.iterations, 50);
        assert_eq!(params.round_evaluation, RoundEvaluation::SingleMatch);
        assert_eq!(params.parent_selection_percentage, 10);
        assert_eq!(params.child_mutation_percentage, 10);
        assert_eq!(params.elitism_percentage, 5);
        assert_eq!(params.elite_pool_percentage, 20);
        assert_eq!(params.board, BoardSize::default());
        let give_two = params.score_parameter(ScoreType::GiveConnectTwo).unwrap();
        assert_eq!((give_two.min, give_two.max), (-2, -20));
        assert_eq!(give_two.bounds(), (-20, -2));
        params.validate().unwrap();
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{
            "populationSize": 4,
            "iterations": 1,
            "roundEvaluation": "DoubleMatch",
            "parentSelectionPercentage": 0,
            "childMutationPercentage": 0,
            "elitismPercentage": 50,
            "candidateScoreParameters": []
        }"#;
        let params: EvolutionParameters = serde_json::from_str(json).unwrap();
        assert_eq!(params.elite_pool_percentage, 20);
        assert_eq!(params.board, BoardSize { columns: 7, rows: 6 });
        assert_eq!(params.round_evaluation, RoundEvaluation::DoubleMatch);
        assert_eq!(
            params.validate(),
            Err(ParameterError::PoolSmallerThanSelection {
                pool: 20,
                selection: 50
            })
        );
    }

    #[test]
    fn test_validation_failures() {
        let mut params = sample();
        params.population_size = 1;
        assert_eq!(
            params.validate(),
            Err(ParameterError::PopulationTooSmall { size: 1 })
        );

        let mut params = sample();
        params.iterations = 0;
        assert_eq!(params.validate(), Err(ParameterError::NoIterations));

        let mut params = sample();
        params.child_mutation_percentage = 101;
        assert!(matches!(
            params.validate(),
            Err(ParameterError::PercentageOutOfRange {
                name: "childMutationPercentage",
                value: 101
            })
        ));

        let mut params = sample();
        params.board = BoardSize { columns: 3, rows: 6 };
        assert!(matches!(
            params.validate(),
            Err(ParameterError::BoardTooSmall { .. })
        ));
        assert!(params.new_board().is_err());

        let mut params = sample();
        params
            .candidate_score_parameters
            .retain(|p| p.score_type != ScoreType::ScoreConnectFour);
        assert_eq!(
            params.validate(),
            Err(ParameterError::MissingScoreType {
                score_type: ScoreType::ScoreConnectFour
            })
        );

        let mut params = sample();
        let duplicate = params.candidate_score_parameters[0];
        params.candidate_score_parameters.push(duplicate);
        assert_eq!(
            params.validate(),
            Err(ParameterError::DuplicateScoreType {
                score_type: duplicate.score_type
            })
        );

        let mut params = sample();
        params.round_evaluation = RoundEvaluation::Tournament;
        assert!(matches!(
            params.validate(),
            Err(ParameterError::UnsupportedRoundEvaluation { .. })
        ));
    }

    #[test]
    fn test_population_and_elite_sizes() {
        let mut params = sample();
        params.population_size = 41;
        assert_eq!(params.even_population_size(), 42);
        // 5% and 20% of 42, rounded
        assert_eq!(params.elite_selection_size(), 2);
        assert_eq!(params.elite_pool_size(), 8);

        params.population_size = 40;
        assert_eq!(params.elite_selection_size(), 2);
        assert_eq!(params.elite_pool_size(), 8);
    }

    #[test]
    fn test_random_weights_within_bounds() {
        let params = sample();
        let mut rng = Pcg32::seed_from_u64(9);
        for _ in 0..100 {
            let weights = params.random_weights(&mut rng).unwrap();
            assert!((2..20).contains(&weights.score_connect_two));
            assert!((3..30).contains(&weights.score_connect_three));
            assert!((4..40).contains(&weights.score_connect_four));
            assert!((-20..-2).contains(&weights.score_giving_connect_two));
            assert!((-30..-3).contains(&weights.score_giving_connect_three));
            assert!((-40..-4).contains(&weights.score_giving_connect_four));
        }
    }

    #[test]
    fn test_equal_bounds_yield_that_value() {
        let parameter = ScoreParameter {
            score_type: ScoreType::ScoreConnectTwo,
            min: 7,
            max: 7,
        };
        let mut rng = Pcg32::seed_from_u64(0);
        assert_eq!(parameter.sample(&mut rng), 7);
    }
}
