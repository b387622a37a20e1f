//! Evolution of heuristic Connect Four players.
//!
//! # How Training Works
//!
//! 1. **Parameters** - [`params::EvolutionParameters`] gives the population size, the number
//!    of rounds, the match mode, the elite shares and the bounds of each weight
//! 2. **Population** - candidates with weights drawn uniformly from those bounds
//! 3. **Matches** - candidates play each other with
//!    [`HeuristicPlayer`](connectrix_evaluator::heuristic_player::HeuristicPlayer)s built from
//!    their weights
//! 4. **Scoring** - each side scores the final board with its own weights
//! 5. **Selection** - elites are sampled from the best-scoring pool
//! 6. **Repeat** - elites plus fresh candidates form the next generation
//!
//! # Architecture
//!
//! ```text
//! genetic::evolve
//!     ↓ plays rounds of
//! connectrix_engine::Game
//!     ↓ between
//! HeuristicPlayer (connectrix-evaluator)
//!     ↓ built from
//! candidate::Candidate weights
//! ```
//!
//! # Example
//!
//! ```
//! use connectrix_training::{genetic, params::EvolutionParameters};
//! use rand::SeedableRng as _;
//!
//! let params: EvolutionParameters = serde_json::from_str(r#"{
//!     "populationSize": 4,
//!     "iterations": 2,
//!     "roundEvaluation": "SingleMatch",
//!     "parentSelectionPercentage": 0,
//!     "childMutationPercentage": 0,
//!     "elitismPercentage": 50,
//!     "elitePoolPercentage": 50,
//!     "candidateScoreParameters": [
//!         { "scoreType": "ScoreConnectTwo", "min": 1, "max": 5 },
//!         { "scoreType": "ScoreConnectThree", "min": 5, "max": 10 },
//!         { "scoreType": "ScoreConnectFour", "min": 50, "max": 100 },
//!         { "scoreType": "GiveConnectTwo", "min": -5, "max": -1 },
//!         { "scoreType": "GiveConnectThree", "min": -10, "max": -5 },
//!         { "scoreType": "GiveConnectFour", "min": -100, "max": -50 }
//!     ]
//! }"#).unwrap();
//!
//! let mut rng = rand_pcg::Pcg32::seed_from_u64(0);
//! let evolution = genetic::evolve(&params, &mut rng).unwrap();
//! assert_eq!(evolution.generation, 2);
//! assert_eq!(evolution.elites.len(), 2);
//! ```

pub mod candidate;
pub mod genetic;
pub mod params;
pub mod statistics;
