use chrono::{DateTime, Utc};
use connectrix_training::candidate::Candidate;
use serde::{Deserialize, Serialize};

/// Result file of `connectrix evolve`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvolutionReport {
    pub trained_at: DateTime<Utc>,
    pub generation: u64,
    pub elites: Vec<Candidate>,
}

#[cfg(test)]
mod tests {
    use connectrix_evaluator::weights::Weights;

    use super::*;

    #[test]
    fn test_report_json_shape() {
        let report = EvolutionReport {
            trained_at: DateTime::from_timestamp(0, 0).unwrap(),
            generation: 3,
            elites: vec![Candidate::new(5, 2, Weights::default())],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["trainedAt"], "1970-01-01T00:00:00Z");
        assert_eq!(json["generation"], 3);
        assert_eq!(json["elites"][0]["id"], 5);
        assert_eq!(json["elites"][0]["characteristics"]["scoreConnectTwo"], 0);
    }
}
