use std::path::PathBuf;

use anyhow::Context as _;
use chrono::Utc;
use connectrix_training::genetic;

use crate::{
    model::evolution_report::EvolutionReport,
    util::{self, Output},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct EvolveArg {
    /// Evolution parameters file (JSON format)
    #[arg(long, default_value = "params/evolution_parameters.json")]
    params: PathBuf,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
}

pub(crate) fn run(arg: &EvolveArg) -> anyhow::Result<()> {
    let EvolveArg {
        params,
        output,
        seed,
    } = arg;

    let parameters = util::read_params_file(params)?;
    tracing::info!(
        path = %params.display(),
        population_size = parameters.even_population_size(),
        iterations = parameters.iterations,
        round_evaluation = ?parameters.round_evaluation,
        "evolution parameters loaded"
    );

    let mut rng = util::rng_from_seed(*seed);
    let evolution = genetic::evolve(&parameters, &mut rng).context("Evolution failed")?;

    for elite in &evolution.elites {
        tracing::info!(
            id = elite.id,
            generation = elite.generation,
            round_score = elite.last_game_score(),
            weights = ?elite.weights,
            "elite selected"
        );
    }

    let report = EvolutionReport {
        trained_at: Utc::now(),
        generation: evolution.generation,
        elites: evolution.elites,
    };
    Output::save_json(&report, output.clone())?;

    tracing::info!(
        generation = report.generation,
        elites = report.elites.len(),
        output = %output
            .as_ref()
            .map_or_else(|| "stdout".to_owned(), |path| path.display().to_string()),
        "evolution report saved"
    );
    Ok(())
}
