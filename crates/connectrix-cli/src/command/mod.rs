use clap::{ArgAction, Parser, Subcommand};

use crate::logging;

use self::{evolve::EvolveArg, play::PlayArg};

mod evolve;
mod play;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Log more detail (repeat for more)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// Log less detail (repeat for less)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    quiet: u8,
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Evolve heuristic players with a genetic algorithm
    Evolve(#[clap(flatten)] EvolveArg),
    /// Play one game and print the board after every move
    Play(#[clap(flatten)] PlayArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    logging::init(logging::level(args.verbose, args.quiet))?;
    match args.mode {
        Mode::Evolve(arg) => evolve::run(&arg)?,
        Mode::Play(arg) => play::run(&arg)?,
    }
    Ok(())
}
