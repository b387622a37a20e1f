use std::io;

use anyhow::Context as _;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Maps the `-v`/`-q` counts to a max level around the default `INFO`.
pub(crate) fn level(verbose: u8, quiet: u8) -> Level {
    match i16::from(verbose) - i16::from(quiet) {
        i16::MIN..=-2 => Level::ERROR,
        -1 => Level::WARN,
        0 => Level::INFO,
        1 => Level::DEBUG,
        2..=i16::MAX => Level::TRACE,
    }
}

/// Installs the global subscriber writing to stderr.
pub(crate) fn init(level: Level) -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install the log subscriber")?;
    Ok(())
}
