use anyhow::Result;
use clap::Parser;

use ot_clean::cli::Cli;
use ot_clean::commands;
use ot_clean::config::Config;
use ot_clean::mode::Mode;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Unknown mode flags abort before anything is touched
    let mode = Mode::parse(&cli.flags)?;

    init_logging(mode.verbose(), cli.quiet);

    let config = Config::load(cli.config.as_deref())?;

    tracing::debug!(?config, "Loaded configuration");
    tracing::debug!(?mode, "Starting clean");

    commands::clean::run(&cli, mode, &config)
}

fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ot_clean={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}
