//! mc-ctl - restart a Minecraft server and verify it came back.
//!
//! # Examples
//!
//! ```bash
//! # Restart with the configured countdown, watching for "Done (...)!"
//! mc-ctl restart
//!
//! # Deploy a mod, then restart and wait for it to load
//! mc-ctl deploy ./examplemod-1.0.jar --restart
//!
//! # Player count and version
//! mc-ctl status
//! ```

mod app;
mod cli;
mod error;
mod logger;
mod shell;

#[cfg(test)]
mod tests;

use crate::{
    app::{App, Outcome},
    cli::{Cli, Commands},
    error::Result as CtlResult,
};

use mc_config::Config;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CtlResult<Outcome> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Relative log files live in the config directory
    let log_file = match config.logging.file {
        Some(ref file) => Some(Config::config_dir()?.join(PathBuf::from(file))),
        None => None,
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;

    info!("Starting mc-ctl v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let app = App::new(config);
    app.authorize(&cli.caller)?;

    match cli.command {
        Commands::Shell => shell::run(&app, &cli.caller).await,
        command => app.run(command, &cli.caller).await,
    }
}
