//! prodwatch library root.
//! Exposes the CLI parser, the high-level run() function and the engine modules
//! (models, core metrics/filters, export serializers).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::PathBuf;

/// Config file in use: `--config` if given, platform default otherwise.
pub fn config_path(cli: &Cli) -> PathBuf {
    cli.config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file)
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Status { .. } => cli::commands::status::handle(&cli.command, cfg),
        Commands::History { .. } => cli::commands::history::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    logging::init();

    let cli = Cli::parse();

    // load config once; `init` must work even when the current file is broken
    let mut cfg = match &cli.command {
        Commands::Init { .. } => Config::default(),
        _ => Config::load(&config_path(&cli))?,
    };

    // --data overrides the configured dataset
    if let Some(data) = &cli.data {
        cfg.data_file = Some(data.clone());
    }

    dispatch(&cli, &cfg)
}
