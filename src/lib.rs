//! batchsheet library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod sheet;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Preview { .. } => cli::commands::preview::handle(&cli.command, cfg),
        Commands::Copy { .. } => cli::commands::copy::handle(cli, cfg),
        Commands::Paste { .. } => cli::commands::paste::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load config once; --config overrides the standard location
    let cfg = Config::load(cli.config.as_deref())?;

    dispatch(&cli, &cfg)
}
