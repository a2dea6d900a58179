//! timeledger library root.
//! Exposes the CLI parser, the report engine and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use models::action::EventAction;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
        Commands::Start { at, project } => {
            commands::event::handle(EventAction::Start, at.as_ref(), project.as_deref(), cfg)
        }
        Commands::Stop { at, project } => {
            commands::event::handle(EventAction::Stop, at.as_ref(), project.as_deref(), cfg)
        }
        Commands::Pause { .. } => commands::pause::handle(&cli.command, cfg),
        Commands::Del { .. } => commands::del::handle(&cli.command, cfg),
        Commands::Timeoff { .. } => commands::timeoff::handle(&cli.command, cfg),
        Commands::Day { .. } => commands::day::handle(&cli.command, cfg),
        Commands::Report { .. } => commands::report::handle(&cli.command, cfg),
        Commands::Year { .. } => commands::year::handle(&cli.command, cfg),
        Commands::Overtime { .. } => commands::overtime::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // init rewrites the config file, so a broken one must not block it
    if matches!(cli.command, Commands::Init) {
        return commands::init::handle(&cli);
    }

    let mut cfg = Config::load()?;
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
