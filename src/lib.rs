//! rgiras library root.
//! Exposes the CLI parser, the high-level run() function and the modules
//! behind each command.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod places;
pub mod session;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Login { .. } | Commands::Logout | Commands::Whoami => {
            commands::auth::handle(&cli.command, cfg)
        }
        Commands::Dashboard { .. } => commands::dashboard::handle(&cli.command, cfg),
        Commands::Giras { .. } => commands::giras::handle(&cli.command, cfg),
        Commands::Gastos { .. } => commands::gastos::handle(&cli.command, cfg),
        Commands::Usuarios { .. } => commands::usuarios::handle(&cli.command, cfg),
        Commands::Sedes { .. } => commands::sedes::handle(&cli.command, cfg),
        Commands::Asistencia { .. } => commands::asistencia::handle(&cli.command, cfg),
        Commands::Incidencias { .. } => commands::incidencias::handle(&cli.command, cfg),
        Commands::Export { .. } => commands::export::handle(&cli.command, cfg),
        Commands::Distance { .. } => commands::distance::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once and handed to every command
    let mut cfg = Config::load(cli.home.as_deref())?;

    if let Some(url) = &cli.api_url {
        cfg.api_url = url.clone();
    }

    let _guard = logging::init(&cfg, cli.verbose);
    tracing::debug!(home = %cfg.home.display(), api = %cfg.api_base(), "starting");

    let result = dispatch(&cli, &cfg);
    if let Err(e) = &result {
        tracing::error!("command failed: {e}");
    }
    result
}
