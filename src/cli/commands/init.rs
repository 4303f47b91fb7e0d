use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use tracing::info as log_info;

/// Handle the `init` command
///
/// Creates the config directory with its `logs/` folder and writes a
/// default `rgiras.conf`. An existing file is kept unless `--force`.
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Init { force } = &cli.command {
        let written = Config::init_all(cli.home.as_deref(), *force)?;
        let cfg = Config::load(cli.home.as_deref())?;
        let path = cfg.config_file();

        info("Initializing rgiras…");
        println!("📄 Config file : {}", path.display());
        println!("🗂️  Log folder  : {}", cfg.log_dir().display());

        if written {
            log_info!(path = %path.display(), "configuration written");
            success(format!("Configuration written to {}", path.display()));
        } else {
            warning("Configuration file already exists; use --force to overwrite it.");
        }

        info(format!("Backend: {}", cfg.api_base()));
        if cfg.places_key().is_none() {
            info("Places search disabled until places_api_key is set.");
        }
    }
    Ok(())
}
