use crate::cli::parser::Commands;
use crate::config::{Config, migrate};
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success, warning};
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate: run_migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = cfg.config_file();

        if !(*print_config || *check || *run_migrate || *edit_config) {
            info(format!("Configuration file: {}", path.display()));
            info("Use --print, --check, --migrate or --edit.");
            return Ok(());
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            let mut shown = cfg.clone();
            if shown.places_api_key.is_some() {
                shown.places_api_key = Some("****".to_string());
            }
            println!("{}", serde_yaml::to_string(&shown)?);
        }

        // ---- CHECK / MIGRATE ----
        if (*check || *run_migrate) && !path.exists() {
            warning(format!(
                "No configuration file at {}; run 'rgiras init' first.",
                path.display()
            ));
        } else if *run_migrate {
            let added = migrate::add_missing_fields(&path)?;
            if added.is_empty() {
                success("Configuration is up to date.");
            } else {
                success(format!("Added missing fields: {}", added.join(", ")));
            }
        } else if *check {
            let missing = migrate::missing_fields(&path)?;
            if missing.is_empty() {
                success("Configuration is complete.");
            } else {
                warning(format!("Missing fields: {}", missing.join(", ")));
                info("Run 'rgiras config --migrate' to add them with default values.");
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            match Command::new(&editor_to_use).arg(&path).status() {
                Ok(s) if s.success() => {
                    success(format!(
                        "Configuration file edited successfully using '{editor_to_use}'"
                    ));
                }
                _ => {
                    warning(format!(
                        "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
                    ));

                    match Command::new(&default_editor).arg(&path).status() {
                        Ok(s) if s.success() => success(format!(
                            "Configuration file edited successfully using fallback '{default_editor}'"
                        )),
                        _ => error(format!(
                            "Failed to edit configuration file using fallback '{default_editor}'"
                        )),
                    }
                }
            }
        }
    }

    Ok(())
}
