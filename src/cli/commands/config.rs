use crate::cli::parser::{Cli, Commands};
use crate::config::{Config, migrate};
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
        check,
        migrate: run_migrate,
    } = &cli.command
    {
        // Path del file di configurazione
        let path = crate::config_path(cli);

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            if !path.exists() {
                warning(format!("{} does not exist; defaults are in use.", path.display()));
            } else {
                let missing = migrate::missing_keys(&path)?;
                if missing.is_empty() {
                    success("Configuration file is complete.");
                } else {
                    warning(format!("Missing keys: {}", missing.join(", ")));
                }
            }
        }

        // ---- MIGRATE CONFIG ----
        if *run_migrate {
            if !path.exists() {
                warning(format!(
                    "{} does not exist; run `prodwatch init` first.",
                    path.display()
                ));
            } else {
                let added = migrate::migrate_config(&path)?;
                if added.is_empty() {
                    info("No migration needed.");
                } else {
                    success(format!("Added keys: {}", added.join(", ")));
                }
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            edit(&path, editor.as_deref());
        }
    }

    Ok(())
}

fn edit(path: &Path, requested: Option<&str>) {
    // Default editor basato sulla piattaforma
    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor_to_use = requested.map(str::to_string).unwrap_or_else(|| default_editor.clone());

    match Command::new(&editor_to_use).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!(
                "Configuration file edited successfully using '{editor_to_use}'"
            ));
        }
        _ => {
            warning(format!(
                "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
            ));

            match Command::new(&default_editor).arg(path).status() {
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
