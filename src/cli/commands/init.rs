use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Writes a configuration file with every key set to its default.
/// An existing file is kept unless `--force` is given.
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Init { force } = &cli.command {
        let path = crate::config_path(cli);

        if path.exists() && !*force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        info("Initializing prodwatch…");
        Config::default().save(&path)?;
        success(format!("Config file: {}", path.display()));
    }
    Ok(())
}
