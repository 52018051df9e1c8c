// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Make sure `path` can receive an export.
///
/// - missing parent directories are created
/// - file absent, or `force` → Ok
/// - file present without `force` → ask on stdin; anything but y/yes cancels
pub(crate) fn prepare_output(path: &Path, force: bool) -> AppResult<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
        && !dir.exists()
    {
        fs::create_dir_all(dir)?;
    }

    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));
    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => {
            info("Existing file will be overwritten.");
            Ok(())
        }
        _ => Err(AppError::Export(
            "export cancelled: existing file not overwritten".to_string(),
        )),
    }
}

/// Write the finished payload in one go.
pub(crate) fn write_payload(path: &Path, payload: &str) -> AppResult<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(payload.as_bytes())?;
    file.flush()?;
    Ok(())
}
