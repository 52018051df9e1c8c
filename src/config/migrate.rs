use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;
use tracing::info;

/// Keys every config file is expected to carry.
const KNOWN_KEYS: [&str; 6] = [
    "alert_threshold",
    "pallet_capacity",
    "shifts",
    "csv_quoting",
    "export_dir",
    "data_file",
];

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    if content.trim().is_empty() {
        return Ok(Mapping::new());
    }

    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} does not contain a YAML mapping",
            path.display()
        ))),
    }
}

/// List the known keys that are absent from the file.
pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    let map = read_mapping(path)?;
    Ok(KNOWN_KEYS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(*k))
        .collect())
}

/// Add every missing key with its default value.
/// Existing values and unknown keys are left untouched.
///   Returns the list of keys that were added (empty → file unchanged).
pub fn migrate_config(path: &Path) -> AppResult<Vec<String>> {
    let mut map = read_mapping(path)?;

    let defaults = match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => m,
        _ => return Err(AppError::Other("default config is not a mapping".into())),
    };

    let mut added = Vec::new();
    for key in KNOWN_KEYS {
        if !map.contains_key(key)
            && let Some(v) = defaults.get(key)
        {
            map.insert(Value::String(key.to_string()), v.clone());
            added.push(key.to_string());
        }
    }

    if !added.is_empty() {
        let serialized = serde_yaml::to_string(&Value::Mapping(map))?;
        fs::write(path, serialized).map_err(|_| AppError::ConfigSave)?;
        info!(path = %path.display(), keys = ?added, "config migrated");
    }

    Ok(added)
}
