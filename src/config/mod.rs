use crate::errors::{AppError, AppResult};
use crate::models::shift::Shift;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_alert_threshold")]
    pub alert_threshold: u32,
    #[serde(default = "default_pallet_capacity")]
    pub pallet_capacity: u32,
    #[serde(default = "default_shifts")]
    pub shifts: Vec<String>,
    #[serde(default)]
    pub csv_quoting: bool,
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
    #[serde(default)]
    pub data_file: Option<String>,
}

pub(crate) fn default_alert_threshold() -> u32 {
    3
}
pub(crate) fn default_pallet_capacity() -> u32 {
    49
}
pub(crate) fn default_shifts() -> Vec<String> {
    Shift::ALL.iter().map(|s| s.code().to_string()).collect()
}
pub(crate) fn default_export_dir() -> String {
    ".".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alert_threshold: default_alert_threshold(),
            pallet_capacity: default_pallet_capacity(),
            shifts: default_shifts(),
            csv_quoting: false,
            export_dir: default_export_dir(),
            data_file: None,
        }
    }
}

/// Settings the engine functions take explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub alert_threshold: u32,
    pub pallet_capacity: u32,
    /// Configured shifts, deduplicated and in A..F order.
    pub shift_set: Vec<Shift>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            alert_threshold: default_alert_threshold(),
            pallet_capacity: default_pallet_capacity(),
            shift_set: Shift::ALL.to_vec(),
        }
    }
}

impl EngineConfig {
    pub fn new(alert_threshold: u32, pallet_capacity: u32, shifts: &[Shift]) -> AppResult<Self> {
        if pallet_capacity == 0 {
            return Err(AppError::Config(
                "pallet_capacity must be greater than zero".to_string(),
            ));
        }
        if shifts.is_empty() {
            return Err(AppError::Config("at least one shift must be configured".to_string()));
        }

        let mut shift_set = shifts.to_vec();
        shift_set.sort();
        shift_set.dedup();

        Ok(Self {
            alert_threshold,
            pallet_capacity,
            shift_set,
        })
    }

    pub fn has_shift(&self, shift: Shift) -> bool {
        self.shift_set.contains(&shift)
    }

    /// Resolve a shift symbol against the configured set.
    pub fn resolve_shift(&self, code: &str) -> AppResult<Shift> {
        let shift = Shift::from_code(code)?;
        if self.has_shift(shift) {
            Ok(shift)
        } else {
            Err(AppError::UnknownShift(format!(
                "{code} (not in configured shifts)"
            )))
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("prodwatch")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("prodwatch.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;

        debug!(path = %path.display(), "configuration loaded");
        Ok(cfg)
    }

    /// Write the configuration as YAML, creating parent directories.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|_| AppError::ConfigSave)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Dataset file to read, if one is configured.
    pub fn data_path(&self) -> Option<PathBuf> {
        self.data_file
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
    }

    /// Build the engine settings, validating shift symbols and capacity.
    pub fn engine(&self) -> AppResult<EngineConfig> {
        let shifts = self
            .shifts
            .iter()
            .map(|s| Shift::from_code(s))
            .collect::<AppResult<Vec<_>>>()?;
        EngineConfig::new(self.alert_threshold, self.pallet_capacity, &shifts)
    }
}
