use super::history::HistoryEntry;
use super::record::ProductionRecord;
use super::seed;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Everything the monitor reads from upstream: live runs plus the archive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub records: Vec<ProductionRecord>,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

impl Dataset {
    pub fn seed() -> Self {
        Self {
            records: seed::records(),
            history: seed::history(),
        }
    }

    /// Load a JSON dataset file: `{ "records": [...], "history": [...] }`.
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Io(std::io::Error::new(
                e.kind(),
                format!("cannot read dataset {}: {e}", path.display()),
            ))
        })?;

        let dataset: Dataset = serde_json::from_str(&content)?;
        dataset.validate()?;

        debug!(
            path = %path.display(),
            records = dataset.records.len(),
            history = dataset.history.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    /// Resolve the data source: explicit file if given, seed data otherwise.
    pub fn resolve(path: Option<&Path>) -> AppResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::seed()),
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        let mut seen = std::collections::HashSet::new();
        for r in &self.records {
            r.validate()?;
            if !seen.insert(r.id) {
                return Err(AppError::InvalidRecord(format!("duplicate record id {}", r.id)));
            }
        }
        for e in &self.history {
            e.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_data_is_valid() {
        let d = Dataset::seed();
        assert_eq!(d.records.len(), 3);
        assert_eq!(d.history.len(), 3);
        d.validate().unwrap();
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut d = Dataset::seed();
        d.records[1].id = d.records[0].id;
        assert!(matches!(d.validate(), Err(AppError::InvalidRecord(_))));
    }

    #[test]
    fn unpadded_history_date_is_rejected_on_load() {
        let path = std::env::temp_dir().join("prodwatch_unpadded_history.json");
        fs::write(
            &path,
            r#"{"records":[],"history":[{"date":"2025-3-8","shift":"A","product":"X","weight":100,"target":10,"produced":5}]}"#,
        )
        .unwrap();

        assert!(matches!(
            Dataset::load(&path),
            Err(AppError::InvalidRecord(msg)) if msg.contains("2025-3-8")
        ));
        fs::remove_file(&path).ok();
    }
}
