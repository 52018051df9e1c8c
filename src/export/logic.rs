// src/export/logic.rs

use crate::config::Config;
use crate::core::history_filter::filter_history;
use crate::errors::AppResult;
use crate::export::fs_utils::{prepare_output, write_payload};
use crate::export::{
    CsvMode, ExportFormat, ExportKind, export_file_name, notify_export_success, serialize_csv,
    serialize_history_csv, serialize_history_json, serialize_json,
};
use crate::models::dataset::Dataset;
use crate::models::history::{HistoryEntry, HistoryFilterCriteria};
use crate::models::shift::Shift;
use crate::ui::messages::{info, warning};
use chrono::NaiveDate;
use std::path::PathBuf;
use tracing::debug;

/// Parameters of a single export.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub format: ExportFormat,
    pub kind: ExportKind,
    /// Date and shift only name the file; they are not part of the payload.
    pub date: NaiveDate,
    pub shift: Shift,
    /// Applied to history exports only.
    pub criteria: HistoryFilterCriteria,
    pub dir: PathBuf,
    /// Explicit output path, overrides `dir` + generated name.
    pub file: Option<PathBuf>,
    pub force: bool,
}

impl ExportRequest {
    pub fn output_path(&self) -> PathBuf {
        match &self.file {
            Some(f) => f.clone(),
            None => {
                let date = self.date.format("%Y-%m-%d").to_string();
                self.dir
                    .join(export_file_name(self.kind, &date, self.shift, self.format))
            }
        }
    }
}

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Build the payload for `req` without touching the filesystem.
    pub fn render(dataset: &Dataset, cfg: &Config, req: &ExportRequest) -> AppResult<String> {
        let mode = CsvMode::from_quoting(cfg.csv_quoting);

        match req.kind {
            ExportKind::Production => match req.format {
                ExportFormat::Json => serialize_json(&dataset.records),
                ExportFormat::Csv => serialize_csv(&dataset.records, mode),
            },
            ExportKind::History => {
                let rows: Vec<HistoryEntry> =
                    filter_history(&dataset.history, &req.criteria).cloned().collect();
                debug!(
                    matched = rows.len(),
                    total = dataset.history.len(),
                    "history filtered for export"
                );
                match req.format {
                    ExportFormat::Json => serialize_history_json(&rows),
                    ExportFormat::Csv => serialize_history_csv(&rows, mode),
                }
            }
        }
    }

    /// Render and write the export. Returns the written path.
    pub fn export(dataset: &Dataset, cfg: &Config, req: &ExportRequest) -> AppResult<PathBuf> {
        // a failed render must not prompt or create directories
        let payload = Self::render(dataset, cfg, req)?;

        let path = req.output_path();
        prepare_output(&path, req.force)?;

        let empty = match req.kind {
            ExportKind::Production => dataset.records.is_empty(),
            ExportKind::History => !dataset.history.iter().any(|e| req.criteria.matches(e)),
        };
        if empty {
            warning("⚠️  No rows match the selection; writing an empty export.");
        }

        info(format!(
            "Exporting to {}: {}",
            req.format.as_str().to_uppercase(),
            path.display()
        ));
        write_payload(&path, &payload)?;

        notify_export_success(&req.format.as_str().to_uppercase(), &path);
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn request(kind: ExportKind, format: ExportFormat) -> ExportRequest {
        ExportRequest {
            format,
            kind,
            date: NaiveDate::from_ymd_opt(2025, 3, 8).unwrap(),
            shift: Shift::A,
            criteria: HistoryFilterCriteria::default(),
            dir: env::temp_dir(),
            file: None,
            force: true,
        }
    }

    #[test]
    fn output_path_uses_generated_name() {
        let req = request(ExportKind::Production, ExportFormat::Csv);
        assert!(
            req.output_path()
                .ends_with("production_data_2025-03-08_shift_A.csv")
        );
    }

    #[test]
    fn history_render_applies_criteria() {
        let mut req = request(ExportKind::History, ExportFormat::Csv);
        req.criteria = HistoryFilterCriteria::from_raw(Some("2025-03-08"), None, None, None).unwrap();

        let out = ExportLogic::render(&Dataset::seed(), &Config::default(), &req).unwrap();
        assert_eq!(out.lines().count(), 3);
        assert!(!out.contains("Chicharrones"));
    }

    #[test]
    fn payload_is_independent_of_date_and_shift() {
        let dataset = Dataset::seed();
        let cfg = Config::default();
        let a = request(ExportKind::Production, ExportFormat::Json);
        let mut b = a.clone();
        b.shift = Shift::E;
        b.date = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();

        assert_eq!(
            ExportLogic::render(&dataset, &cfg, &a).unwrap(),
            ExportLogic::render(&dataset, &cfg, &b).unwrap()
        );
    }
}
