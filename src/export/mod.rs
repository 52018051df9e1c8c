// src/export/mod.rs

mod csv;
mod file_name;
mod fs_utils;
mod json;
pub mod logic;

pub use self::csv::{HISTORY_CSV_HEADER, PRODUCTION_CSV_HEADER, serialize_csv, serialize_history_csv};
pub use file_name::export_file_name;
pub use json::{parse_json, serialize_history_json, serialize_json};
pub use logic::{ExportLogic, ExportRequest};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Which data set an export carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportKind {
    Production,
    History,
}

/// CSV field encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CsvMode {
    /// Fields joined with commas as-is. A comma inside a product name breaks the row.
    #[default]
    Legacy,
    /// RFC 4180 quoting where a field needs it.
    Quoted,
}

impl CsvMode {
    pub fn from_quoting(quoting: bool) -> Self {
        if quoting {
            CsvMode::Quoted
        } else {
            CsvMode::Legacy
        }
    }
}
