use super::CsvMode;
use crate::core::metrics::compute_progress;
use crate::errors::{AppError, AppResult};
use crate::models::history::HistoryEntry;
use crate::models::record::ProductionRecord;
use serde::Serialize;
use tracing::debug;

pub const PRODUCTION_CSV_HEADER: [&str; 6] =
    ["id", "product", "weight", "target", "produced", "progress"];

pub const HISTORY_CSV_HEADER: [&str; 7] = [
    "date", "shift", "product", "weight", "target", "produced", "progress",
];

/// Flat row for production export. `progress` is derived, never stored.
#[derive(Serialize)]
struct ProductionRow<'a> {
    id: u32,
    product: &'a str,
    weight: u32,
    target: u32,
    produced: u32,
    progress: u64,
}

impl<'a> ProductionRow<'a> {
    fn from_record(r: &'a ProductionRecord) -> AppResult<Self> {
        Ok(Self {
            id: r.id,
            product: &r.product,
            weight: r.weight,
            target: r.target,
            produced: r.produced,
            progress: compute_progress(r.produced, r.target)?,
        })
    }

    fn plain(&self) -> String {
        format!(
            "{},{},{},{},{},{}",
            self.id, self.product, self.weight, self.target, self.produced, self.progress
        )
    }
}

#[derive(Serialize)]
struct HistoryRow<'a> {
    date: &'a str,
    shift: &'static str,
    product: &'a str,
    weight: u32,
    target: u32,
    produced: u32,
    progress: u64,
}

impl<'a> HistoryRow<'a> {
    fn from_entry(e: &'a HistoryEntry) -> AppResult<Self> {
        Ok(Self {
            date: &e.date,
            shift: e.shift.code(),
            product: &e.product,
            weight: e.weight,
            target: e.target,
            produced: e.produced,
            progress: e.progress()?,
        })
    }

    fn plain(&self) -> String {
        format!(
            "{},{},{},{},{},{},{}",
            self.date,
            self.shift,
            self.product,
            self.weight,
            self.target,
            self.produced,
            self.progress
        )
    }
}

/// Production CSV: header line, then one row per record in input order.
///
/// Rows are separated by `\n` with no trailing newline after the last row.
pub fn serialize_csv(records: &[ProductionRecord], mode: CsvMode) -> AppResult<String> {
    let rows = records
        .iter()
        .map(ProductionRow::from_record)
        .collect::<AppResult<Vec<_>>>()?;

    let out = match mode {
        CsvMode::Legacy => join_plain(&PRODUCTION_CSV_HEADER, rows.iter().map(ProductionRow::plain)),
        CsvMode::Quoted => write_quoted(&PRODUCTION_CSV_HEADER, &rows)?,
    };

    debug!(rows = records.len(), bytes = out.len(), ?mode, "production csv serialized");
    Ok(out)
}

/// History CSV, same layout rules as [`serialize_csv`].
pub fn serialize_history_csv(entries: &[HistoryEntry], mode: CsvMode) -> AppResult<String> {
    let rows = entries
        .iter()
        .map(HistoryRow::from_entry)
        .collect::<AppResult<Vec<_>>>()?;

    let out = match mode {
        CsvMode::Legacy => join_plain(&HISTORY_CSV_HEADER, rows.iter().map(HistoryRow::plain)),
        CsvMode::Quoted => write_quoted(&HISTORY_CSV_HEADER, &rows)?,
    };

    debug!(rows = entries.len(), bytes = out.len(), ?mode, "history csv serialized");
    Ok(out)
}

fn join_plain(header: &[&str], rows: impl Iterator<Item = String>) -> String {
    let body: Vec<String> = rows.collect();
    format!("{}\n{}", header.join(","), body.join("\n"))
}

fn write_quoted<T: Serialize>(header: &[&str], rows: &[T]) -> AppResult<String> {
    let mut wtr = ::csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(::csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(header)?;
    for row in rows {
        wtr.serialize(row)?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;
    let mut out =
        String::from_utf8(bytes).map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))?;

    // keep the legacy shape: no terminator after the last data row
    if !rows.is_empty() && out.ends_with('\n') {
        out.pop();
    }
    Ok(out)
}
