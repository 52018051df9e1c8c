use crate::errors::AppResult;
use crate::models::history::HistoryEntry;
use crate::models::record::ProductionRecord;
use tracing::debug;

/// Compact JSON array of records, keys in model order.
/// The same input always gives the same bytes.
pub fn serialize_json(records: &[ProductionRecord]) -> AppResult<String> {
    let json = serde_json::to_string(records)?;
    debug!(records = records.len(), bytes = json.len(), "production json serialized");
    Ok(json)
}

/// Parse an exported payload back, re-checking each record's invariants.
pub fn parse_json(text: &str) -> AppResult<Vec<ProductionRecord>> {
    let records: Vec<ProductionRecord> = serde_json::from_str(text)?;
    for r in &records {
        r.validate()?;
    }
    Ok(records)
}

pub fn serialize_history_json(entries: &[HistoryEntry]) -> AppResult<String> {
    let json = serde_json::to_string(entries)?;
    debug!(entries = entries.len(), bytes = json.len(), "history json serialized");
    Ok(json)
}
