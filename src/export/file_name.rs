use super::{ExportFormat, ExportKind};
use crate::models::shift::Shift;

/// `production_data_<date>_shift_<shift>.<ext>` for live data,
/// `production_history_<date>_shift_<shift>.<ext>` for the archive.
pub fn export_file_name(kind: ExportKind, date: &str, shift: Shift, format: ExportFormat) -> String {
    let prefix = match kind {
        ExportKind::Production => "production_data",
        ExportKind::History => "production_history",
    };
    format!("{prefix}_{date}_shift_{}.{}", shift.code(), format.as_str())
}
