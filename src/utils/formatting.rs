//! Formatting utilities used for CLI outputs.

use crate::models::shift::Shift;

/// Text progress bar. Clamps at 100% for drawing only.
///
/// `progress_bar(70, 10)` → `[#######---]`
pub fn progress_bar(percent: u64, width: usize) -> String {
    let shown = percent.min(100) as usize;
    let filled = (shown * width + 50) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled.min(width)))
}

/// Schedule strip: scheduled shifts by symbol, the rest as a dot.
///
/// `A B . D . .`
pub fn schedule_strip(schedule: &[(Shift, bool)]) -> String {
    schedule
        .iter()
        .map(|(s, on)| if *on { s.code() } else { "." })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn grams(weight: u32) -> String {
    format!("{weight}g")
}
