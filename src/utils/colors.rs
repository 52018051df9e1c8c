//! Colour helpers for terminal output.
use crate::models::alert::{ProgressStatus, Severity};
use ansi_term::Colour;

/// Band colour: red < 40, yellow < 70, green >= 100, blue otherwise.
pub fn status_colour(status: ProgressStatus) -> Colour {
    match status {
        ProgressStatus::Critical => Colour::Red,
        ProgressStatus::Warning => Colour::Yellow,
        ProgressStatus::OnTrack => Colour::Blue,
        ProgressStatus::Complete => Colour::Green,
    }
}

pub fn severity_colour(severity: Severity) -> Colour {
    match severity {
        Severity::Alert => Colour::Red,
        Severity::Notice => Colour::Fixed(208), // orange
        Severity::Caution => Colour::Yellow,
    }
}

/// Paint `text`, or return it untouched when colour is disabled.
pub fn paint(colour: Colour, text: &str, enabled: bool) -> String {
    if enabled {
        colour.paint(text).to_string()
    } else {
        text.to_string()
    }
}
