//! Progress and alert derivation for a single run.

use crate::errors::{AppError, AppResult};
use crate::models::alert::{Alert, ProgressStatus};
use crate::models::record::ProductionRecord;
use tracing::trace;

/// `round(produced / target * 100)`, unbounded above.
///
/// Evaluated in `f64` exactly as the legacy dashboard did, so exported
/// `progress` columns stay byte-identical (23/40 is 57, not 58).
/// Clamping for progress bars belongs to the renderer, not here.
pub fn compute_progress(produced: u32, target: u32) -> AppResult<u64> {
    if target == 0 {
        return Err(AppError::DivisionByZero { produced });
    }

    // non-negative, so round() (half away from zero) is round-half-up
    let percent = (f64::from(produced) / f64::from(target) * 100.0).round() as u64;

    trace!(produced, target, percent, "progress computed");
    Ok(percent)
}

/// Bands are checked in order; first match wins.
pub fn classify_progress(percent: u64) -> ProgressStatus {
    if percent < 40 {
        ProgressStatus::Critical
    } else if percent < 70 {
        ProgressStatus::Warning
    } else if percent >= 100 {
        ProgressStatus::Complete
    } else {
        ProgressStatus::OnTrack
    }
}

/// Every applicable alert, in fixed priority order.
///
/// A weight change next shift suppresses the same-weight notice.
/// The pallet check is inclusive: `remaining == threshold` fires.
pub fn classify_alerts(record: &ProductionRecord, alert_threshold: u32) -> Vec<Alert> {
    let mut alerts = Vec::with_capacity(2);

    if record.next_shift_weight_change {
        alerts.push(Alert::WeightChangeNext {
            weight: record.weight,
        });
    } else if record.next_shift_same_weight {
        alerts.push(Alert::SameWeightNext {
            weight: record.weight,
        });
    }

    if record.pallets.remaining <= alert_threshold {
        alerts.push(Alert::LowPalletsRemaining {
            remaining: record.pallets.remaining,
            threshold: alert_threshold,
        });
    }

    trace!(id = record.id, count = alerts.len(), "alerts classified");
    alerts
}
