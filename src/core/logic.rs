use crate::config::EngineConfig;
use crate::core::metrics::{classify_alerts, classify_progress, compute_progress};
use crate::core::pallets::PalletView;
use crate::core::schedule::schedule_row;
use crate::errors::AppResult;
use crate::models::alert::{Alert, ProgressStatus};
use crate::models::record::ProductionRecord;
use crate::models::shift::Shift;

/// Everything a view shows for one run, derived and presentation-free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSummary<'a> {
    pub record: &'a ProductionRecord,
    pub progress: u64,
    pub status: ProgressStatus,
    pub alerts: Vec<Alert>,
    pub pallets: PalletView,
    pub schedule: Vec<(Shift, bool)>,
}

impl RecordSummary<'_> {
    /// Progress clamped for bar rendering. The stored value is never clamped.
    pub fn display_progress(&self) -> u64 {
        self.progress.min(100)
    }
}

pub struct Core;

impl Core {
    pub fn summarize<'a>(
        record: &'a ProductionRecord,
        engine: &EngineConfig,
    ) -> AppResult<RecordSummary<'a>> {
        let progress = compute_progress(record.produced, record.target)?;

        Ok(RecordSummary {
            record,
            progress,
            status: classify_progress(progress),
            alerts: classify_alerts(record, engine.alert_threshold),
            pallets: PalletView::of(record, engine),
            schedule: schedule_row(record, engine),
        })
    }

    /// Summaries for all records, optionally restricted to those scheduled on `shift`.
    pub fn build_dashboard<'a>(
        records: &'a [ProductionRecord],
        engine: &EngineConfig,
        shift: Option<Shift>,
    ) -> AppResult<Vec<RecordSummary<'a>>> {
        records
            .iter()
            .filter(|r| shift.is_none_or(|s| r.shifts.get(s)))
            .map(|r| Self::summarize(r, engine))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed;

    #[test]
    fn seed_dashboard() {
        crate::logging::init_test();
        let records = seed::records();
        let engine = EngineConfig::default();
        let rows = Core::build_dashboard(&records, &engine, None).unwrap();

        let progress: Vec<u64> = rows.iter().map(|r| r.progress).collect();
        assert_eq!(progress, vec![70, 95, 70]);
        assert!(rows.iter().all(|r| r.status == ProgressStatus::OnTrack));

        // every seed record has <= 3 pallets remaining
        assert!(rows.iter().all(|r| matches!(
            r.alerts.last(),
            Some(Alert::LowPalletsRemaining { .. })
        )));
        assert_eq!(rows[1].alerts[0], Alert::WeightChangeNext { weight: 150 });
    }

    #[test]
    fn shift_restricts_to_scheduled_records() {
        let records = seed::records();
        let engine = EngineConfig::default();
        let rows = Core::build_dashboard(&records, &engine, Some(Shift::F)).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].record.id, 2);
    }

    #[test]
    fn display_progress_is_clamped_but_progress_is_not() {
        let mut records = seed::records();
        records[0].produced = 500;
        let s = Core::summarize(&records[0], &EngineConfig::default()).unwrap();
        assert_eq!(s.progress, 200);
        assert_eq!(s.display_progress(), 100);
        assert_eq!(s.status, ProgressStatus::Complete);
    }
}
