use crate::config::EngineConfig;
use crate::errors::AppResult;
use crate::models::record::ProductionRecord;
use crate::models::shift::Shift;

/// Is the record scheduled on `shift`? Fails with `UnknownShift` for symbols
/// outside the configured set.
pub fn is_scheduled(record: &ProductionRecord, shift: &str, engine: &EngineConfig) -> AppResult<bool> {
    let shift = engine.resolve_shift(shift)?;
    Ok(record.shifts.get(shift))
}

/// Schedule flags for the configured shifts, always in A..F order.
pub fn schedule_row(record: &ProductionRecord, engine: &EngineConfig) -> Vec<(Shift, bool)> {
    record
        .shifts
        .iter()
        .filter(|(s, _)| engine.has_shift(*s))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::models::seed;

    #[test]
    fn lookup_is_direct() {
        let r = &seed::records()[0]; // A, B, D
        let engine = EngineConfig::default();
        assert!(is_scheduled(r, "A", &engine).unwrap());
        assert!(!is_scheduled(r, "c", &engine).unwrap());
        assert!(is_scheduled(r, "D", &engine).unwrap());
    }

    #[test]
    fn unknown_symbol_fails() {
        let r = &seed::records()[0];
        let engine = EngineConfig::default();
        assert!(matches!(
            is_scheduled(r, "G", &engine),
            Err(AppError::UnknownShift(_))
        ));

        let narrow = EngineConfig::new(3, 49, &[Shift::A, Shift::B]).unwrap();
        assert!(matches!(
            is_scheduled(r, "D", &narrow),
            Err(AppError::UnknownShift(_))
        ));
    }

    #[test]
    fn row_follows_configured_order() {
        let r = &seed::records()[1];
        let engine = EngineConfig::new(3, 49, &[Shift::F, Shift::A, Shift::C]).unwrap();
        let row = schedule_row(r, &engine);
        assert_eq!(row, vec![(Shift::A, true), (Shift::C, true), (Shift::F, true)]);
    }
}
