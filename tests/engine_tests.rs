use prodwatch::config::EngineConfig;
use prodwatch::core::{
    Core, classify_alerts, classify_progress, compute_progress, filter_history, is_scheduled,
};
use prodwatch::errors::AppError;
use prodwatch::export::{CsvMode, parse_json, serialize_csv, serialize_json};
use prodwatch::models::{
    Alert, HistoryEntry, HistoryFilterCriteria, Pallets, ProductionRecord, ProgressStatus, Shift,
    ShiftSchedule, seed,
};

fn record(id: u32, produced: u32, target: u32, remaining: u32) -> ProductionRecord {
    ProductionRecord::new(
        id,
        &format!("Product {id}"),
        100,
        target,
        produced,
        Pallets::new(remaining + 2, 2, remaining, 5),
        ShiftSchedule::new().with(Shift::C, true),
        false,
        false,
    )
    .expect("valid record")
}

#[test]
fn progress_matches_rounded_ratio() {
    for target in 1..=400u32 {
        for produced in 0..=400u32 {
            let expected = (f64::from(produced) / f64::from(target) * 100.0).round() as u64;
            assert_eq!(
                compute_progress(produced, target).unwrap(),
                expected,
                "{produced}/{target}"
            );
        }
    }
    assert_eq!(compute_progress(250, 100).unwrap(), 250);
    assert_eq!(compute_progress(23, 40).unwrap(), 57);
    assert_eq!(compute_progress(29, 200).unwrap(), 14);
    assert_eq!(compute_progress(185, 200).unwrap(), 93);
}

#[test]
fn progress_with_zero_target_fails_for_any_produced() {
    for produced in [0, 1, 49, u32::MAX] {
        assert!(matches!(
            compute_progress(produced, 0),
            Err(AppError::DivisionByZero { .. })
        ));
    }
}

#[test]
fn progress_band_boundaries() {
    assert_eq!(classify_progress(39), ProgressStatus::Critical);
    assert_eq!(classify_progress(40), ProgressStatus::Warning);
    assert_eq!(classify_progress(69), ProgressStatus::Warning);
    assert_eq!(classify_progress(70), ProgressStatus::OnTrack);
    assert_eq!(classify_progress(100), ProgressStatus::Complete);
    assert_eq!(classify_progress(150), ProgressStatus::Complete);
}

#[test]
fn weight_change_and_same_weight_never_both() {
    let mut r = record(1, 10, 20, 10);
    r.next_shift_same_weight = true;
    r.next_shift_weight_change = true;
    let alerts = classify_alerts(&r, 3);
    assert_eq!(alerts, vec![Alert::WeightChangeNext { weight: 100 }]);
}

#[test]
fn low_pallets_threshold_boundary() {
    let threshold = 3;
    let at = record(1, 10, 20, threshold);
    let above = record(2, 10, 20, threshold + 1);

    assert!(
        classify_alerts(&at, threshold)
            .iter()
            .any(|a| matches!(a, Alert::LowPalletsRemaining { .. }))
    );
    assert!(classify_alerts(&above, threshold).is_empty());
}

#[test]
fn filter_is_idempotent_and_order_preserving() {
    let history = vec![
        HistoryEntry::new("2025-03-09", Shift::C, "B", 100, 10, 5),
        HistoryEntry::new("2025-03-08", Shift::A, "A", 180, 10, 10),
        HistoryEntry::new("2025-03-09", Shift::A, "A", 180, 10, 7),
    ];

    let all = HistoryFilterCriteria::from_raw(Some(""), Some(""), Some(""), Some("")).unwrap();
    let out: Vec<HistoryEntry> = filter_history(&history, &all).cloned().collect();
    assert_eq!(out, history);

    let c = HistoryFilterCriteria::from_raw(None, Some("A"), None, None).unwrap();
    let once: Vec<HistoryEntry> = filter_history(&history, &c).cloned().collect();
    let twice: Vec<HistoryEntry> = filter_history(&once, &c).cloned().collect();
    assert_eq!(once, twice);
    assert_eq!(
        once.iter().map(|e| e.date.as_str()).collect::<Vec<_>>(),
        vec!["2025-03-08", "2025-03-09"]
    );
}

#[test]
fn json_round_trip() {
    let records = vec![record(1, 0, 10, 0), record(2, 999, 10, 7), seed::records().remove(2)];
    let parsed = parse_json(&serialize_json(&records).unwrap()).unwrap();
    assert_eq!(parsed, records);
}

#[test]
fn csv_reference_row() {
    let mut r = record(1, 150, 200, 1);
    r.product = "X".to_string();
    assert_eq!(
        serialize_csv(&[r], CsvMode::Legacy).unwrap(),
        "id,product,weight,target,produced,progress\n1,X,100,200,150,75"
    );
}

#[test]
fn csv_progress_column_on_near_tie() {
    let mut r = record(1, 29, 200, 1);
    r.product = "X".to_string();
    assert!(
        serialize_csv(&[r], CsvMode::Legacy)
            .unwrap()
            .ends_with("\n1,X,100,200,29,14")
    );
}

#[test]
fn shift_iteration_ignores_input_order() {
    let json = r#"{"E":true,"A":false,"F":true,"B":true,"D":false,"C":true}"#;
    let schedule: ShiftSchedule = serde_json::from_str(json).unwrap();
    let order: String = schedule.iter().map(|(s, _)| s.code()).collect();
    assert_eq!(order, "ABCDEF");
}

#[test]
fn scheduled_lookup_and_dashboard() {
    let engine = EngineConfig::default();
    let r = record(1, 10, 20, 9);
    assert!(is_scheduled(&r, "C", &engine).unwrap());
    assert!(!is_scheduled(&r, "A", &engine).unwrap());
    assert!(matches!(
        is_scheduled(&r, "7", &engine),
        Err(AppError::UnknownShift(_))
    ));

    let records = vec![r];
    let rows = Core::build_dashboard(&records, &engine, Some(Shift::C)).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].progress, 50);
    assert_eq!(rows[0].status, ProgressStatus::Warning);
}
