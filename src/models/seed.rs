//! Built-in demo data used when no dataset file is configured.

use super::history::HistoryEntry;
use super::record::{Pallets, ProductionRecord};
use super::shift::{Shift, ShiftSchedule};

pub fn records() -> Vec<ProductionRecord> {
    vec![
        ProductionRecord {
            id: 1,
            product: "Papas Clásicas".to_string(),
            weight: 180,
            target: 250,
            produced: 175,
            pallets: Pallets::new(6, 3, 3, 28),
            shifts: ShiftSchedule::from_flags([true, true, false, true, false, false]),
            next_shift_same_weight: true,
            next_shift_weight_change: false,
        },
        ProductionRecord {
            id: 2,
            product: "Papas Sabor Queso".to_string(),
            weight: 150,
            target: 200,
            produced: 190,
            pallets: Pallets::new(5, 4, 1, 42),
            shifts: ShiftSchedule::from_flags([true, true, true, false, false, true]),
            next_shift_same_weight: false,
            next_shift_weight_change: true,
        },
        ProductionRecord {
            id: 3,
            product: "Chicharrones".to_string(),
            weight: 100,
            target: 300,
            produced: 210,
            pallets: Pallets::new(7, 5, 2, 17),
            shifts: ShiftSchedule::from_flags([true, false, true, true, true, false]),
            next_shift_same_weight: true,
            next_shift_weight_change: false,
        },
    ]
}

pub fn history() -> Vec<HistoryEntry> {
    vec![
        HistoryEntry::new("2025-03-08", Shift::A, "Papas Clásicas", 180, 250, 242),
        HistoryEntry::new("2025-03-08", Shift::B, "Papas Sabor Queso", 150, 200, 185),
        HistoryEntry::new("2025-03-07", Shift::F, "Chicharrones", 100, 300, 275),
    ]
}
