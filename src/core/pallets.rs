use crate::config::EngineConfig;
use crate::models::record::{Pallets, ProductionRecord};

/// Read-only pallet accounting for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PalletView {
    pub total: u32,
    pub completed: u32,
    pub remaining: u32,
    pub current_pallet: u32,
    pub capacity: u32,
}

impl PalletView {
    pub fn new(pallets: &Pallets, capacity: u32) -> Self {
        Self {
            total: pallets.total,
            completed: pallets.completed,
            remaining: pallets.remaining,
            current_pallet: pallets.current_pallet,
            capacity,
        }
    }

    pub fn of(record: &ProductionRecord, engine: &EngineConfig) -> Self {
        Self::new(&record.pallets, engine.pallet_capacity)
    }

    /// Fill of the current pallet in percent, rounded half up.
    /// Reported as-is when the line reports more units than the capacity.
    pub fn fill_percent(&self) -> u64 {
        if self.capacity == 0 {
            return 0;
        }
        let scaled = u64::from(self.current_pallet) * 100;
        let cap = u64::from(self.capacity);
        (2 * scaled + cap) / (2 * cap)
    }

    pub fn is_full(&self) -> bool {
        self.current_pallet >= self.capacity
    }

    pub fn units_to_fill(&self) -> u32 {
        self.capacity.saturating_sub(self.current_pallet)
    }

    /// e.g. "28/49"
    pub fn fill_label(&self) -> String {
        format!("{}/{}", self.current_pallet, self.capacity)
    }
}
