use super::shift::ShiftSchedule;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Pallet counters for a product run, as supplied by the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pallets {
    pub total: u32,
    pub completed: u32,
    pub remaining: u32,
    pub current_pallet: u32, // units already on the pallet being filled
}

impl Pallets {
    pub fn new(total: u32, completed: u32, remaining: u32, current_pallet: u32) -> Self {
        Self {
            total,
            completed,
            remaining,
            current_pallet,
        }
    }

    /// `completed + remaining == total`.
    /// Only enforced when a record is built; later edits are the caller's business.
    pub fn is_balanced(&self) -> bool {
        u64::from(self.completed) + u64::from(self.remaining) == u64::from(self.total)
    }
}

/// One active product run.
///
/// Field order is the export order: JSON output follows it exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionRecord {
    pub id: u32,
    pub product: String,
    pub weight: u32,   // grams per unit
    pub target: u32,   // units
    pub produced: u32, // units, may exceed target
    pub pallets: Pallets,
    pub shifts: ShiftSchedule,
    pub next_shift_same_weight: bool,
    pub next_shift_weight_change: bool,
}

impl ProductionRecord {
    /// Build a record and check the construction invariants.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u32,
        product: &str,
        weight: u32,
        target: u32,
        produced: u32,
        pallets: Pallets,
        shifts: ShiftSchedule,
        next_shift_same_weight: bool,
        next_shift_weight_change: bool,
    ) -> AppResult<Self> {
        let record = Self {
            id,
            product: product.to_string(),
            weight,
            target,
            produced,
            pallets,
            shifts,
            next_shift_same_weight,
            next_shift_weight_change,
        };
        record.validate()?;
        Ok(record)
    }

    /// Check the invariants a record must satisfy when it enters the engine.
    pub fn validate(&self) -> AppResult<()> {
        if self.product.trim().is_empty() {
            return Err(AppError::InvalidRecord(format!(
                "record {}: product name is empty",
                self.id
            )));
        }
        if self.weight == 0 {
            return Err(AppError::InvalidRecord(format!(
                "record {} ({}): weight must be positive",
                self.id, self.product
            )));
        }
        if self.target == 0 {
            return Err(AppError::InvalidRecord(format!(
                "record {} ({}): target must be positive",
                self.id, self.product
            )));
        }
        if !self.pallets.is_balanced() {
            return Err(AppError::InvalidRecord(format!(
                "record {} ({}): completed ({}) + remaining ({}) != total ({})",
                self.id,
                self.product,
                self.pallets.completed,
                self.pallets.remaining,
                self.pallets.total
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::shift::Shift;

    fn pallets() -> Pallets {
        Pallets::new(6, 3, 3, 28)
    }

    #[test]
    fn new_accepts_over_production() {
        let r = ProductionRecord::new(
            1,
            "X",
            100,
            200,
            450,
            pallets(),
            ShiftSchedule::new().with(Shift::A, true),
            false,
            false,
        )
        .unwrap();
        assert_eq!(r.produced, 450);
    }

    #[test]
    fn new_rejects_broken_invariants() {
        let s = ShiftSchedule::new();
        assert!(ProductionRecord::new(1, "  ", 100, 200, 0, pallets(), s, false, false).is_err());
        assert!(ProductionRecord::new(1, "X", 0, 200, 0, pallets(), s, false, false).is_err());
        assert!(ProductionRecord::new(1, "X", 100, 0, 0, pallets(), s, false, false).is_err());

        let unbalanced = Pallets::new(6, 3, 2, 0);
        let err = ProductionRecord::new(1, "X", 100, 200, 0, unbalanced, s, false, false)
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidRecord(_)));
    }

    #[test]
    fn json_keys_are_camel_case_in_declaration_order() {
        let r = ProductionRecord::new(
            7,
            "Chips",
            180,
            250,
            175,
            pallets(),
            ShiftSchedule::new(),
            true,
            false,
        )
        .unwrap();
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.starts_with(r#"{"id":7,"product":"Chips","weight":180,"target":250,"produced":175,"pallets":{"total":6,"completed":3,"remaining":3,"currentPallet":28},"shifts":{"A":false"#));
        assert!(json.ends_with(r#""nextShiftSameWeight":true,"nextShiftWeightChange":false}"#));
    }
}
