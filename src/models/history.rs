use super::shift::Shift;
use crate::core::metrics::compute_progress;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Archival row of a closed shift. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: String, // YYYY-MM-DD
    pub shift: Shift,
    pub product: String,
    pub weight: u32,
    pub target: u32,
    pub produced: u32,
}

impl HistoryEntry {
    pub fn new(
        date: &str,
        shift: Shift,
        product: &str,
        weight: u32,
        target: u32,
        produced: u32,
    ) -> Self {
        Self {
            date: date.to_string(),
            shift,
            product: product.to_string(),
            weight,
            target,
            produced,
        }
    }

    pub fn progress(&self) -> AppResult<u64> {
        compute_progress(self.produced, self.target)
    }

    /// Archive rows must carry a zero-padded `YYYY-MM-DD` date; filtering compares it as text.
    pub fn validate(&self) -> AppResult<()> {
        if !is_iso_date(&self.date) {
            return Err(AppError::InvalidRecord(format!(
                "history date '{}' ({} shift {}) is not in YYYY-MM-DD format",
                self.date, self.product, self.shift
            )));
        }
        Ok(())
    }
}

/// Exact-match history constraints. `None` means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryFilterCriteria {
    pub date: Option<String>,
    pub shift: Option<Shift>,
    pub product: Option<String>,
    pub weight: Option<u32>,
}

impl HistoryFilterCriteria {
    /// Build criteria from raw text as entered by a user.
    ///
    /// - empty or missing fields are wildcards
    /// - `date` must be `YYYY-MM-DD`
    /// - `shift` must be one of A..F
    /// - `weight` must be a positive integer; it is compared numerically, so "0180" matches 180
    pub fn from_raw(
        date: Option<&str>,
        shift: Option<&str>,
        product: Option<&str>,
        weight: Option<&str>,
    ) -> AppResult<Self> {
        let date = match non_empty(date) {
            Some(d) if is_iso_date(d) => Some(d.to_string()),
            Some(d) => {
                return Err(AppError::InvalidCriteria(format!(
                    "date '{d}' is not in YYYY-MM-DD format"
                )));
            }
            None => None,
        };

        let shift = non_empty(shift).map(Shift::from_code).transpose()?;

        let product = non_empty(product).map(str::to_string);

        let weight = match non_empty(weight) {
            Some(w) => {
                let grams = w.trim_end_matches('g').parse::<u32>().map_err(|_| {
                    AppError::InvalidCriteria(format!("weight '{w}' is not a whole number"))
                })?;
                if grams == 0 {
                    return Err(AppError::InvalidCriteria(
                        "weight must be greater than zero".to_string(),
                    ));
                }
                Some(grams)
            }
            None => None,
        };

        Ok(Self {
            date,
            shift,
            product,
            weight,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.shift.is_none() && self.product.is_none() && self.weight.is_none()
    }

    pub fn matches(&self, entry: &HistoryEntry) -> bool {
        self.date.as_ref().is_none_or(|d| *d == entry.date)
            && self.shift.is_none_or(|s| s == entry.shift)
            && self.product.as_ref().is_none_or(|p| *p == entry.product)
            && self.weight.is_none_or(|w| w == entry.weight)
    }
}

/// Valid calendar date written exactly as `YYYY-MM-DD` (chrono alone accepts `2025-3-8`).
fn is_iso_date(s: &str) -> bool {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .is_ok_and(|d| d.format("%Y-%m-%d").to_string() == s)
}

fn non_empty(v: Option<&str>) -> Option<&str> {
    v.map(str::trim).filter(|s| !s.is_empty())
}
