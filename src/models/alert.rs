use serde::Serialize;

/// Progress band of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProgressStatus {
    Critical,
    Warning,
    OnTrack,
    Complete,
}

impl ProgressStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProgressStatus::Critical => "critical",
            ProgressStatus::Warning => "warning",
            ProgressStatus::OnTrack => "on track",
            ProgressStatus::Complete => "complete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Severity {
    Caution,
    Notice,
    Alert,
}

/// Condition derived from a record. Carries what a view needs to word it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Alert {
    WeightChangeNext { weight: u32 },
    SameWeightNext { weight: u32 },
    LowPalletsRemaining { remaining: u32, threshold: u32 },
}

impl Alert {
    pub fn severity(&self) -> Severity {
        match self {
            Alert::WeightChangeNext { .. } => Severity::Alert,
            Alert::SameWeightNext { .. } => Severity::Notice,
            Alert::LowPalletsRemaining { .. } => Severity::Caution,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Alert::WeightChangeNext { weight } => {
                format!("ALERT: weight change next shift (currently {weight}g)")
            }
            Alert::SameWeightNext { weight } => {
                format!("NOTICE: same weight next shift ({weight}g)")
            }
            Alert::LowPalletsRemaining { remaining, .. } => {
                format!("CAUTION: {remaining} pallets remaining")
            }
        }
    }
}
