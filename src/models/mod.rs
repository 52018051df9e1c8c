pub mod alert;
pub mod dataset;
pub mod history;
pub mod record;
pub mod seed;
pub mod shift;

pub use alert::{Alert, ProgressStatus, Severity};
pub use dataset::Dataset;
pub use history::{HistoryEntry, HistoryFilterCriteria};
pub use record::{Pallets, ProductionRecord};
pub use shift::{Shift, ShiftSchedule};
