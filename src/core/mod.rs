pub mod history_filter;
pub mod logic;
pub mod metrics;
pub mod pallets;
pub mod schedule;

pub use history_filter::filter_history;
pub use logic::{Core, RecordSummary};
pub use metrics::{classify_alerts, classify_progress, compute_progress};
pub use pallets::PalletView;
pub use schedule::is_scheduled;
