pub mod colors;
pub mod date;
pub mod formatting;
pub mod table;

pub use formatting::{grams, progress_bar, schedule_strip};
