//! Per-group accumulators, one per task.

pub mod busiest_hour;
pub mod lengths;
pub mod threads;
pub mod top_tags;

pub use busiest_hour::HourHistogram;
pub use lengths::{LengthSummary, LengthTracker};
pub use threads::AuthorList;
pub use top_tags::{OccurrenceCounter, TopK};
