//! Streaming map/reduce jobs over a tab-separated forum post dump.
//!
//! Each job is a mapper that reassembles multi-line post records and
//! projects them to key/value lines, and a reducer that folds a key-sorted
//! stream of those lines one group at a time.

pub mod accumulators;
pub mod assembler;
pub mod config;
pub mod error;
pub mod groupby;
pub mod logging;
pub mod pipeline;
pub mod projection;
pub mod record;
pub mod stats;
pub mod task;

pub use assembler::{records, RecordAssembler};
pub use config::Config;
pub use error::{Error, Result};
pub use groupby::{Accumulator, GroupBy};
pub use pipeline::{run_local, run_map, run_reduce};
pub use projection::{Pair, Projection};
pub use record::{NodeType, Record};
pub use stats::RunStats;
pub use task::Task;
