use crate::projection::{BusiestHourProjection, LengthProjection, Projection, TagProjection, ThreadProjection};
use clap::ValueEnum;
use std::fmt;

/// The four aggregations over the forum dump.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Task {
    /// Most frequent posting hour per author
    BusiestHour,
    /// Question length and average answer length per thread
    Lengths,
    /// Ten most used tags
    TopTags,
    /// Authors participating in each thread
    Threads,
}

impl Task {
    pub fn projection(self) -> Box<dyn Projection> {
        match self {
            Task::BusiestHour => Box::new(BusiestHourProjection::new()),
            Task::Lengths => Box::new(LengthProjection),
            Task::TopTags => Box::new(TagProjection),
            Task::Threads => Box::new(ThreadProjection),
        }
    }

    /// Whether reducer input lines carry a value column.
    pub fn keyed_values(self) -> bool {
        !matches!(self, Task::TopTags)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Task::BusiestHour => "busiest-hour",
            Task::Lengths => "lengths",
            Task::TopTags => "top-tags",
            Task::Threads => "threads",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_top_tags_reads_bare_keys() {
        assert!(!Task::TopTags.keyed_values());
        for task in [Task::BusiestHour, Task::Lengths, Task::Threads] {
            assert!(task.keyed_values(), "{task}");
        }
    }
}
