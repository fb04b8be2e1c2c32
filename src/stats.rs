use crate::assembler::AssemblyStats;
use tracing::info;

/// Counters for one stage run, logged when the stage finishes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    pub lines_read: u64,
    pub records: u64,
    pub malformed: u64,
    pub pairs: u64,
    pub skipped_lines: u64,
    pub groups: u64,
}

impl RunStats {
    pub fn record_assembly(&mut self, assembly: AssemblyStats) {
        self.lines_read += assembly.lines_read;
        self.records += assembly.records;
        self.malformed += assembly.malformed;
    }

    pub fn log(&self, stage: &str) {
        info!(
            stage,
            lines_read = self.lines_read,
            records = self.records,
            malformed = self.malformed,
            pairs = self.pairs,
            skipped_lines = self.skipped_lines,
            groups = self.groups,
            "stage finished"
        );
    }
}
