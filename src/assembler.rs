//! Reassembles logical post records from physical input lines.
//!
//! Only the body field may contain raw newlines, so a record is complete the
//! moment its buffered text splits into exactly [`FIELD_COUNT`] tab-separated
//! fields. Quotes are not balanced; the field count is the only signal.

use crate::config::FIELD_COUNT;
use crate::error::Result;
use crate::record::Record;
use std::io::BufRead;
use tracing::{debug, warn};

const SEPARATORS: usize = FIELD_COUNT - 1;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AssemblyStats {
    pub lines_read: u64,
    pub records: u64,
    pub malformed: u64,
}

#[derive(Debug)]
pub struct RecordAssembler {
    skip_header: bool,
    buffer: String,
    tabs: usize,
    stats: AssemblyStats,
}

impl RecordAssembler {
    pub fn new(skip_header: bool) -> Self {
        Self {
            skip_header,
            buffer: String::new(),
            tabs: 0,
            stats: AssemblyStats::default(),
        }
    }

    /// Feeds one physical line (terminator optional) and returns the record
    /// it completes, if any.
    pub fn push_line(&mut self, line: &str) -> Option<Record> {
        if self.skip_header {
            self.skip_header = false;
            return None;
        }
        self.stats.lines_read += 1;
        let line = strip_terminator(line);
        let line_tabs = count_tabs(line);

        if self.tabs + line_tabs > SEPARATORS {
            // Too many fields: the buffered prefix can never become a record.
            // Drop it and give the current line a fresh start.
            if !self.buffer.is_empty() {
                self.stats.malformed += 1;
                debug!(bytes = self.buffer.len(), "discarding overlong record buffer");
                self.buffer.clear();
                self.tabs = 0;
            }
            if line_tabs > SEPARATORS {
                self.stats.malformed += 1;
                debug!(fields = line_tabs + 1, "discarding line with too many fields");
                return None;
            }
        }

        if !self.buffer.is_empty() {
            self.buffer.push('\n');
        }
        self.buffer.push_str(line);
        self.tabs += line_tabs;

        if self.tabs < SEPARATORS {
            return None;
        }
        let fields = self.buffer.split('\t').map(str::to_string).collect();
        self.buffer.clear();
        self.tabs = 0;
        let record = Record::from_fields(fields)?;
        self.stats.records += 1;
        Some(record)
    }

    /// Ends the stream. A partial record still buffered is dropped; its size
    /// in bytes is returned.
    pub fn finish(&mut self) -> Option<usize> {
        if self.buffer.is_empty() {
            return None;
        }
        let dropped = self.buffer.len();
        warn!(bytes = dropped, "input ended inside a record, dropping partial buffer");
        self.stats.malformed += 1;
        self.buffer.clear();
        self.tabs = 0;
        Some(dropped)
    }

    pub fn stats(&self) -> AssemblyStats {
        self.stats
    }
}

fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

fn count_tabs(s: &str) -> usize {
    s.bytes().filter(|&b| b == b'\t').count()
}

/// Lazy record stream over a line reader.
pub struct Records<R> {
    lines: std::io::Lines<R>,
    assembler: RecordAssembler,
    done: bool,
}

pub fn records<R: BufRead>(reader: R, skip_header: bool) -> Records<R> {
    Records {
        lines: reader.lines(),
        assembler: RecordAssembler::new(skip_header),
        done: false,
    }
}

impl<R> Records<R> {
    pub fn stats(&self) -> AssemblyStats {
        self.assembler.stats()
    }
}

impl<R: BufRead> Iterator for Records<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            match self.lines.next() {
                Some(Ok(line)) => {
                    if let Some(record) = self.assembler.push_line(&line) {
                        return Some(Ok(record));
                    }
                }
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e.into()));
                }
                None => {
                    self.done = true;
                    self.assembler.finish();
                    return None;
                }
            }
        }
    }
}
