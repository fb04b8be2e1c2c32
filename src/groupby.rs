//! Single-pass group-by over a key-sorted stream.
//!
//! Precondition: every line sharing a key is contiguous in the input. The
//! engine only compares each key with the previous one, so a key that shows
//! up again after its group closed is silently opened as a second group.
//! Turn on `verify_sorted` to make that an [`Error::UnsortedInput`] instead.

use crate::error::{Error, Result};
use std::collections::HashSet;
use tracing::debug;

/// Per-group state. `Default` is the identity a fresh group starts from.
pub trait Accumulator: Default {
    type Value;
    type Output;

    /// Decodes the value column of one reducer input line.
    fn parse_value(raw: &str) -> Result<Self::Value>;

    fn fold(&mut self, value: Self::Value);

    fn finalize(self) -> Self::Output;
}

pub struct GroupBy<A: Accumulator> {
    current: Option<(String, A)>,
    closed: Option<HashSet<String>>,
    groups: u64,
}

impl<A: Accumulator> GroupBy<A> {
    pub fn new(verify_sorted: bool) -> Self {
        Self {
            current: None,
            closed: verify_sorted.then(HashSet::new),
            groups: 0,
        }
    }

    /// Folds one value into the group for `key`, first flushing the open
    /// group to `sink` if `key` differs from it.
    pub fn push<F>(&mut self, key: &str, value: A::Value, sink: &mut F) -> Result<()>
    where
        F: FnMut(&str, A::Output) -> Result<()>,
    {
        let boundary = matches!(&self.current, Some((open, _)) if open != key);
        if boundary {
            self.flush(sink)?;
        }
        if self.current.is_none() {
            if let Some(closed) = &self.closed {
                if closed.contains(key) {
                    return Err(Error::UnsortedInput(key.to_string()));
                }
            }
            self.current = Some((key.to_string(), A::default()));
        }
        if let Some((_, acc)) = self.current.as_mut() {
            acc.fold(value);
        }
        Ok(())
    }

    /// Flushes the last open group. Returns the number of groups finalized
    /// over the whole stream.
    pub fn finish<F>(mut self, sink: &mut F) -> Result<u64>
    where
        F: FnMut(&str, A::Output) -> Result<()>,
    {
        self.flush(sink)?;
        Ok(self.groups)
    }

    fn flush<F>(&mut self, sink: &mut F) -> Result<()>
    where
        F: FnMut(&str, A::Output) -> Result<()>,
    {
        if let Some((key, acc)) = self.current.take() {
            self.groups += 1;
            sink(&key, acc.finalize())?;
            if let Some(closed) = self.closed.as_mut() {
                closed.insert(key);
            }
        }
        Ok(())
    }
}

/// Splits one reducer input line into key and raw value.
///
/// Keyed tasks need exactly `key<TAB>value`; anything else is skipped.
/// Key-only tasks take the text up to the first tab as the key.
pub fn parse_pair(line: &str, needs_value: bool) -> Option<(&str, &str)> {
    let line = line.trim_end_matches(['\n', '\r']);
    if !needs_value {
        let key = line.split('\t').next().unwrap_or("");
        return (!key.is_empty()).then_some((key, ""));
    }
    let mut parts = line.split('\t');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(key), Some(value), None) => Some((key, value)),
        _ => {
            debug!(line, "skipping reducer line without exactly two fields");
            None
        }
    }
}
