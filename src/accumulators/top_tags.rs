use crate::error::Result;
use crate::groupby::Accumulator;

/// Number of lines in a group; the value column is ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OccurrenceCounter(u64);

impl Accumulator for OccurrenceCounter {
    type Value = ();
    type Output = u64;

    fn parse_value(_raw: &str) -> Result<()> {
        Ok(())
    }

    fn fold(&mut self, _: ()) {
        self.0 += 1;
    }

    fn finalize(self) -> u64 {
        self.0
    }
}

/// Bounded selector keeping the `capacity` largest counts seen so far.
///
/// Eviction policy: when full, a new entry replaces the retained entry with
/// the smallest count only if its own count is strictly larger. Among
/// several retained entries sharing the smallest count, the one inserted
/// earliest is evicted.
#[derive(Clone, Debug)]
pub struct TopK {
    capacity: usize,
    // insertion order
    retained: Vec<(String, u64)>,
}

impl TopK {
    pub fn new(capacity: usize) -> Self {
        Self { capacity, retained: Vec::with_capacity(capacity) }
    }

    pub fn len(&self) -> usize {
        self.retained.len()
    }

    pub fn is_empty(&self) -> bool {
        self.retained.is_empty()
    }

    pub fn offer(&mut self, key: &str, count: u64) {
        if self.capacity == 0 {
            return;
        }
        if self.retained.len() < self.capacity {
            self.retained.push((key.to_string(), count));
            return;
        }
        // min_by_key returns the first of equal minima
        let Some((idx, &(_, min))) = self.retained.iter().enumerate().min_by_key(|(_, (_, c))| *c) else {
            return;
        };
        if count > min {
            self.retained.remove(idx);
            self.retained.push((key.to_string(), count));
        }
    }

    /// Retained entries by count descending; equal counts keep insertion order.
    pub fn into_sorted(self) -> Vec<(String, u64)> {
        let mut entries = self.retained;
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}
