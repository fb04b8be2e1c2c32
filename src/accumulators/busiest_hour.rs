use crate::error::{Error, Result};
use crate::groupby::Accumulator;

const HOURS: usize = 24;

/// Posting frequency per hour of day for one author.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HourHistogram {
    bins: [u64; HOURS],
}

impl Accumulator for HourHistogram {
    type Value = u8;
    /// Every hour whose count equals the maximum, ascending. Ties are kept.
    type Output = Vec<u8>;

    fn parse_value(raw: &str) -> Result<u8> {
        let hour = raw
            .trim()
            .parse::<u8>()
            .map_err(|e| Error::Parse(format!("hour {raw:?}: {e}")))?;
        if usize::from(hour) >= HOURS {
            return Err(Error::Parse(format!("hour {hour} out of range")));
        }
        Ok(hour)
    }

    fn fold(&mut self, hour: u8) {
        self.bins[usize::from(hour)] += 1;
    }

    fn finalize(self) -> Vec<u8> {
        let max = self.bins.iter().copied().max().unwrap_or(0);
        (0..HOURS as u8).filter(|&h| self.bins[usize::from(h)] == max).collect()
    }
}
