use crate::error::{Error, Result};
use crate::groupby::Accumulator;
use std::fmt;

/// Question length and answer-length running average for one thread.
///
/// Values of zero or below are question contributions (negated), positive
/// values are answer lengths.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LengthTracker {
    question_length: i64,
    answer_length_sum: i64,
    answer_count: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LengthSummary {
    pub question_length: i64,
    /// `None` when the thread has no answers.
    pub average_answer_length: Option<f64>,
}

impl fmt::Display for LengthSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.average_answer_length {
            // Debug keeps the fractional part: 8.0, not 8
            Some(avg) => write!(f, "{}\t{:?}", self.question_length, avg),
            None => write!(f, "{}\t0", self.question_length),
        }
    }
}

impl Accumulator for LengthTracker {
    type Value = i64;
    type Output = LengthSummary;

    fn parse_value(raw: &str) -> Result<i64> {
        raw.trim()
            .parse::<i64>()
            .map_err(|e| Error::Parse(format!("length {raw:?}: {e}")))
    }

    fn fold(&mut self, value: i64) {
        if value > 0 {
            self.answer_length_sum += value;
            self.answer_count += 1;
        } else {
            self.question_length -= value;
        }
    }

    fn finalize(self) -> LengthSummary {
        let average_answer_length = (self.answer_count > 0)
            .then(|| self.answer_length_sum as f64 / self.answer_count as f64);
        LengthSummary { question_length: self.question_length, average_answer_length }
    }
}
