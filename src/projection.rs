//! Field projections: one assembled record in, zero or more key/value pairs out.

use crate::error::{Error, Result};
use crate::record::{NodeType, Record};
use regex::Regex;
use std::collections::BTreeSet;
use std::fmt;

/// One mapper output line. A pair without a value prints as a bare key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pair {
    pub key: String,
    pub value: Option<String>,
}

impl Pair {
    pub fn new(key: impl Into<String>, value: impl ToString) -> Self {
        Self { key: key.into(), value: Some(value.to_string()) }
    }

    pub fn bare(key: impl Into<String>) -> Self {
        Self { key: key.into(), value: None }
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(v) => write!(f, "{}\t{}", self.key, v),
            None => f.write_str(&self.key),
        }
    }
}

pub trait Projection {
    fn project(&self, record: &Record, emit: &mut dyn FnMut(Pair)) -> Result<()>;
}

/// `(author_id, hour)` for every record.
pub struct BusiestHourProjection {
    time_re: Regex,
}

impl BusiestHourProjection {
    pub fn new() -> Self {
        // "<date> <HH>:<MM>:<SS>..." -> HH
        let time_re = Regex::new(r"^[^ ]* ([^ :]*)").expect("static regex");
        Self { time_re }
    }

    pub fn hour(&self, added_at: &str) -> Result<u8> {
        let raw = self
            .time_re
            .captures(added_at)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
            .ok_or_else(|| Error::Parse(format!("timestamp without time part: {added_at:?}")))?;
        let hour = raw
            .parse::<u8>()
            .map_err(|e| Error::Parse(format!("hour {raw:?} in {added_at:?}: {e}")))?;
        if hour > 23 {
            return Err(Error::Parse(format!("hour {hour} out of range in {added_at:?}")));
        }
        Ok(hour)
    }
}

impl Default for BusiestHourProjection {
    fn default() -> Self {
        Self::new()
    }
}

impl Projection for BusiestHourProjection {
    fn project(&self, record: &Record, emit: &mut dyn FnMut(Pair)) -> Result<()> {
        let hour = self.hour(record.added_at())?;
        emit(Pair::new(record.author_id(), hour));
        Ok(())
    }
}

/// Questions emit `(id, -length)`, answers `(parent_id, length)`.
pub struct LengthProjection;

impl Projection for LengthProjection {
    fn project(&self, record: &Record, emit: &mut dyn FnMut(Pair)) -> Result<()> {
        let length = record.adjusted_body_length();
        match record.node_type() {
            NodeType::Question => emit(Pair::new(record.id(), -length)),
            NodeType::Answer => emit(Pair::new(record.parent_id(), length)),
            NodeType::Other(_) => {}
        }
        Ok(())
    }
}

/// Each distinct tag of a question, as a bare key.
pub struct TagProjection;

impl Projection for TagProjection {
    fn project(&self, record: &Record, emit: &mut dyn FnMut(Pair)) -> Result<()> {
        if record.node_type() != NodeType::Question {
            return Ok(());
        }
        let tags: BTreeSet<&str> = record.tags().split(' ').filter(|t| !t.is_empty()).collect();
        for tag in tags {
            emit(Pair::bare(tag));
        }
        Ok(())
    }
}

/// `(thread_id, author_id)`: questions key on their own id, every other
/// node type on its parent id.
pub struct ThreadProjection;

impl Projection for ThreadProjection {
    fn project(&self, record: &Record, emit: &mut dyn FnMut(Pair)) -> Result<()> {
        let thread = match record.node_type() {
            NodeType::Question => record.id(),
            NodeType::Answer | NodeType::Other(_) => record.parent_id(),
        };
        emit(Pair::new(thread, record.author_id()));
        Ok(())
    }
}
