//! Runtime settings shared by the mapper, reducer and single-process binaries.

use crate::error::{Error, Result};

// Environment variable names
pub const ENV_LOG: &str = "FORUM_STATS_LOG";
pub const ENV_TOP_K: &str = "FORUM_STATS_TOP_K";
pub const ENV_VERIFY_SORTED: &str = "FORUM_STATS_VERIFY_SORTED";
pub const ENV_SKIP_HEADER: &str = "FORUM_STATS_SKIP_HEADER";

// Defaults
pub const DEFAULT_LOG_FILTER: &str = "info";
pub const DEFAULT_TOP_K: usize = 10;

/// Number of tab-separated fields in one complete post record.
pub const FIELD_COUNT: usize = 19;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Discard the first input line of the mapper stage.
    pub skip_header: bool,
    /// How many tags the top-tags reducer retains.
    pub top_k: usize,
    /// Fail when a reducer key reappears after its group was flushed.
    /// Remembers every flushed key, so memory grows with the key count.
    pub verify_sorted: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            skip_header: true,
            top_k: DEFAULT_TOP_K,
            verify_sorted: false,
        }
    }
}

impl Config {
    /// Defaults overlaid with whatever the environment sets.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Ok(v) = std::env::var(ENV_TOP_K) {
            config.top_k = parse_top_k(&v)?;
        }
        if let Ok(v) = std::env::var(ENV_VERIFY_SORTED) {
            config.verify_sorted = truthy(&v);
        }
        if let Ok(v) = std::env::var(ENV_SKIP_HEADER) {
            config.skip_header = truthy(&v);
        }
        Ok(config)
    }

    pub fn with_top_k(mut self, top_k: Option<usize>) -> Result<Self> {
        if let Some(k) = top_k {
            if k == 0 {
                return Err(Error::Config("top-k must be at least 1".into()));
            }
            self.top_k = k;
        }
        Ok(self)
    }
}

fn parse_top_k(raw: &str) -> Result<usize> {
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(Error::Config(format!("{ENV_TOP_K} must be at least 1"))),
        Ok(k) => Ok(k),
        Err(e) => Err(Error::Config(format!("{ENV_TOP_K}={raw:?}: {e}"))),
    }
}

pub fn truthy(raw: &str) -> bool {
    let v = raw.trim().to_ascii_lowercase();
    v == "1" || v == "true" || v == "yes" || v == "on"
}
