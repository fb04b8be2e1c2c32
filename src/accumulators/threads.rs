use crate::error::Result;
use crate::groupby::Accumulator;
use std::fmt;

/// Authors participating in one thread, in arrival order, duplicates kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthorList(Vec<String>);

impl AuthorList {
    pub fn authors(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for AuthorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl Accumulator for AuthorList {
    type Value = String;
    type Output = AuthorList;

    fn parse_value(raw: &str) -> Result<String> {
        Ok(raw.trim().to_string())
    }

    fn fold(&mut self, author: String) {
        self.0.push(author);
    }

    fn finalize(self) -> AuthorList {
        self
    }
}
