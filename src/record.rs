use crate::config::FIELD_COUNT;
use std::fmt;

const ID: usize = 0;
const TAGS: usize = 2;
const AUTHOR_ID: usize = 3;
const BODY: usize = 4;
const NODE_TYPE: usize = 5;
const PARENT_ID: usize = 6;
const ADDED_AT: usize = 8;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeType {
    Question,
    Answer,
    Other(String),
}

impl NodeType {
    fn from_field(raw: &str) -> Self {
        match raw {
            "question" => NodeType::Question,
            "answer" => NodeType::Answer,
            other => NodeType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeType::Question => f.write_str("question"),
            NodeType::Answer => f.write_str("answer"),
            NodeType::Other(s) => f.write_str(s),
        }
    }
}

/// One reassembled forum post: exactly [`FIELD_COUNT`] tab-separated fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    fields: Vec<String>,
}

impl Record {
    /// Returns `None` unless `fields` holds exactly [`FIELD_COUNT`] entries.
    pub fn from_fields(fields: Vec<String>) -> Option<Self> {
        (fields.len() == FIELD_COUNT).then_some(Self { fields })
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn id(&self) -> &str {
        &self.fields[ID]
    }

    /// Space-separated tag list; only meaningful on questions.
    pub fn tags(&self) -> &str {
        &self.fields[TAGS]
    }

    pub fn author_id(&self) -> &str {
        &self.fields[AUTHOR_ID]
    }

    pub fn body(&self) -> &str {
        &self.fields[BODY]
    }

    pub fn node_type(&self) -> NodeType {
        NodeType::from_field(&self.fields[NODE_TYPE])
    }

    /// Post this one replies to; empty on questions.
    pub fn parent_id(&self) -> &str {
        &self.fields[PARENT_ID]
    }

    /// `<date> <HH:MM:SS>` creation timestamp.
    pub fn added_at(&self) -> &str {
        &self.fields[ADDED_AT]
    }

    /// Body length with the quoting correction applied.
    ///
    /// Bodies that quote other posts carry literal `"` characters; when at
    /// least one is present the length is reduced by `quotes / 2 + 1`.
    /// Lengths count UTF-8 bytes, so non-ASCII text weighs more than one.
    pub fn adjusted_body_length(&self) -> i64 {
        adjusted_length(self.body())
    }
}

pub fn adjusted_length(body: &str) -> i64 {
    let length = body.len() as i64;
    let quotes = body.bytes().filter(|&b| b == b'"').count() as i64;
    if quotes == 0 {
        length
    } else {
        length - (quotes / 2 + 1)
    }
}

#[cfg(test)]
pub(crate) fn sample_fields(
    id: &str,
    tags: &str,
    author: &str,
    body: &str,
    node_type: &str,
    parent: &str,
    added_at: &str,
) -> Vec<String> {
    let mut fields = vec![String::new(); FIELD_COUNT];
    fields[ID] = id.into();
    fields[1] = format!("title of {id}");
    fields[TAGS] = tags.into();
    fields[AUTHOR_ID] = author.into();
    fields[BODY] = body.into();
    fields[NODE_TYPE] = node_type.into();
    fields[PARENT_ID] = parent.into();
    fields[ADDED_AT] = added_at.into();
    fields
}
