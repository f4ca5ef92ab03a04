//! Chunks and clauses: the two record sets the matcher compares.

use serde::{Deserialize, Serialize};

/// A segment of the analysed document.
///
/// `id` is the chunk's position in the document's ordered chunk sequence and is the
/// deduplication key downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    pub id: usize,
    pub text: String,
    pub embedding: Vec<f32>,
}

impl Chunk {
    pub fn new(id: usize, text: impl Into<String>, embedding: Vec<f32>) -> Self {
        Self {
            id,
            text: text.into(),
            embedding,
        }
    }
}

/// A reference clause searched for in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clause {
    pub id: usize,
    pub text: String,
    pub embedding: Vec<f32>,
}

impl Clause {
    pub fn new(id: usize, text: impl Into<String>, embedding: Vec<f32>) -> Self {
        Self {
            id,
            text: text.into(),
            embedding,
        }
    }
}

/// Looks up a record's text by id, falling back to a positional scan when ids are not
/// dense.
pub(crate) fn text_by_id<'a, T, F>(records: &'a [T], id: usize, key: F) -> Option<&'a str>
where
    F: Fn(&'a T) -> (usize, &'a str),
{
    if let Some(record) = records.get(id) {
        let (record_id, text) = key(record);
        if record_id == id {
            return Some(text);
        }
    }

    records
        .iter()
        .map(&key)
        .find(|(record_id, _)| *record_id == id)
        .map(|(_, text)| text)
}
