//! Input boundary: loading records, splitting documents, resolving embeddings.
//!
//! Nothing here is part of the scoring contract. These are thin adapters that turn files
//! into the [`Chunk`] and [`Clause`] records the matcher consumes.

mod error;


pub use error::IngestError;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::document::{Chunk, Clause};
use crate::embedding::Embedder;

/// One input record: text plus an optional precomputed embedding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRecord {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f32>>,
}

impl TextRecord {
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            embedding: None,
        }
    }
}

/// Splits a document on line breaks and sentence punctuation.
///
/// Pieces are trimmed; only pieces longer than `min_chars` characters are kept.
pub fn split_into_chunks(text: &str, min_chars: usize) -> Vec<String> {
    text.split(['\n', '\r', '.', '!', '?'])
        .map(str::trim)
        .filter(|piece| piece.chars().count() > min_chars)
        .map(str::to_string)
        .collect()
}

/// Unwraps clause text stored as a list literal.
///
/// JSON lists and Python list reprs (either quote style, backslash escapes) yield their
/// first string; anything else comes back trimmed.
pub fn unwrap_clause_text(raw: &str) -> String {
    let trimmed = raw.trim();
    if !trimmed.starts_with('[') {
        return trimmed.to_string();
    }

    if let Ok(items) = serde_json::from_str::<Vec<String>>(trimmed) {
        return items
            .into_iter()
            .next()
            .unwrap_or_else(|| trimmed.to_string());
    }

    first_list_string(trimmed).unwrap_or_else(|| trimmed.to_string())
}

/// Parses the first element of a Python string-list literal such as `['a', "it's"]`.
///
/// The element must be followed by `,` or `]`.
fn first_list_string(literal: &str) -> Option<String> {
    let rest = literal.strip_prefix('[')?.trim_start();
    let mut chars = rest.chars();
    let quote = chars.next().filter(|c| *c == '\'' || *c == '"')?;

    let mut out = String::new();
    loop {
        match chars.next()? {
            c if c == quote => break,
            '\\' => push_escape(&mut out, &mut chars)?,
            c => out.push(c),
        }
    }

    match chars.as_str().trim_start().chars().next()? {
        ',' | ']' => Some(out),
        _ => None,
    }
}

fn push_escape(out: &mut String, chars: &mut std::str::Chars<'_>) -> Option<()> {
    let c = chars.next()?;
    match c {
        '\\' | '\'' | '"' => out.push(c),
        'n' => out.push('\n'),
        't' => out.push('\t'),
        'r' => out.push('\r'),
        '0' => out.push('\0'),
        'x' => out.push(hex_char(chars, 2)?),
        'u' => out.push(hex_char(chars, 4)?),
        'U' => out.push(hex_char(chars, 8)?),
        // Line continuation.
        '\n' => {}
        other => {
            out.push('\\');
            out.push(other);
        }
    }
    Some(())
}

fn hex_char(chars: &mut std::str::Chars<'_>, digits: usize) -> Option<char> {
    let hex: String = chars.by_ref().take(digits).collect();
    if hex.len() != digits {
        return None;
    }
    u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32)
}

/// Reads a JSON array of [`TextRecord`]s.
pub fn load_records(path: &Path) -> Result<Vec<TextRecord>, IngestError> {
    let raw = fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records: Vec<TextRecord> =
        serde_json::from_str(&raw).map_err(|source| IngestError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    info!(path = %path.display(), records = records.len(), "Records loaded");
    Ok(records)
}

/// Reads a plain-text document. Other formats need an upstream extractor.
pub fn load_document(path: &Path) -> Result<String, IngestError> {
    let is_txt = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));

    if !is_txt {
        return Err(IngestError::UnsupportedFileType {
            path: path.to_path_buf(),
        });
    }

    fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Splits a document into text-only records.
pub fn chunk_document(text: &str, min_chars: usize) -> Vec<TextRecord> {
    let records: Vec<TextRecord> = split_into_chunks(text, min_chars)
        .into_iter()
        .map(TextRecord::text_only)
        .collect();

    info!(chunks = records.len(), "Document chunked");
    records
}

/// Builds chunks with positional ids, embedding records that carry no vector.
pub fn embed_chunks(
    records: Vec<TextRecord>,
    embedder: &dyn Embedder,
) -> Result<Vec<Chunk>, IngestError> {
    Ok(resolve_embeddings(records, embedder)?
        .into_iter()
        .enumerate()
        .map(|(id, (text, embedding))| Chunk::new(id, text, embedding))
        .collect())
}

/// Builds clauses with positional ids, unwrapping list-literal texts first.
pub fn embed_clauses(
    records: Vec<TextRecord>,
    embedder: &dyn Embedder,
) -> Result<Vec<Clause>, IngestError> {
    let records = records
        .into_iter()
        .map(|record| TextRecord {
            text: unwrap_clause_text(&record.text),
            embedding: record.embedding,
        })
        .collect();

    Ok(resolve_embeddings(records, embedder)?
        .into_iter()
        .enumerate()
        .map(|(id, (text, embedding))| Clause::new(id, text, embedding))
        .collect())
}

/// Supplied vectors are kept verbatim; the index checks them. Missing ones are
/// embedded in one batch.
fn resolve_embeddings(
    records: Vec<TextRecord>,
    embedder: &dyn Embedder,
) -> Result<Vec<(String, Vec<f32>)>, IngestError> {
    let missing: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.embedding.is_none())
        .map(|(i, _)| i)
        .collect();

    let generated = if missing.is_empty() {
        Vec::new()
    } else {
        let texts: Vec<&str> = missing.iter().map(|&i| records[i].text.as_str()).collect();
        embed_each(&texts, &missing, embedder)?
    };
    let mut generated = generated.into_iter();

    debug!(
        records = records.len(),
        embedded = missing.len(),
        "Embeddings resolved"
    );

    let mut resolved = Vec::with_capacity(records.len());
    for record in records {
        let embedding = match record.embedding {
            Some(embedding) => embedding,
            None => generated.next().unwrap_or_default(),
        };
        resolved.push((record.text, embedding));
    }
    Ok(resolved)
}

/// Batch first; on failure retry one by one to name the offending record.
fn embed_each(
    texts: &[&str],
    positions: &[usize],
    embedder: &dyn Embedder,
) -> Result<Vec<Vec<f32>>, IngestError> {
    if let Ok(batch) = embedder.embed_batch(texts) {
        if batch.len() == texts.len() {
            return Ok(batch);
        }
    }

    texts
        .iter()
        .zip(positions)
        .map(|(text, &index)| {
            embedder
                .embed(text)
                .map_err(|source| IngestError::Embedding { index, source })
        })
        .collect()
}
