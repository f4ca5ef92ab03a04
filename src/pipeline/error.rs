use thiserror::Error;

use crate::config::ConfigError;
use crate::index::IndexError;
use crate::ingest::IngestError;
use crate::matching::MatchError;
use crate::report::ReportError;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("index error: {0}")]
    Index(#[from] IndexError),

    #[error("matching error: {0}")]
    Match(#[from] MatchError),

    #[error("ingest error: {0}")]
    Ingest(#[from] IngestError),

    #[error("report error: {0}")]
    Report(#[from] ReportError),
}

impl PipelineError {
    /// Returns `true` if the document yielded no chunks to search.
    pub fn is_empty_index(&self) -> bool {
        match self {
            PipelineError::Index(err) => matches!(err, IndexError::EmptyIndex),
            PipelineError::Match(err) => err.is_empty_index(),
            _ => false,
        }
    }
}
