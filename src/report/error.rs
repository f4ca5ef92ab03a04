use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("match references unknown chunk {chunk_id}")]
    UnknownChunk { chunk_id: usize },

    #[error("match references unknown clause {clause_id}")]
    UnknownClause { clause_id: usize },

    #[error("failed to write report to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}
