use std::path::PathBuf;
use thiserror::Error;

use crate::embedding::EmbeddingError;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse records in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported document type: {path} (expected .txt)")]
    UnsupportedFileType { path: PathBuf },

    #[error("failed to embed record {index}: {source}")]
    Embedding {
        index: usize,
        #[source]
        source: EmbeddingError,
    },
}
