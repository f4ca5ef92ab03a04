use thiserror::Error;

use crate::index::IndexError;

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("index error: {0}")]
    Index(#[from] IndexError),

    #[error("search failed for clause {clause_id}: {source}")]
    Search {
        clause_id: usize,
        #[source]
        source: IndexError,
    },

    #[error("invalid match configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl MatchError {
    /// Returns the underlying index error, if any.
    pub fn index_error(&self) -> Option<&IndexError> {
        match self {
            MatchError::Index(err) | MatchError::Search { source: err, .. } => Some(err),
            MatchError::InvalidConfig { .. } => None,
        }
    }

    /// Returns `true` if matching failed because the document produced no chunks.
    pub fn is_empty_index(&self) -> bool {
        matches!(self.index_error(), Some(IndexError::EmptyIndex))
    }
}
