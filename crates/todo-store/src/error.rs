//! Error types for todo storage.

use std::path::PathBuf;

use thiserror::Error;
use todo_seeker::SeekerError;

use crate::record::TodoId;

/// Errors that can occur in store operations.
///
/// A record that does not exist is not an error for [`TodoStore::get`]; it is
/// reported as `Ok(None)`. [`StoreError::NotFound`] is only produced by
/// callers that require the record, such as [`TodoStore::resolve`].
///
/// [`TodoStore::get`]: crate::TodoStore::get
/// [`TodoStore::resolve`]: crate::TodoStore::resolve
#[derive(Debug, Error)]
pub enum StoreError {
    /// The identifier string is not shaped like a todo id.
    #[error("invalid todo id '{input}': {reason}")]
    InvalidId { input: String, reason: String },

    /// A well-formed id that no record carries.
    #[error("todo '{0}' not found")]
    NotFound(TodoId),

    /// A record could not be created from the supplied fields.
    #[error("invalid todo: {0}")]
    InvalidRecord(String),

    /// The query could not be evaluated (e.g. a malformed pattern).
    #[error("query failed: {0}")]
    Query(#[from] SeekerError),

    /// The backing collection cannot be accessed.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Reading or writing the collection file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The collection file does not hold a valid todo array.
    #[error("malformed collection file {}: {source}", path.display())]
    Serialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Create an invalid-record error.
    pub fn invalid_record(msg: impl Into<String>) -> Self {
        Self::InvalidRecord(msg.into())
    }

    /// Returns `true` for errors caused by bad caller input rather than the store.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            StoreError::InvalidId { .. } | StoreError::InvalidRecord(_) | StoreError::Query(_)
        )
    }

    /// Returns `true` if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
