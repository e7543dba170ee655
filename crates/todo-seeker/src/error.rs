//! Error types for the seeker crate.

use thiserror::Error;

/// Errors that can occur while executing queries.
///
/// Building a query never fails; these surface when clauses are evaluated.
#[derive(Debug, Clone, Error)]
pub enum SeekerError {
    /// A regex clause carries a pattern the regex engine rejects.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Result type for seeker operations.
pub type Result<T> = std::result::Result<T, SeekerError>;
