//! Error types for the presearch library.
//!
//! All failures are represented by the [`PresearchError`] enum. Analysis
//! errors are surfaced to the caller rather than degraded silently: a query
//! kind without a registered tree builder is a configuration error, not an
//! excuse to index a weaker representation of the query.
//!
//! # Examples
//!
//! ```
//! use presearch::error::{PresearchError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(PresearchError::query("invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

/// The main error type for presearch operations.
#[derive(Error, Debug)]
pub enum PresearchError {
    /// No registered tree builder accepts the query kind.
    #[error("Unsupported query type: {0}")]
    UnsupportedQuery(String),

    /// Query-related errors (malformed query objects, invalid patterns, etc.)
    #[error("Query error: {0}")]
    Query(String),

    /// Analysis-related errors (term collection, token filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Resource exhausted
    #[error("Resource exhausted: {0}")]
    ResourceExhausted(String),
}

/// Result type alias for operations that may fail with [`PresearchError`].
pub type Result<T> = std::result::Result<T, PresearchError>;

impl PresearchError {
    /// Create a new unsupported-query error.
    pub fn unsupported_query<S: Into<String>>(msg: S) -> Self {
        PresearchError::UnsupportedQuery(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        PresearchError::Query(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        PresearchError::Analysis(msg.into())
    }

    /// Create a new invalid-operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        PresearchError::InvalidOperation(msg.into())
    }

    /// Create a new resource-exhausted error.
    pub fn resource_exhausted<S: Into<String>>(msg: S) -> Self {
        PresearchError::ResourceExhausted(msg.into())
    }
}
