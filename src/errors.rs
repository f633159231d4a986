//! Error taxonomy for the record/tree transformations.
//!
//! Structural and configuration problems fail fast with no partial output.
//! "Not found" is never an error: a missing ancestor target resolves to an
//! empty chain, an unresolvable parent makes the record a root.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("invalid input at index {index}: {reason}")]
    InvalidInput { index: usize, reason: String },

    #[error("record at index {index} is missing required field {field:?}")]
    InvalidRecord { index: usize, field: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("cyclic parent reference involving id {id}")]
    CyclicReference { id: String },
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, TreeError>;
