//! Errors raised when a selection is set up with inconsistent input.

use thiserror::Error;

use crate::models::StreamKind;

/// Errors that can occur when constructing a stream selector.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("No inclusion entry for {kind} stream {index}")]
    MissingEntry { kind: StreamKind, index: usize },

    #[error("Stream index {0} appears more than once")]
    DuplicateIndex(usize),
}

/// Result type for selection operations.
pub type SelectionResult<T> = Result<T, SelectionError>;
