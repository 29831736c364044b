//! Types for probe operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while probing a media file.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to run {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: io::Error,
    },

    #[error("{tool} failed with exit code {exit_code}: {message}")]
    CommandFailed {
        tool: String,
        exit_code: i32,
        message: String,
    },

    #[error("Failed to read probe output: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse probe output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for probe operations.
pub type ProbeResult<T> = Result<T, ProbeError>;
