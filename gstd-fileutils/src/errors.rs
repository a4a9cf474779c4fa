use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for gstd-fileutils operations.
#[derive(Error, Debug)]
pub enum FileUtilsError {
    /// The FASTA validator rejected the file.
    #[error("File not in FASTA format: {path:?} (validator status {status})")]
    InvalidFormat { path: PathBuf, status: i32 },

    /// IO error occurred during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A result record could not be converted to or from JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for gstd-fileutils operations.
pub type Result<T> = std::result::Result<T, FileUtilsError>;
