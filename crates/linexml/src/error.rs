//! Error types for linexml CLI operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The error type for linexml CLI operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input file does not exist or is not a regular file.
    #[error("Cannot find input file {}", .0.display())]
    InputNotFound(PathBuf),

    /// JSON rendering failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading, parsing or writing records failed.
    #[error(transparent)]
    Records(#[from] linexml_records::Error),
}

impl From<linexml_records::ParseError> for Error {
    fn from(err: linexml_records::ParseError) -> Self {
        Self::Records(err.into())
    }
}

/// A specialized Result type for linexml operations.
pub type Result<T> = std::result::Result<T, Error>;
