//! Centralized error types for eml2csv.

use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the eml2csv library.
///
/// None of these are recovered internally: the first failure unwinds to
/// the caller and the run produces no output file.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The input directory does not exist or is not a directory.
    #[error("Input directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    /// I/O error with the associated file path.
    #[error("I/O error reading '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The message parser rejected a file's content.
    #[error("Failed to parse '{path}': {reason}")]
    Parse { path: PathBuf, reason: String },

    /// The destination CSV could not be created or written.
    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The CSV serializer failed.
    #[error("CSV serialization failed for '{path}': {source}")]
    Csv { path: PathBuf, source: csv::Error },
}

/// Convenience alias for `Result<T, ConvertError>`.
pub type Result<T> = std::result::Result<T, ConvertError>;

impl ConvertError {
    /// Create an `Io` variant from a path and an `io::Error`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a `Write` variant from a path and an `io::Error`.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Create a `Parse` variant from a path and a reason.
    pub fn parse(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
