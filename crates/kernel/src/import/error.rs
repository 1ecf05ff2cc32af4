//! File import error types.
//!
//! Messages are shown verbatim in the frontend, so each one names the file
//! or extension involved.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while importing a file into a [`Table`](super::Table).
#[derive(Debug, Error)]
pub enum ImportError {
    /// The path does not exist.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// No loader is registered for the file extension.
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),

    /// The file exists but its contents could not be parsed.
    #[error("Failed to read CSV: {} ({details})", path.display())]
    Parse { path: PathBuf, details: String },

    /// Low-level I/O failure other than a missing file.
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
