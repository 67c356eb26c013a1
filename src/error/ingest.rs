//! Ingestion error module.
//!
//! Errors raised while streaming a word list into the dictionary.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a word list.
#[derive(Error, Debug)]
pub enum IngestError {
    /// The word list could not be opened.
    #[error("Failed to open word list {path:?}: {source}")]
    Open {
        /// Path that was requested
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// A line could not be read (IO failure or invalid UTF-8).
    #[error("Failed to read word list at line {line}: {source}")]
    Read {
        /// 1-based line number
        line: usize,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}
