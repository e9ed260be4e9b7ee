use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Custom error types for produce-tally
#[derive(Debug, Error)]
pub enum TallyError {
    #[error("Cannot read {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot write {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed snapshot line {line}: {content:?}")]
    MalformedSnapshot { line: usize, content: String },

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
