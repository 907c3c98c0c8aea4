// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Failures that cross the extractor boundary.
///
/// Missing tables, short rows and unparseable numbers are *not* errors;
/// they degrade into empty or excluded data instead.
#[derive(Debug, Error)]
pub enum TranscriptError {
    /// Input can't be treated as an HTML text at all.
    #[error("document is not parseable as HTML: {reason}")]
    ParseFatal { reason: String },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TranscriptError {
    pub fn parse_fatal(reason: impl Into<String>) -> Self {
        TranscriptError::ParseFatal { reason: reason.into() }
    }

    pub fn is_parse_fatal(&self) -> bool {
        matches!(self, TranscriptError::ParseFatal { .. })
    }
}
