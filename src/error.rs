//! Unified error handling for timeline conversion.
//!
//! Every failure aborts the whole conversion; nothing is recoverable mid-run
//! and no output file is written once an error has been raised.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading, segmenting or rendering a timeline.
#[derive(Debug, Error)]
pub enum TimelineError {
    /// The input file is missing or unreadable.
    #[error("failed to read input file {}: {source}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input is not valid JSON, lacks `locations`, or holds a malformed fix.
    #[error("invalid location history in {}: {source}", path.display())]
    InputFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A command-line value (canvas, scale, stroke width) is malformed.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The rendered output could not be written.
    #[error("failed to write output file {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// GeoJSON serialization failed.
    #[error("failed to encode GeoJSON: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Result type for timeline operations.
pub type Result<T> = std::result::Result<T, TimelineError>;

/// Extension trait turning a missing value into a configuration error.
pub trait OptionExt<T> {
    fn ok_or_config(self, message: impl Into<String>) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_config(self, message: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| TimelineError::Config(message.into()))
    }
}
