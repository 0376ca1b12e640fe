//! Structured error types for pprof-replacer
//!
//! Using thiserror for automatic Display implementation and error chaining.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReplacerError {
    #[error("unsupported file format. only .pb or .pb.gz is supported")]
    UnsupportedFormat,

    #[error("needs to specify a target file")]
    MissingTarget,

    #[error("failed to read the target pprof file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decompress the target pprof file: {0}")]
    Decompression(#[source] std::io::Error),

    #[error("failed to unmarshal the target pprof data: {0}")]
    MalformedProfile(#[from] prost::DecodeError),

    #[error("failed to marshal the pprof data: wrote {written} bytes, expected {expected}")]
    Encode { expected: usize, written: usize },
}

impl ReplacerError {
    /// True for errors caused by how the tool was invoked rather than by
    /// the content of the input.
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::UnsupportedFormat | Self::MissingTarget)
    }

    /// True for failures that indicate a defect in this tool, not in the input.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Encode { .. })
    }
}
