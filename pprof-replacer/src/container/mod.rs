//! Outer envelope of a profile file
//!
//! pprof files are stored either as the raw protobuf payload (`.pb`) or
//! wrapped in a gzip stream (`.pb.gz`). The format is chosen from the file
//! name alone, before anything is read.
//!
//! Output is always written unwrapped: a `.pb.gz` input produces a `.pb`
//! output. Re-compressing would change the output file contract.

use flate2::read::MultiGzDecoder;
use std::fmt;
use std::io::Read;
use std::path::Path;

use crate::domain::ReplacerError;

/// Envelope of an input file, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Uncompressed protobuf payload
    Raw,
    /// Payload wrapped in a gzip stream
    Gzip,
}

impl FileFormat {
    /// Detect the format from the text after the last `.` of the file name.
    ///
    /// Only `pb` and `gz` are recognized, case-sensitively. A name without a
    /// dot has no extension and is rejected.
    ///
    /// # Errors
    /// `UnsupportedFormat` for any other extension.
    pub fn from_path(path: &Path) -> Result<Self, ReplacerError> {
        match extension(path) {
            Some("gz") => Ok(Self::Gzip),
            Some("pb") => Ok(Self::Raw),
            _ => Err(ReplacerError::UnsupportedFormat),
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw => write!(f, "pb"),
            Self::Gzip => write!(f, "pb.gz"),
        }
    }
}

// `Path::extension` treats a leading dot as part of the stem (".pb" has no
// extension); here any dot in the file name counts.
fn extension(path: &Path) -> Option<&str> {
    let name = path.file_name()?.to_str()?;
    name.rfind('.').map(|idx| &name[idx + 1..])
}

/// Strip the envelope, returning the protobuf payload.
///
/// # Errors
/// `Decompression` if `format` is `Gzip` and `bytes` is not a valid gzip
/// stream.
pub fn unwrap(bytes: Vec<u8>, format: FileFormat) -> Result<Vec<u8>, ReplacerError> {
    match format {
        FileFormat::Raw => Ok(bytes),
        FileFormat::Gzip => {
            let mut payload = Vec::new();
            MultiGzDecoder::new(bytes.as_slice())
                .read_to_end(&mut payload)
                .map_err(ReplacerError::Decompression)?;
            Ok(payload)
        }
    }
}
