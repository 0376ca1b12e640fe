//! End-to-end rewrite of one profile file
//!
//! ```text
//! path ──▶ FileFormat::from_path ──▶ fs::read ──▶ container::unwrap
//!                                                       │
//!   write_output ◀── profile::encode ◀── rewrite ◀── profile::decode
//! ```
//!
//! Every stage fails fast. Nothing is written until the new payload has been
//! fully encoded, so a failed run never leaves a partial output file.

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::container::{self, FileFormat};
use crate::domain::{Replacement, ReplacerError};
use crate::output::{output_file_name, write_output};
use crate::profile::{self, rewrite_string_table};

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceSummary {
    pub format: FileFormat,
    /// Number of string-table entries rewritten
    pub replaced: usize,
    /// Size of the decoded payload, after decompression
    pub input_bytes: usize,
    pub output_bytes: usize,
    pub output: PathBuf,
}

/// Decode `payload`, apply `replacement` and encode the result.
///
/// Returns the new payload and the number of entries changed.
///
/// # Errors
/// `MalformedProfile` if `payload` is not a valid profile, `Encode` on an
/// internal encoding defect.
pub fn transform(
    payload: &[u8],
    replacement: &Replacement,
) -> Result<(Vec<u8>, usize), ReplacerError> {
    let mut profile = profile::decode(payload)?;
    let replaced = rewrite_string_table(&mut profile, &replacement.from, &replacement.to);
    let encoded = profile::encode(&profile)?;
    Ok((encoded, replaced))
}

/// Rewrite the profile at `input` and write `<stem>_new.pb` into `output_dir`.
///
/// The format is checked from the file name before the file is opened.
///
/// # Errors
/// - `UnsupportedFormat` if the extension is neither `.pb` nor `.gz`
/// - `Read` / `Write` on I/O failure
/// - `Decompression` if a `.gz` input is not valid gzip
/// - `MalformedProfile` / `Encode` from the transform
pub fn replace_symbol(
    input: &Path,
    replacement: &Replacement,
    output_dir: &Path,
) -> Result<ReplaceSummary, ReplacerError> {
    let format = FileFormat::from_path(input)?;
    debug!("{}: detected {format} input", input.display());

    // Whole file in one call; the handle is closed before decoding starts.
    let raw = fs::read(input).map_err(|source| ReplacerError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    let payload = container::unwrap(raw, format)?;

    let (encoded, replaced) = transform(&payload, replacement)?;

    let output = output_dir.join(output_file_name(input));
    write_output(&output, &encoded)?;

    Ok(ReplaceSummary {
        format,
        replaced,
        input_bytes: payload.len(),
        output_bytes: encoded.len(),
        output,
    })
}
