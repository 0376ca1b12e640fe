//! Output file naming and writing

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::ReplacerError;

/// Suffix appended to the input stem to build the output file name.
pub const OUTPUT_SUFFIX: &str = "_new.pb";

/// Build the output file name for `input`.
///
/// The stem is the base file name up to its first `.`, so both `heap.pb` and
/// `heap.pb.gz` become `heap_new.pb`. The result has no directory component.
pub fn output_file_name(input: &Path) -> PathBuf {
    let base = input
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    let stem = base.split('.').next().unwrap_or_default();
    PathBuf::from(format!("{stem}{OUTPUT_SUFFIX}"))
}

/// Write `bytes` to `path`, replacing any existing file.
///
/// New files get mode `0o777` (before umask) on Unix.
///
/// # Errors
/// `Write` if the file cannot be created or fully written.
pub fn write_output(path: &Path, bytes: &[u8]) -> Result<(), ReplacerError> {
    let write_err = |source: std::io::Error| ReplacerError::Write { path: path.to_path_buf(), source };

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o777);
    }

    let mut file = options.open(path).map_err(write_err)?;
    file.write_all(bytes).map_err(write_err)?;
    file.flush().map_err(write_err)
}
