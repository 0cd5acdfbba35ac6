//! Whole-buffer output writes.

use crate::error::ConvertError;
use log::debug;
use std::fs;
use std::path::Path;

/// Writes `contents` to `path` in a single call, replacing any existing file.
///
/// An existing file is truncated in place, so its permissions are kept and a
/// symlink at `path` updates the file it points to.
pub fn write_output(path: &Path, contents: &str) -> Result<(), ConvertError> {
    debug!("Writing {} bytes to {}", contents.len(), path.display());

    fs::write(path, contents).map_err(|source| ConvertError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}
