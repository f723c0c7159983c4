//! Scoped access to source files.

use std::fs::File;
use std::path::Path;

use crate::error::{IngestError, Result};

/// Open `path` for reading, run `read` on the handle, and close it before
/// returning, whether `read` succeeded or not.
pub(crate) fn with_source_file<T>(
    path: &Path,
    read: impl FnOnce(File) -> Result<T>,
) -> Result<T> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    read(file).map_err(|err| err.with_path(path))
}
