//! Filesystem operations needed to materialize a layout.

use std::io;
use std::path::Path;

/// Port for directory creation.
///
/// Errors are returned as raw `io::Error`; the caller attaches the path
/// when wrapping them into `AppError::Filesystem`.
pub trait LayoutFilesystem {
    /// Create a directory and all missing parents. No-op if it already exists
    /// as a directory; fails if the path exists as anything else.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Check whether a path is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;
}
