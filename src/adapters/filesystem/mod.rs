//! Local filesystem adapter and path helpers shared by the resolvers.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::ports::LayoutFilesystem;

/// `LayoutFilesystem` backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl LayoutFilesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

/// Make `path` absolute and resolve symlinks in its longest existing prefix.
///
/// Components are resolved left to right, so a `..` after a symlink moves to
/// the parent of the link target. Once a component is missing, the rest is
/// joined lexically.
pub(crate) fn resolve_lenient(path: &Path) -> io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;

    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::Prefix(..) | Component::RootDir => {
                resolved.push(component.as_os_str());
            }
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            Component::Normal(name) => {
                resolved.push(name);
                if let Ok(real) = fs::canonicalize(&resolved) {
                    resolved = real;
                }
            }
        }
    }
    Ok(resolved)
}
