use std::fs;
use std::path::PathBuf;

use crate::domain::{AppError, LayoutVariant};
use crate::ports::BaseDirResolver;

/// Resolves the base directory to the process working directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkingDirectoryResolver;

impl WorkingDirectoryResolver {
    pub fn new() -> Self {
        Self
    }
}

impl BaseDirResolver for WorkingDirectoryResolver {
    fn variant(&self) -> LayoutVariant {
        LayoutVariant::WorkingDirectory
    }

    fn resolve(&self) -> Result<PathBuf, AppError> {
        let unresolved = |source| AppError::BaseDirUnresolved { path: PathBuf::from("."), source };
        let cwd = std::env::current_dir().map_err(unresolved)?;
        fs::canonicalize(&cwd).map_err(|source| AppError::BaseDirUnresolved { path: cwd, source })
    }
}
