use std::path::PathBuf;

use crate::domain::{AppError, LayoutVariant};
use crate::ports::BaseDirResolver;

use super::{FixedBaseDir, ScriptRelativeResolver, WorkingDirectoryResolver};

/// Resolver chosen at construction time from one of the layout variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseDirSource {
    /// Parent of the directory holding this script.
    ScriptRelative(PathBuf),
    /// Current working directory at resolution time.
    WorkingDirectory,
    /// Caller-supplied base directory.
    Explicit(PathBuf),
}

impl BaseDirResolver for BaseDirSource {
    fn variant(&self) -> LayoutVariant {
        match self {
            BaseDirSource::ScriptRelative(_) => LayoutVariant::ScriptRelative,
            BaseDirSource::WorkingDirectory => LayoutVariant::WorkingDirectory,
            BaseDirSource::Explicit(_) => LayoutVariant::Explicit,
        }
    }

    fn resolve(&self) -> Result<PathBuf, AppError> {
        match self {
            BaseDirSource::ScriptRelative(script) => {
                ScriptRelativeResolver::new(script.clone()).resolve()
            }
            BaseDirSource::WorkingDirectory => WorkingDirectoryResolver::new().resolve(),
            BaseDirSource::Explicit(base) => FixedBaseDir::new(base.clone()).resolve(),
        }
    }
}
