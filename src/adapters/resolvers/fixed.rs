use std::path::{Path, PathBuf};

use crate::adapters::filesystem::resolve_lenient;
use crate::domain::{AppError, LayoutVariant};
use crate::ports::BaseDirResolver;

/// Uses a caller-supplied base directory, which need not exist yet.
#[derive(Debug, Clone)]
pub struct FixedBaseDir {
    base: PathBuf,
}

impl FixedBaseDir {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }
}

impl BaseDirResolver for FixedBaseDir {
    fn variant(&self) -> LayoutVariant {
        LayoutVariant::Explicit
    }

    fn resolve(&self) -> Result<PathBuf, AppError> {
        resolve_lenient(&self.base)
            .map_err(|source| AppError::BaseDirUnresolved { path: self.base.clone(), source })
    }
}
