//! Fixed-answer `BaseDirResolver` for unit tests.

use std::io;
use std::path::PathBuf;

use crate::domain::{AppError, LayoutVariant};
use crate::ports::BaseDirResolver;

#[derive(Clone, Debug)]
pub struct StaticResolver {
    base: Option<PathBuf>,
    variant: LayoutVariant,
}

impl StaticResolver {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: Some(base.into()), variant: LayoutVariant::Explicit }
    }

    /// Resolver whose `resolve` always fails.
    pub fn failing() -> Self {
        Self { base: None, variant: LayoutVariant::Explicit }
    }

    pub fn with_variant(mut self, variant: LayoutVariant) -> Self {
        self.variant = variant;
        self
    }
}

impl BaseDirResolver for StaticResolver {
    fn variant(&self) -> LayoutVariant {
        self.variant
    }

    fn resolve(&self) -> Result<PathBuf, AppError> {
        self.base.clone().ok_or_else(|| AppError::BaseDirUnresolved {
            path: PathBuf::from("<static>"),
            source: io::Error::new(io::ErrorKind::NotFound, "no base configured"),
        })
    }
}
