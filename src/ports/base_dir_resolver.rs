//! Base directory resolution.
//!
//! Each layout variant supplies one resolver. Resolution runs once per
//! initialization; the result anchors every managed directory.

use std::path::PathBuf;

use crate::domain::{AppError, LayoutVariant};

/// Port producing the absolute base directory of a project layout.
pub trait BaseDirResolver {
    /// The variant this resolver implements.
    fn variant(&self) -> LayoutVariant;

    /// Resolve the absolute base directory.
    fn resolve(&self) -> Result<PathBuf, AppError>;
}
