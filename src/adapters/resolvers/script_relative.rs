use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, LayoutVariant};
use crate::ports::BaseDirResolver;

/// Resolves the base directory one level above the directory holding a script.
///
/// For `/proj/scripts/reduce.py` the base is `/proj`. A script placed directly
/// in the filesystem root resolves to the root itself.
#[derive(Debug, Clone)]
pub struct ScriptRelativeResolver {
    script: PathBuf,
}

impl ScriptRelativeResolver {
    pub fn new(script: impl Into<PathBuf>) -> Self {
        Self { script: script.into() }
    }

    pub fn script(&self) -> &Path {
        &self.script
    }

    fn unresolved(&self, source: io::Error) -> AppError {
        AppError::BaseDirUnresolved { path: self.script.clone(), source }
    }
}

impl BaseDirResolver for ScriptRelativeResolver {
    fn variant(&self) -> LayoutVariant {
        LayoutVariant::ScriptRelative
    }

    fn resolve(&self) -> Result<PathBuf, AppError> {
        if !self.script.exists() {
            return Err(self.unresolved(io::Error::new(
                io::ErrorKind::NotFound,
                "script does not exist",
            )));
        }

        let script = std::path::absolute(&self.script).map_err(|e| self.unresolved(e))?;
        let script_dir = script.parent().unwrap_or(&script);
        let script_dir = fs::canonicalize(script_dir).map_err(|e| self.unresolved(e))?;

        let base = script_dir.parent().map(Path::to_path_buf);
        Ok(base.unwrap_or(script_dir))
    }
}
