//! Layout configuration loading from the working directory.

use std::fs;
use std::path::Path;

use crate::adapters::BaseDirSource;
use crate::domain::config;
use crate::domain::{AppError, LayoutConfig, LayoutVariant};

/// Load `projlayout.toml` from `root`, if present.
pub fn load_config(root: &Path) -> Result<Option<LayoutConfig>, AppError> {
    let config_path = config::paths::config(root);
    if !config_path.is_file() {
        return Ok(None);
    }

    let content = fs::read_to_string(&config_path)?;
    config::parse_config_content(&content).map(Some)
}

/// Turn a parsed configuration into a resolver; paths are relative to `root`.
pub fn source_from_config(root: &Path, config: &LayoutConfig) -> Result<BaseDirSource, AppError> {
    let section = &config.layout;
    match (section.variant, &section.script, &section.base) {
        (LayoutVariant::ScriptRelative, Some(script), _) => {
            Ok(BaseDirSource::ScriptRelative(root.join(script)))
        }
        (LayoutVariant::Explicit, _, Some(base)) => Ok(BaseDirSource::Explicit(root.join(base))),
        (LayoutVariant::WorkingDirectory, _, _) => Ok(BaseDirSource::WorkingDirectory),
        (variant, _, _) => Err(AppError::config_error(format!(
            "layout.variant = \"{}\" is missing its path",
            variant.label()
        ))),
    }
}

/// Resolver selected by `root/projlayout.toml`, defaulting to the working directory.
pub fn load_source(root: &Path) -> Result<BaseDirSource, AppError> {
    match load_config(root)? {
        Some(config) => source_from_config(root, &config),
        None => Ok(BaseDirSource::WorkingDirectory),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_config_defaults_to_working_directory() {
        let dir = TempDir::new().expect("failed to create temp dir");

        assert_eq!(load_config(dir.path()).unwrap(), None);
        assert_eq!(load_source(dir.path()).unwrap(), BaseDirSource::WorkingDirectory);
    }

    #[test]
    fn script_path_is_relative_to_config_root() {
        let dir = TempDir::new().expect("failed to create temp dir");
        fs::write(
            dir.path().join("projlayout.toml"),
            "[layout]\nvariant = \"script-relative\"\nscript = \"scripts/reduce.py\"\n",
        )
        .unwrap();

        let source = load_source(dir.path()).unwrap();

        assert_eq!(source, BaseDirSource::ScriptRelative(dir.path().join("scripts/reduce.py")));
    }

    #[test]
    fn explicit_base_is_relative_to_config_root() {
        let dir = TempDir::new().expect("failed to create temp dir");
        fs::write(
            dir.path().join("projlayout.toml"),
            "[layout]\nvariant = \"explicit\"\nbase = \"analysis\"\n",
        )
        .unwrap();

        let source = load_source(dir.path()).unwrap();

        assert_eq!(source, BaseDirSource::Explicit(dir.path().join("analysis")));
    }

    #[test]
    fn invalid_config_is_reported() {
        let dir = TempDir::new().expect("failed to create temp dir");
        fs::write(dir.path().join("projlayout.toml"), "[layout]\nvariant = \"explicit\"\n")
            .unwrap();

        assert!(matches!(load_source(dir.path()), Err(AppError::Configuration(_))));
    }
}
