use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::{AppError, LayoutVariant};

/// Contents of `projlayout.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    #[serde(default)]
    pub layout: LayoutSection,
}

/// `[layout]` section: which resolver locates the base directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutSection {
    #[serde(default)]
    pub variant: LayoutVariant,
    /// Script path for `script-relative`, relative to the config file.
    pub script: Option<PathBuf>,
    /// Base directory for `explicit`, relative to the config file.
    pub base: Option<PathBuf>,
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        let section = &self.layout;
        match section.variant {
            LayoutVariant::ScriptRelative => {
                if section.script.is_none() {
                    return Err(AppError::config_error(
                        "layout.script is required when layout.variant = \"script-relative\"",
                    ));
                }
                if section.base.is_some() {
                    return Err(AppError::config_error(
                        "layout.base is only valid when layout.variant = \"explicit\"",
                    ));
                }
            }
            LayoutVariant::WorkingDirectory => {
                if section.script.is_some() || section.base.is_some() {
                    return Err(AppError::config_error(
                        "layout.script and layout.base are not used by \"working-directory\"",
                    ));
                }
            }
            LayoutVariant::Explicit => {
                if section.base.is_none() {
                    return Err(AppError::config_error(
                        "layout.base is required when layout.variant = \"explicit\"",
                    ));
                }
                if section.script.is_some() {
                    return Err(AppError::config_error(
                        "layout.script is only valid when layout.variant = \"script-relative\"",
                    ));
                }
            }
        }
        Ok(())
    }
}
