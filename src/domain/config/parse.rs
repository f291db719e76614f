//! Pure parse/validate for `projlayout.toml`.

use crate::domain::AppError;

use super::LayoutConfig;

/// Parse and validate layout configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<LayoutConfig, AppError> {
    let config: LayoutConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
