//! Pure parse/validate for tool configuration (`config.toml`).

use crate::domain::AppError;
use crate::domain::configuration::AppConfig;

/// Parse and validate configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
