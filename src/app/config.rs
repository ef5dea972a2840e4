//! Tool configuration loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::domain::configuration::{AppConfig, parse_config_content};

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "HARDENKIT_CONFIG";

/// Config file read when neither `--config` nor the environment names one.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/hardenkit/config.toml";

/// Load configuration from `explicit`, `$HARDENKIT_CONFIG`, or the system
/// default, falling back to built-in defaults when none exists.
///
/// A file named by `explicit` or the environment must exist.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, AppError> {
    load_config_with_default(explicit, Path::new(DEFAULT_CONFIG_PATH))
}

fn load_config_with_default(
    explicit: Option<&Path>,
    default_path: &Path,
) -> Result<AppConfig, AppError> {
    let requested = explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(CONFIG_ENV_VAR).filter(|v| !v.is_empty()).map(PathBuf::from));

    let path = match requested {
        Some(path) => path,
        None if default_path.is_file() => default_path.to_path_buf(),
        None => {
            tracing::debug!("no config file found, using defaults");
            return Ok(AppConfig::default());
        }
    };

    let content = fs::read_to_string(&path).map_err(|err| {
        AppError::config_error(format!("Failed to read config {}: {}", path.display(), err))
    })?;
    let config = parse_config_content(&content)?;
    tracing::debug!(path = %path.display(), "config loaded");
    Ok(config)
}
