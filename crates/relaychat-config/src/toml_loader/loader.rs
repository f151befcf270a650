//! Core TOML config loading: read from path or platform default.

use crate::schema::RelayChatConfig;
use crate::validation;
use relaychat_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Missing fields fall back to serde defaults. If validation fails, a
/// warning is logged and the parsed config is returned as-is; callers that
/// need a valid config run [`validation::validate`] themselves.
pub fn load_from_path(path: &Path) -> Result<RelayChatConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: RelayChatConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/relaychat/config.toml`
/// On Linux: `~/.config/relaychat/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<RelayChatConfig, ConfigError> {
    match default_config_path() {
        Ok(path) => load_or_create(&path),
        Err(e) => {
            warn!("{e}; using default config");
            Ok(RelayChatConfig::default())
        }
    }
}

/// Load `path`, writing a commented default file there when it is missing.
///
/// The default file is optional: failing to create it falls back to
/// defaults. A file that exists but cannot be parsed is still an error.
pub fn load_or_create(path: &Path) -> Result<RelayChatConfig, ConfigError> {
    match load_from_path(path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            if let Err(e) = create_default_config(path) {
                warn!("{e}; using default config");
            }
            Ok(RelayChatConfig::default())
        }
        Err(e) => Err(e),
    }
}
