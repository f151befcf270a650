//! Process environment: `.env` loading and required credentials.

use std::path::Path;

use relaychat_common::ConfigError;

/// Load `KEY=VALUE` lines from a `.env` file into the process environment.
///
/// Variables that are already set are left alone. Returns the number of
/// variables applied; a missing file applies none.
pub fn load_dotenv(path: &Path) -> usize {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return 0;
    };

    let mut applied = 0;
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = value.trim().trim_matches('"').trim_matches('\'');
            if std::env::var_os(key).is_none() {
                std::env::set_var(key, value);
                applied += 1;
            }
        }
    }
    tracing::debug!(path = %path.display(), applied, "loaded .env");
    applied
}

/// Read a required secret from the environment.
///
/// Unset and blank values are both treated as missing.
pub fn require_env(name: &str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingCredential(name.to_string())),
    }
}
