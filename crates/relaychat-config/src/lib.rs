//! relaychat configuration system.
//!
//! TOML-based configuration shared by the relay server and the chat
//! client. All sections use defaults so partial configs work out of the
//! box. The upstream credential never lives in the file; it comes from
//! the environment (see [`env::require_env`]).

pub mod env;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use env::{load_dotenv, require_env};
pub use schema::{RelayChatConfig, API_KEY_ENV, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use relaychat_common::ConfigError;

/// Load and validate config.
///
/// Reads `path` when given, otherwise the platform default path (creating
/// a commented default file if none exists).
pub fn load_config(path: Option<&Path>) -> Result<RelayChatConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed TOML string.
pub fn config_to_toml(config: &RelayChatConfig) -> String {
    toml::to_string_pretty(config)
        .unwrap_or_else(|e| format!("# failed to serialize config: {e}\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_toml_contains_all_sections() {
        let toml = config_to_toml(&RelayChatConfig::default());
        assert!(toml.contains("[server]"));
        assert!(toml.contains("[upstream]"));
        assert!(toml.contains("[client]"));
        assert!(toml.contains("[logging]"));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let toml = config_to_toml(&RelayChatConfig::default());
        let parsed: RelayChatConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.server.port, 3000);
        assert_eq!(parsed.upstream.model, "deepseek-chat");
    }

    #[test]
    fn load_config_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nport = 0\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn load_config_missing_override_is_file_not_found() {
        let err = load_config(Some(Path::new("/tmp/relaychat-missing.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }
}
