//! Parley configuration.
//!
//! TOML-based settings with serde defaults for every field, plus
//! environment-only credentials. Both are loaded once at startup.
//!
//! ```rust,no_run
//! use parley_config::{load_config, Credentials};
//!
//! let mut config = load_config().expect("failed to load config");
//! let credentials = Credentials::from_env(&config.auth.providers);
//! parley_config::apply_env_overrides(&mut config, &credentials).expect("invalid overrides");
//! ```

pub mod credentials;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use credentials::{oauth_env_prefix, Credentials};
pub use schema::{
    AuthConfig, ChatConfig, CompletionConfig, LogLevel, LoggingConfig, ParleyConfig, ProviderKind,
};

use parley_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path and validate it.
///
/// Creates a commented default file if none exists.
pub fn load_config() -> Result<ParleyConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path and validate it.
pub fn load_config_from(path: &Path) -> Result<ParleyConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Apply environment overrides and validate the result again.
///
/// An override can make a valid file invalid, e.g. `PARLEY_AUTH_REQUIRED=1`
/// with no `[auth] providers`.
pub fn apply_env_overrides(
    config: &mut ParleyConfig,
    credentials: &Credentials,
) -> Result<(), ConfigError> {
    credentials.apply_overrides(config);
    validation::validate(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &ParleyConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&ParleyConfig::default());
        assert!(json.contains("\"completion\""));
        assert!(json.contains("\"auth\""));
        assert!(json.contains("\"chat\""));
        assert!(json.contains("\"logging\""));
        assert!(json.contains("\"gemini\""));
    }

    #[test]
    fn auth_required_override_without_providers_is_rejected() {
        let mut config = ParleyConfig::default();
        let credentials = Credentials::from_lookup(&[], |key| {
            (key == credentials::AUTH_REQUIRED_VAR).then(|| "1".to_string())
        });

        let err = apply_env_overrides(&mut config, &credentials).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(config.auth.required);
    }

    #[test]
    fn auth_required_override_with_providers_is_accepted() {
        let mut config = ParleyConfig::default();
        config.auth.providers = vec!["github".to_string()];
        let credentials = Credentials::from_lookup(&config.auth.providers, |key| {
            (key == credentials::AUTH_REQUIRED_VAR).then(|| "true".to_string())
        });

        apply_env_overrides(&mut config, &credentials).unwrap();
        assert!(config.auth.required);
    }

    #[test]
    fn load_config_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[completion]\nmax_tokens = 0\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let json = config_to_json(&ParleyConfig::default());
        let parsed: ParleyConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.completion.model, "gemini-2.0-flash");
        assert_eq!(parsed.logging.level, LogLevel::Info);
    }
}
