//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = ParleyConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_zero_max_tokens() {
    let mut config = ParleyConfig::default();
    config.completion.max_tokens = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("completion.max_tokens"));
}

#[test]
fn catches_temperature_out_of_range() {
    let mut config = ParleyConfig::default();
    config.completion.temperature = 2.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("completion.temperature"));
}

#[test]
fn catches_nan_temperature() {
    let mut config = ParleyConfig::default();
    config.completion.temperature = f64::NAN;
    assert!(validate(&config).is_err());
}

#[test]
fn catches_empty_model() {
    let mut config = ParleyConfig::default();
    config.completion.model = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("completion.model"));
}

#[test]
fn catches_timeout_too_large() {
    let mut config = ParleyConfig::default();
    config.completion.timeout_secs = 3600;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("completion.timeout_secs"));
}

#[test]
fn required_auth_needs_a_provider() {
    let mut config = ParleyConfig::default();
    config.auth.required = true;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("auth.required"));

    config.auth.providers = vec!["github".into()];
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_malformed_provider_id() {
    let mut config = ParleyConfig::default();
    config.auth.providers = vec!["GitHub".into(), "azure-ad".into()];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("'GitHub'"));
    assert!(!err.contains("'azure-ad'"));
}

#[test]
fn catches_duplicate_provider() {
    let mut config = ParleyConfig::default();
    config.auth.providers = vec!["google".into(), "google".into()];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("listed twice"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = ParleyConfig::default();
    config.completion.max_tokens = 0;
    config.completion.temperature = -1.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("completion.max_tokens"));
    assert!(err.contains("completion.temperature"));
    assert!(err.contains("; "));
}
