//! Full configuration validation.
//!
//! Each check appends to a shared error list; `validate` folds them into a
//! single `ConfigError`.

mod auth;
mod helpers;

#[cfg(test)]
mod tests;

use crate::schema::ParleyConfig;
use parley_common::ConfigError;

use helpers::{validate_range, validate_range_f64};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ParleyConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_completion(&mut errors, config);
    auth::validate_auth(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_completion(errors: &mut Vec<String>, config: &ParleyConfig) {
    let completion = &config.completion;
    if completion.model.trim().is_empty() {
        errors.push("completion.model must not be empty".into());
    }
    validate_range(
        errors,
        "completion.max_tokens",
        completion.max_tokens,
        1,
        65536,
    );
    validate_range_f64(
        errors,
        "completion.temperature",
        completion.temperature,
        0.0,
        2.0,
    );
    validate_range(
        errors,
        "completion.timeout_secs",
        completion.timeout_secs,
        1,
        600,
    );
}
