//! Secrets read from the environment at startup.
//!
//! Credentials never live in `config.toml`. They are read once, before the
//! chat host starts, and are not mutated afterwards.

use std::collections::BTreeSet;
use std::fmt;

use parley_common::ConfigError;

use crate::schema::ParleyConfig;

/// Primary and fallback env vars for the completion API key.
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "GOOGLE_API_KEY"];

/// Overrides `[auth] required` when set.
pub const AUTH_REQUIRED_VAR: &str = "PARLEY_AUTH_REQUIRED";

/// Everything secret or deployment-specific that comes from the environment.
#[derive(Clone, Default)]
pub struct Credentials {
    completion_api_key: Option<String>,
    /// Providers with both a client id and a client secret set.
    oauth_providers: BTreeSet<String>,
    auth_required: Option<bool>,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field(
                "completion_api_key",
                &self.completion_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("oauth_providers", &self.oauth_providers)
            .field("auth_required", &self.auth_required)
            .finish()
    }
}

impl Credentials {
    /// Read credentials for the given OAuth providers from the process environment.
    pub fn from_env(providers: &[String]) -> Self {
        Self::from_lookup(providers, |key| std::env::var(key).ok())
    }

    /// Read credentials through an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup(providers: &[String], lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let completion_api_key = API_KEY_VARS.iter().find_map(|key| get(*key));

        let mut oauth_providers = BTreeSet::new();
        for provider in providers {
            let prefix = oauth_env_prefix(provider);
            let id = get(&format!("{prefix}_CLIENT_ID"));
            let secret = get(&format!("{prefix}_CLIENT_SECRET"));
            match (id, secret) {
                (Some(_), Some(_)) => {
                    oauth_providers.insert(provider.clone());
                }
                (None, None) => {}
                _ => tracing::warn!(
                    provider = %provider,
                    "OAuth provider has only one of {prefix}_CLIENT_ID / {prefix}_CLIENT_SECRET set; ignoring it"
                ),
            }
        }

        let auth_required = get(AUTH_REQUIRED_VAR).and_then(|v| parse_flag(&v));

        Self {
            completion_api_key,
            oauth_providers,
            auth_required,
        }
    }

    pub fn with_completion_api_key(mut self, key: impl Into<String>) -> Self {
        self.completion_api_key = Some(key.into());
        self
    }

    pub fn completion_api_key(&self) -> Option<&str> {
        self.completion_api_key.as_deref()
    }

    /// The completion API key, or an error naming the variables to set.
    pub fn require_completion_api_key(&self) -> Result<&str, ConfigError> {
        self.completion_api_key()
            .ok_or_else(|| ConfigError::MissingCredential(API_KEY_VARS.join(" or ")))
    }

    /// Whether both OAuth client variables are set for `provider`.
    pub fn has_oauth_client(&self, provider: &str) -> bool {
        self.oauth_providers.contains(provider)
    }

    /// Apply environment overrides onto a loaded config.
    pub fn apply_overrides(&self, config: &mut ParleyConfig) {
        if let Some(required) = self.auth_required {
            config.auth.required = required;
        }
    }
}

/// `github` → `OAUTH_GITHUB`, `azure-ad` → `OAUTH_AZURE_AD`.
pub fn oauth_env_prefix(provider: &str) -> String {
    format!("OAUTH_{}", provider.to_ascii_uppercase().replace('-', "_"))
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        other => {
            tracing::warn!("ignoring {AUTH_REQUIRED_VAR}={other}: expected true or false");
            None
        }
    }
}
