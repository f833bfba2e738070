//! OAuth login callback policy.
//!
//! The OAuth exchange itself happens in the hosting framework. Once it has a
//! token and the provider's user payload it asks the policy whether to let the
//! user in. Returning `None` rejects the login.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// An authenticated user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub identifier: String,
    /// Provider that vouched for this identity, e.g. `github`.
    pub provider: Option<String>,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl Identity {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            provider: None,
            metadata: serde_json::Value::Null,
        }
    }

    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = metadata;
        self
    }
}

/// Decides whether an OAuth login is accepted.
pub trait AuthPolicy: Send + Sync {
    fn authorize(
        &self,
        provider_id: &str,
        token: &str,
        raw_user_data: &serde_json::Value,
        default_identity: Identity,
    ) -> Option<Identity>;
}

/// Accepts every login as the identity the framework derived.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptDefault;

impl AuthPolicy for AcceptDefault {
    fn authorize(
        &self,
        _provider_id: &str,
        _token: &str,
        _raw_user_data: &serde_json::Value,
        default_identity: Identity,
    ) -> Option<Identity> {
        Some(default_identity)
    }
}

/// Accepts logins only from the listed providers.
///
/// The accepted identity is tagged with the provider and carries the raw
/// provider payload as metadata.
#[derive(Debug, Clone, Default)]
pub struct ProviderAllowList {
    providers: BTreeSet<String>,
}

impl ProviderAllowList {
    pub fn new<I, S>(providers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            providers: providers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn allows(&self, provider_id: &str) -> bool {
        self.providers.contains(provider_id)
    }
}

impl AuthPolicy for ProviderAllowList {
    fn authorize(
        &self,
        provider_id: &str,
        _token: &str,
        raw_user_data: &serde_json::Value,
        default_identity: Identity,
    ) -> Option<Identity> {
        if !self.allows(provider_id) {
            return None;
        }
        Some(
            default_identity
                .with_provider(provider_id)
                .with_metadata(raw_user_data.clone()),
        )
    }
}
