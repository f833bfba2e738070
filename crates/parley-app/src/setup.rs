//! Build the completer and login policy from config and credentials.

use std::sync::Arc;
use std::time::Duration;

use parley_ai::{Completer, EchoCompleter, GeminiCompleter, GeminiConfig};
use parley_chat::{AcceptDefault, AuthPolicy, ProviderAllowList};
use parley_common::ParleyError;
use parley_config::{oauth_env_prefix, CompletionConfig, Credentials, ProviderKind};
use tracing::{info, warn};

pub fn build_completer(
    completion: &CompletionConfig,
    provider: ProviderKind,
    credentials: &Credentials,
) -> Result<Arc<dyn Completer>, ParleyError> {
    match provider {
        ProviderKind::Echo => {
            info!("using echo completer");
            Ok(Arc::new(EchoCompleter::new()))
        }
        ProviderKind::Gemini => {
            let api_key = credentials.require_completion_api_key()?;
            let mut config = GeminiConfig::new(api_key)
                .with_model(completion.model.clone())
                .with_max_tokens(completion.max_tokens)
                .with_temperature(completion.temperature)
                .with_timeout(Duration::from_secs(u64::from(completion.timeout_secs)));
            if let Some(prompt) = &completion.system_prompt {
                config = config.with_system_prompt(prompt.clone());
            }
            info!(model = %config.model, "using Gemini completer");
            Ok(Arc::new(GeminiCompleter::new(config)?))
        }
    }
}

/// No configured providers means the login callback accepts the default identity.
pub fn build_auth_policy(providers: &[String], credentials: &Credentials) -> Arc<dyn AuthPolicy> {
    if providers.is_empty() {
        return Arc::new(AcceptDefault);
    }
    for provider in providers {
        if !credentials.has_oauth_client(provider) {
            let prefix = oauth_env_prefix(provider);
            warn!(
                provider = %provider,
                "no OAuth credentials; set {prefix}_CLIENT_ID and {prefix}_CLIENT_SECRET"
            );
        }
    }
    Arc::new(ProviderAllowList::new(providers.iter().cloned()))
}
