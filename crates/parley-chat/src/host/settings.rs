use parley_config::ParleyConfig;

/// Host behavior taken from config at startup.
#[derive(Debug, Clone)]
pub struct HostSettings {
    pub auth_required: bool,
    pub greeting: String,
    pub history_warn_bytes: u64,
}

impl HostSettings {
    pub fn from_config(config: &ParleyConfig) -> Self {
        Self {
            auth_required: config.auth.required,
            greeting: config.chat.greeting.clone(),
            history_warn_bytes: config.chat.history_warn_bytes,
        }
    }
}

impl Default for HostSettings {
    fn default() -> Self {
        Self::from_config(&ParleyConfig::default())
    }
}
