use serde::{Deserialize, Serialize};

/// Login gate settings. Client ids and secrets come from the environment.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AuthConfig {
    /// Reject chats that start without an authenticated identity.
    pub required: bool,
    /// OAuth provider ids accepted by the login callback, e.g. `github`.
    pub providers: Vec<String>,
}
