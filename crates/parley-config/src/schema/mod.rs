//! Configuration schema types for Parley.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod auth;
mod chat;
mod completion;
mod logging;

pub use auth::*;
pub use chat::*;
pub use completion::*;
pub use logging::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Parley.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct ParleyConfig {
    pub completion: CompletionConfig,
    pub auth: AuthConfig,
    pub chat: ChatConfig,
    pub logging: LoggingConfig,
}
