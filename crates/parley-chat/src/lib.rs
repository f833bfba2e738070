//! Chat hosting layer.
//!
//! `ChatHost` owns one `ConversationSession` per connection, keyed by
//! `SessionId`, and turns lifecycle events (`on_chat_start`, `on_message`,
//! `on_chat_end`, `on_auth`) into session operations. Output goes through a
//! `MessageSink`; login decisions through an `AuthPolicy`.

pub mod auth;
pub mod error;
pub mod host;
pub mod sink;

pub use auth::{AcceptDefault, AuthPolicy, Identity, ProviderAllowList};
pub use error::ChatError;
pub use host::{ChatHost, HostSettings};
pub use sink::{ChannelSink, MessageSink, Outbound};
