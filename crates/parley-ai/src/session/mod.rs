//! Conversation session management.
//!
//! A `ConversationSession` holds the append-only transcript of one chat
//! connection and runs the user → completion → assistant round trip.

mod chat;
mod manager;
mod types;


pub use manager::ConversationSession;
pub use types::SessionState;
