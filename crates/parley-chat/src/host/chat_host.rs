//! `ChatHost`: maps session ids to conversations and handles chat events.

use std::collections::HashMap;
use std::sync::Arc;

use parley_ai::{Completer, ConversationSession, SessionState, Turn};
use parley_common::{new_correlation_id, SessionId};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::auth::{AcceptDefault, AuthPolicy, Identity};
use crate::sink::MessageSink;
use crate::ChatError;

use super::settings::HostSettings;

type SessionMap = HashMap<SessionId, Arc<Mutex<ConversationSession>>>;

/// Owns every live conversation in the process.
///
/// Each session sits behind its own mutex, so messages for one connection run
/// one at a time while other connections proceed independently. The map lock
/// is never held across a completion call.
#[derive(Clone)]
pub struct ChatHost {
    sessions: Arc<RwLock<SessionMap>>,
    completer: Arc<dyn Completer>,
    sink: Arc<dyn MessageSink>,
    auth: Arc<dyn AuthPolicy>,
    settings: HostSettings,
}

impl ChatHost {
    pub fn new(completer: Arc<dyn Completer>, sink: Arc<dyn MessageSink>) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            completer,
            sink,
            auth: Arc::new(AcceptDefault),
            settings: HostSettings::default(),
        }
    }

    pub fn with_auth_policy(mut self, auth: Arc<dyn AuthPolicy>) -> Self {
        self.auth = auth;
        self
    }

    pub fn with_settings(mut self, settings: HostSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &HostSettings {
        &self.settings
    }

    /// OAuth callback. `None` rejects the login.
    pub fn on_auth(
        &self,
        provider_id: &str,
        token: &str,
        raw_user_data: &serde_json::Value,
        default_identity: Identity,
    ) -> Option<Identity> {
        let identifier = default_identity.identifier.clone();
        let identity = self
            .auth
            .authorize(provider_id, token, raw_user_data, default_identity);
        match &identity {
            Some(id) => info!(provider = provider_id, user = %id.identifier, "login accepted"),
            None => warn!(provider = provider_id, user = %identifier, "login rejected"),
        }
        identity
    }

    /// Start a conversation for a new connection.
    ///
    /// If the greeting cannot be delivered the session is not kept, so the
    /// same id can start again.
    pub async fn on_chat_start(
        &self,
        session_id: SessionId,
        identity: Option<&Identity>,
    ) -> Result<(), ChatError> {
        if self.settings.auth_required && identity.is_none() {
            warn!(session = %session_id, "chat start without identity rejected");
            return Err(ChatError::Unauthenticated);
        }

        {
            let mut map = self.sessions.write().await;
            if map.contains_key(&session_id) {
                return Err(ChatError::SessionExists(session_id));
            }
            map.insert(
                session_id.clone(),
                Arc::new(Mutex::new(ConversationSession::start())),
            );
        }

        info!(
            session = %session_id,
            user = identity.map(|i| i.identifier.as_str()).unwrap_or("anonymous"),
            "chat started"
        );

        if !self.settings.greeting.is_empty() {
            if let Err(e) = self.sink.send(&session_id, &self.settings.greeting).await {
                warn!(session = %session_id, error = %e, "greeting not delivered; chat start undone");
                self.sessions.write().await.remove(&session_id);
                return Err(e);
            }
        }
        Ok(())
    }

    /// Handle one user message: record it, complete the full history, record
    /// and deliver the reply.
    ///
    /// The reply is `""` when the completer produced no text. On completer
    /// failure an empty assistant turn is still recorded, nothing is sent, and
    /// the error is returned.
    pub async fn on_message(
        &self,
        session_id: &SessionId,
        text: impl Into<String>,
    ) -> Result<String, ChatError> {
        let session = self.session(session_id).await?;
        let cid = new_correlation_id();

        let result = {
            let mut conversation = session.lock().await;
            if conversation.state() == SessionState::Ended {
                return Err(ChatError::UnknownSession(session_id.clone()));
            }
            debug!(session = %session_id, cid = %cid, turns = conversation.len(), "message received");

            let result = conversation.chat(self.completer.as_ref(), text).await;

            let payload = conversation.payload_bytes();
            if payload > self.settings.history_warn_bytes {
                warn!(
                    session = %session_id,
                    turns = conversation.len(),
                    payload_bytes = payload,
                    "transcript sent per message is large; full history is still sent"
                );
            }
            result
        };

        let reply = result?;
        self.sink.send(session_id, &reply).await?;
        debug!(session = %session_id, cid = %cid, reply_bytes = reply.len(), "reply delivered");
        Ok(reply)
    }

    /// Close a connection's conversation and hand back its final state.
    ///
    /// Waits for an in-flight message on the same session to finish first.
    /// Events for one connection are expected in order: a message that
    /// arrives after its chat ended is rejected with `UnknownSession` and
    /// never reaches the returned transcript.
    pub async fn on_chat_end(&self, session_id: &SessionId) -> Option<ConversationSession> {
        let session = self.sessions.write().await.remove(session_id)?;
        let mut conversation = session.lock().await;
        conversation.end();
        info!(session = %session_id, turns = conversation.len(), "chat ended");
        Some(conversation.clone())
    }

    /// Snapshot of a live session's transcript.
    pub async fn transcript(&self, session_id: &SessionId) -> Option<Vec<Turn>> {
        let session = self.session(session_id).await.ok()?;
        let conversation = session.lock().await;
        Some(conversation.export_for_completion().to_vec())
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    async fn session(
        &self,
        session_id: &SessionId,
    ) -> Result<Arc<Mutex<ConversationSession>>, ChatError> {
        self.sessions
            .read()
            .await
            .get(session_id)
            .cloned()
            .ok_or_else(|| ChatError::UnknownSession(session_id.clone()))
    }
}
