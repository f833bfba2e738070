use parley_ai::AiError;
use parley_common::{ParleyError, SessionId};

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("unknown session: {0}")]
    UnknownSession(SessionId),

    #[error("session already started: {0}")]
    SessionExists(SessionId),

    #[error("authentication required")]
    Unauthenticated,

    #[error(transparent)]
    Completion(#[from] AiError),

    #[error("failed to deliver message: {0}")]
    Sink(String),
}

impl From<ChatError> for ParleyError {
    fn from(err: ChatError) -> Self {
        match err {
            ChatError::Unauthenticated => ParleyError::Auth(err.to_string()),
            ChatError::Completion(e) => e.into(),
            other => ParleyError::Chat(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = ChatError::UnknownSession(SessionId::from("c1"));
        assert_eq!(err.to_string(), "unknown session: c1");

        let err = ChatError::SessionExists(SessionId::from("c1"));
        assert_eq!(err.to_string(), "session already started: c1");

        let err = ChatError::Completion(AiError::Timeout);
        assert_eq!(err.to_string(), "Timeout");
    }

    #[test]
    fn converts_to_parley_error() {
        let err: ParleyError = ChatError::Unauthenticated.into();
        assert!(matches!(err, ParleyError::Auth(_)));

        let err: ParleyError = ChatError::Completion(AiError::RateLimited).into();
        assert!(matches!(err, ParleyError::Completion(_)));

        let err: ParleyError = ChatError::Sink("closed".into()).into();
        assert_eq!(err.to_string(), "chat error: failed to deliver message: closed");
    }
}
