//! Outbound message delivery.

use async_trait::async_trait;
use parley_common::SessionId;
use tokio::sync::mpsc;

use crate::ChatError;

/// Renders assistant output to the user of one session.
#[async_trait]
pub trait MessageSink: Send + Sync {
    async fn send(&self, session_id: &SessionId, text: &str) -> Result<(), ChatError>;
}

/// A message bound for one session's connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outbound {
    pub session_id: SessionId,
    pub text: String,
}

/// Forwards outbound messages into an mpsc channel drained by the transport.
#[derive(Clone)]
pub struct ChannelSink {
    tx: mpsc::Sender<Outbound>,
}

impl ChannelSink {
    pub fn new(tx: mpsc::Sender<Outbound>) -> Self {
        Self { tx }
    }

    /// Create a sink and the receiver that drains it.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<Outbound>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self::new(tx), rx)
    }
}

#[async_trait]
impl MessageSink for ChannelSink {
    async fn send(&self, session_id: &SessionId, text: &str) -> Result<(), ChatError> {
        self.tx
            .send(Outbound {
                session_id: session_id.clone(),
                text: text.to_string(),
            })
            .await
            .map_err(|_| ChatError::Sink("receiver dropped".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn channel_sink_forwards_in_order() {
        let (sink, mut rx) = ChannelSink::channel(4);
        let sid = SessionId::from("c1");

        sink.send(&sid, "one").await.unwrap();
        sink.send(&sid, "").await.unwrap();

        assert_eq!(rx.recv().await.unwrap().text, "one");
        let second = rx.recv().await.unwrap();
        assert_eq!(second.session_id, sid);
        assert_eq!(second.text, "");
    }

    #[tokio::test]
    async fn closed_receiver_is_a_sink_error() {
        let (sink, rx) = ChannelSink::channel(1);
        drop(rx);
        let err = sink.send(&SessionId::from("c1"), "hi").await.unwrap_err();
        assert!(matches!(err, ChatError::Sink(_)));
    }
}
