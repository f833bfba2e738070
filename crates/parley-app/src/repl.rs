//! Terminal chat: one session, stdin in, stdout out.

use std::io::Write;

use parley_chat::{ChatError, ChatHost, Identity, Outbound};
use parley_common::{ParleyError, SessionId};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::debug;

/// A line typed at the prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    History,
    Message(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            "/quit" | "/exit" => Command::Quit,
            "/history" => Command::History,
            _ => Command::Message(line.to_string()),
        }
    }
}

/// Print everything the host sends to this terminal.
pub async fn print_outbound(mut rx: mpsc::Receiver<Outbound>) {
    while let Some(msg) = rx.recv().await {
        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "assistant> {}", msg.text);
        let _ = stdout.flush();
    }
}

/// Run the chat until `/quit` or end of input.
pub async fn run(host: &ChatHost, identity: Option<Identity>) -> Result<(), ParleyError> {
    let session_id = SessionId::new();
    host.on_chat_start(session_id.clone(), identity.as_ref())
        .await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match Command::parse(&line) {
            Command::Quit => break,
            Command::History => {
                for turn in host.transcript(&session_id).await.unwrap_or_default() {
                    println!("[{:?}] {}", turn.role, turn.content);
                }
            }
            Command::Message(text) => match host.on_message(&session_id, text).await {
                Ok(_) => {}
                Err(ChatError::Completion(e)) => eprintln!("error: {e}"),
                Err(e) => return Err(e.into()),
            },
        }
    }

    if let Some(session) = host.on_chat_end(&session_id).await {
        debug!(
            turns = session.len(),
            calls = session.tracker().call_count(),
            tokens = session.tracker().total().total_tokens(),
            "session summary"
        );
    }
    Ok(())
}
