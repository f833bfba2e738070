//! Google Gemini completer.
//!
//! Sends the transcript to the Generative Language API `generateContent`
//! endpoint and maps the first candidate's text back to a `Completion`.

mod api;
mod client;
mod config;

pub use client::GeminiCompleter;
pub use config::GeminiConfig;
