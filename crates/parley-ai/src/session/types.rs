//! Session lifecycle state.

use serde::{Deserialize, Serialize};

/// A session is `Active` from `start()` until its connection closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Active,
    Ended,
}
