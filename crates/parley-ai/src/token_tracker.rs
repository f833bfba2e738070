//! Token usage accounting for one conversation.

use std::collections::HashMap;

use crate::TokenUsage;

/// Cumulative usage per completer, plus a count of replies that came back empty.
#[derive(Debug, Clone, Default)]
pub struct TokenTracker {
    total: TokenUsage,
    by_provider: HashMap<String, TokenUsage>,
    call_count: u64,
    absent_count: u64,
}

impl TokenTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completion call.
    pub fn record(&mut self, provider: &str, usage: &TokenUsage, absent: bool) {
        self.total.input_tokens = self.total.input_tokens.saturating_add(usage.input_tokens);
        self.total.output_tokens = self.total.output_tokens.saturating_add(usage.output_tokens);
        self.call_count += 1;
        if absent {
            self.absent_count += 1;
        }

        let entry = self.by_provider.entry(provider.to_string()).or_default();
        entry.input_tokens = entry.input_tokens.saturating_add(usage.input_tokens);
        entry.output_tokens = entry.output_tokens.saturating_add(usage.output_tokens);
    }

    pub fn total(&self) -> &TokenUsage {
        &self.total
    }

    pub fn for_provider(&self, provider: &str) -> Option<&TokenUsage> {
        self.by_provider.get(provider)
    }

    pub fn call_count(&self) -> u64 {
        self.call_count
    }

    /// Calls whose reply had no usable text.
    pub fn absent_count(&self) -> u64 {
        self.absent_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usage(input: u64, output: u64) -> TokenUsage {
        TokenUsage {
            input_tokens: input,
            output_tokens: output,
        }
    }

    #[test]
    fn accumulates_across_providers() {
        let mut tracker = TokenTracker::new();
        tracker.record("gemini", &usage(10, 5), false);
        tracker.record("gemini", &usage(20, 7), false);
        tracker.record("echo", &usage(0, 0), true);

        assert_eq!(tracker.total().total_tokens(), 42);
        assert_eq!(tracker.call_count(), 3);
        assert_eq!(tracker.absent_count(), 1);
        assert_eq!(tracker.for_provider("gemini"), Some(&usage(30, 12)));
        assert_eq!(tracker.for_provider("echo"), Some(&usage(0, 0)));
        assert!(tracker.for_provider("claude").is_none());
    }

    #[test]
    fn saturates_instead_of_overflowing() {
        let mut tracker = TokenTracker::new();
        tracker.record("gemini", &usage(u64::MAX, 0), false);
        tracker.record("gemini", &usage(1, 0), false);
        assert_eq!(tracker.total().input_tokens, u64::MAX);
    }
}
