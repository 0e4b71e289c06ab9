//! Chat transcript state
//!
//! The chat widget keeps an append-only, ordered transcript and a pending
//! flag that blocks concurrent submissions. Each submission appends the
//! user turn optimistically and resolves with exactly one assistant turn.

use crate::models::ChatTurn;

/// Fixed assistant reply appended when the network call fails
pub const NETWORK_FAILURE_REPLY: &str = "Sorry, I encountered an error. Please try again.";

/// Append-only chat transcript with a single-submission gate
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    turns: Vec<ChatTurn>,
    pending: bool,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// All turns in insertion order
    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    /// Whether a submission is in flight
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Begin a submission: appends the user turn and raises the pending
    /// flag. Returns `false` without touching the transcript if a prior
    /// submission is still in flight or the message is blank.
    pub fn begin_submission(&mut self, message: &str) -> bool {
        if self.pending || message.trim().is_empty() {
            return false;
        }
        self.turns.push(ChatTurn::user(message));
        self.pending = true;
        true
    }

    /// Resolve the in-flight submission with the assistant's reply.
    pub fn resolve(&mut self, reply: impl Into<String>) {
        self.turns.push(ChatTurn::assistant(reply));
        self.pending = false;
    }

    /// Resolve the in-flight submission after a network failure with the
    /// fixed apology reply.
    pub fn resolve_with_failure(&mut self) {
        self.resolve(NETWORK_FAILURE_REPLY);
    }
}
