use crate::constants::{defaults, tokens};
use crate::llm::{Message, Role};
use tracing::{debug, info};

/// Bounds an outgoing message sequence to an approximate token budget.
///
/// Eviction removes the oldest exchange first: a message together with the
/// assistant replies that follow it, so the kept history never opens on an
/// orphaned reply. A leading system message and the
/// newest message are never removed, so the result can still exceed the
/// budget when those alone are larger than it. A budget of 0 disables
/// eviction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextWindow {
    max_tokens: usize,
}

impl ContextWindow {
    pub fn new(max_tokens: usize) -> Self {
        Self { max_tokens }
    }

    pub fn unbounded() -> Self {
        Self::new(0)
    }

    pub fn max_tokens(&self) -> usize {
        self.max_tokens
    }

    pub fn estimate_message(message: &Message) -> usize {
        message.content.chars().count().div_ceil(tokens::CHARS_PER_TOKEN) + tokens::MESSAGE_OVERHEAD
    }

    pub fn estimate(messages: &[Message]) -> usize {
        messages.iter().map(Self::estimate_message).sum()
    }

    pub fn fit(&self, mut messages: Vec<Message>) -> Vec<Message> {
        if self.max_tokens == 0 {
            return messages;
        }

        let first_evictable = match messages.first() {
            Some(m) if m.role == Role::System => 1,
            _ => 0,
        };

        let mut total = Self::estimate(&messages);
        let mut evicted = 0;
        // The final message stays, so only indices before it are candidates.
        while total > self.max_tokens && messages.len() > first_evictable + 1 {
            total -= self.evict_at(&mut messages, first_evictable);
            evicted += 1;
            // Replies to the evicted turn go with it
            while messages.len() > first_evictable + 1
                && messages[first_evictable].role == Role::Assistant
            {
                total -= self.evict_at(&mut messages, first_evictable);
                evicted += 1;
            }
        }

        if evicted > 0 {
            info!(
                evicted,
                remaining = messages.len(),
                tokens = total,
                budget = self.max_tokens,
                "Trimmed conversation to context window"
            );
        }

        messages
    }

    fn evict_at(&self, messages: &mut Vec<Message>, index: usize) -> usize {
        let removed = messages.remove(index);
        let cost = Self::estimate_message(&removed);
        debug!(role = %removed.role, tokens = cost, "Evicted message from context");
        cost
    }
}

impl Default for ContextWindow {
    fn default() -> Self {
        Self::new(defaults::CONTEXT_WINDOW)
    }
}
