use crate::constants::defaults;
use crate::context::ContextWindow;
use crate::llm::Message;
use tracing::debug;

/// Assembles the outgoing message sequence from persisted history and a new
/// user turn.
pub struct ContextBuilder {
    system_prompt: String,
    history: Vec<Message>,
    window: ContextWindow,
}

impl ContextBuilder {
    pub fn new() -> Self {
        Self {
            system_prompt: defaults::SYSTEM_PROMPT.to_string(),
            history: Vec::new(),
            window: ContextWindow::default(),
        }
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    pub fn with_history(mut self, history: Vec<Message>) -> Self {
        self.history = history;
        self
    }

    pub fn with_window(mut self, window: ContextWindow) -> Self {
        self.window = window;
        self
    }

    /// Empty history gets the system seed first; otherwise history is reused
    /// as-is. The user turn is appended and the window applied last.
    pub fn build(self, user_query: impl Into<String>) -> Vec<Message> {
        let mut messages = if self.history.is_empty() {
            debug!("No prior history, seeding system prompt");
            vec![Message::system(self.system_prompt)]
        } else {
            self.history
        };

        messages.push(Message::user(user_query));
        self.window.fit(messages)
    }
}

impl Default for ContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
