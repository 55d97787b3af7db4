use crate::constants::{defaults, endpoints};
use crate::context::{ContextBuilder, ContextWindow};
use crate::error::{QuillError, Result};
use crate::history::HistoryStore;
use crate::llm::stream::{SseDecoder, StreamEvent};
use crate::llm::types::{Message, Request, Response};
use crate::transport::Transport;
use futures::StreamExt;
use tracing::{debug, info};

/// Conversation client: turns a query into a completion while keeping the
/// conversation history in the injected store.
///
/// Each operation is a single read-mutate-write cycle over the store. There
/// is no locking, so concurrent operations against one store may interleave.
pub struct Client {
    transport: Box<dyn Transport>,
    store: Box<dyn HistoryStore>,
    target: String,
    model: String,
    system_prompt: String,
    window: ContextWindow,
}

impl Client {
    pub fn new(transport: Box<dyn Transport>, store: Box<dyn HistoryStore>) -> Self {
        Self {
            transport,
            store,
            target: endpoints::CHAT_COMPLETIONS.to_string(),
            model: defaults::DEFAULT_MODEL.to_string(),
            system_prompt: defaults::SYSTEM_PROMPT.to_string(),
            window: ContextWindow::default(),
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    pub fn with_window(mut self, window: ContextWindow) -> Self {
        self.window = window;
        self
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send `text` as the next user turn and return the assistant's answer.
    pub async fn query(&self, text: &str) -> Result<String> {
        let mut messages = self.prepare(text)?;
        let payload = self.encode(&messages, false)?;

        info!(model = %self.model, messages = messages.len(), "Querying completion endpoint");
        let raw = self.transport.post(&self.target, payload, false).await?;
        if raw.is_empty() {
            return Err(QuillError::EmptyResponse);
        }

        let response: Response = serde_json::from_slice(&raw).map_err(QuillError::Decode)?;
        let answer = response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(QuillError::NoChoices)?;

        self.persist(&mut messages, answer)
    }

    /// Like [`Client::query`] but streams the answer, passing each text
    /// fragment to `on_delta` as it arrives.
    pub async fn stream<F>(&self, text: &str, mut on_delta: F) -> Result<String>
    where
        F: FnMut(&str),
    {
        let mut messages = self.prepare(text)?;
        let payload = self.encode(&messages, true)?;

        info!(model = %self.model, messages = messages.len(), "Streaming from completion endpoint");
        let mut chunks = self.transport.post_stream(&self.target, payload).await?;

        let mut decoder = SseDecoder::new();
        let mut answer = String::new();
        let mut emit = |events: Vec<StreamEvent>, answer: &mut String| {
            for event in events {
                if let StreamEvent::TextDelta(delta) = event {
                    on_delta(&delta);
                    answer.push_str(&delta);
                }
            }
        };

        while let Some(chunk) = chunks.next().await {
            let events = decoder.push(&chunk?)?;
            emit(events, &mut answer);
            if decoder.is_done() {
                break;
            }
        }
        let events = decoder.finish()?;
        emit(events, &mut answer);

        if answer.is_empty() {
            return Err(QuillError::EmptyResponse);
        }

        self.persist(&mut messages, answer)
    }

    /// Add `text` as a user turn without contacting the service.
    pub fn provide_context(&self, text: &str) -> Result<()> {
        let messages = self.prepare(text)?;
        debug!(messages = messages.len(), "Storing provided context");
        self.store.write(&messages)
    }

    /// The persisted conversation, as the store currently holds it.
    pub fn history(&self) -> Result<Vec<Message>> {
        self.store.read()
    }

    pub fn clear_history(&self) -> Result<()> {
        self.store.delete()
    }

    /// Serialized request body for `text` against the current history.
    /// Reads the store but never writes it.
    pub fn assemble(&self, text: &str) -> Result<Vec<u8>> {
        let messages = self.prepare(text)?;
        self.encode(&messages, false)
    }

    fn prepare(&self, text: &str) -> Result<Vec<Message>> {
        let history = self.store.read()?;
        debug!(history = history.len(), "Loaded conversation history");

        Ok(ContextBuilder::new()
            .with_system_prompt(self.system_prompt.as_str())
            .with_history(history)
            .with_window(self.window)
            .build(text))
    }

    fn encode(&self, messages: &[Message], stream: bool) -> Result<Vec<u8>> {
        let request = Request {
            model: &self.model,
            messages,
            stream,
        };
        serde_json::to_vec(&request).map_err(QuillError::Encode)
    }

    fn persist(&self, messages: &mut Vec<Message>, answer: String) -> Result<String> {
        messages.push(Message::assistant(answer.as_str()));
        self.store
            .write(messages)
            .map_err(|e| e.with_answer(answer.as_str()))?;
        Ok(answer)
    }
}
