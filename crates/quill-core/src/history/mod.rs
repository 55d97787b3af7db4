mod file;

pub use file::FileHistoryStore;

use crate::error::Result;
use crate::llm::Message;

/// Persists the ordered message sequence of a conversation between runs.
pub trait HistoryStore: Send + Sync {
    /// Previously persisted messages. No prior history is `Ok(vec![])`.
    fn read(&self) -> Result<Vec<Message>>;

    /// Replace the persisted history with `messages`.
    fn write(&self, messages: &[Message]) -> Result<()>;

    /// Drop all persisted history. Deleting absent history is not an error.
    fn delete(&self) -> Result<()>;
}
