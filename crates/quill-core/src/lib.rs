pub mod config;
pub mod constants;
pub mod context;
pub mod error;
pub mod history;
pub mod llm;
pub mod transport;

// Re-export key types
pub use config::Settings;
pub use context::{ContextBuilder, ContextWindow};
pub use error::{QuillError, Result};
pub use history::{FileHistoryStore, HistoryStore};
pub use llm::{Choice, Client, Message, Request, Response, Role, SseDecoder, StreamEvent};
pub use transport::{HttpTransport, Transport};
