mod client;
mod stream;
mod types;

pub use client::Client;
pub use stream::{SseDecoder, StreamEvent};
pub use types::*;
