mod http;

pub use http::HttpTransport;

use crate::error::Result;
use futures::channel::mpsc::UnboundedReceiver;

/// A single network exchange with the completion service.
///
/// Implementations perform the call and hand back raw bytes. They do not
/// retry and do not parse the body.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// POST `payload` to `target` and return the full response body.
    async fn post(&self, target: &str, payload: Vec<u8>, stream: bool) -> Result<Vec<u8>>;

    /// POST `payload` to `target` and deliver the body chunk by chunk.
    /// The receiver closes when the body ends.
    async fn post_stream(
        &self,
        target: &str,
        payload: Vec<u8>,
    ) -> Result<UnboundedReceiver<Result<Vec<u8>>>>;
}
