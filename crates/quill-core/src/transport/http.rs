use crate::error::{QuillError, Result};
use crate::transport::Transport;
use futures::channel::mpsc;
use futures::StreamExt;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::{debug, info};

/// `reqwest`-backed transport with bearer authentication.
pub struct HttpTransport {
    client: reqwest::Client,
    api_key: String,
}

impl HttpTransport {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
        }
    }

    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    async fn send(&self, target: &str, payload: Vec<u8>, stream: bool) -> Result<reqwest::Response> {
        let accept = if stream { "text/event-stream" } else { "application/json" };

        debug!(url = target, bytes = payload.len(), stream, "Sending request");
        let response = self
            .client
            .post(target)
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, accept)
            .body(payload)
            .send()
            .await
            .map_err(|e| QuillError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = match response.text().await {
                Ok(text) => text,
                Err(e) => format!("<unreadable body: {e}>"),
            };
            return Err(QuillError::Transport(format!("http error: {status}: {text}")));
        }

        info!(%status, "Received response");
        Ok(response)
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn post(&self, target: &str, payload: Vec<u8>, stream: bool) -> Result<Vec<u8>> {
        let response = self.send(target, payload, stream).await?;
        let body = response
            .bytes()
            .await
            .map_err(|e| QuillError::Transport(e.to_string()))?;
        Ok(body.to_vec())
    }

    async fn post_stream(
        &self,
        target: &str,
        payload: Vec<u8>,
    ) -> Result<mpsc::UnboundedReceiver<Result<Vec<u8>>>> {
        let response = self.send(target, payload, true).await?;
        let (tx, rx) = mpsc::unbounded();

        let mut stream = response.bytes_stream();
        tokio::spawn(async move {
            while let Some(chunk) = stream.next().await {
                let item = chunk
                    .map(|bytes| bytes.to_vec())
                    .map_err(|e| QuillError::Transport(e.to_string()));
                let failed = item.is_err();
                if tx.unbounded_send(item).is_err() || failed {
                    break;
                }
            }
        });

        Ok(rx)
    }
}
