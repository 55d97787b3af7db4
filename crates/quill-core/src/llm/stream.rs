use crate::constants::sse;
use crate::error::{QuillError, Result};
use crate::llm::types::StreamChunk;

/// Events decoded from a server-sent-event completion stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    TextDelta(String),
    Done,
}

/// Incremental decoder for `data: {...}` lines.
///
/// Transport chunks can split a line (or a UTF-8 sequence) anywhere, so raw
/// bytes are buffered until a newline arrives.
#[derive(Debug, Default)]
pub struct SseDecoder {
    buffer: Vec<u8>,
    done: bool,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Feed one raw chunk and return every complete event it finished.
    pub fn push(&mut self, chunk: &[u8]) -> Result<Vec<StreamEvent>> {
        self.buffer.extend_from_slice(chunk);

        let mut events = Vec::new();
        while let Some(line_end) = self.buffer.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=line_end).collect();
            if let Some(event) = self.decode_line(&line)? {
                events.push(event);
            }
        }
        Ok(events)
    }

    /// Flush a trailing line that was not newline-terminated.
    pub fn finish(&mut self) -> Result<Vec<StreamEvent>> {
        if self.buffer.is_empty() {
            return Ok(Vec::new());
        }
        let line = std::mem::take(&mut self.buffer);
        Ok(self.decode_line(&line)?.into_iter().collect())
    }

    fn decode_line(&mut self, raw: &[u8]) -> Result<Option<StreamEvent>> {
        if self.done {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(raw);
        let line = line.trim();
        let Some(data) = line.strip_prefix(sse::DATA_PREFIX) else {
            return Ok(None);
        };
        let data = data.trim();

        if data == sse::DONE_SENTINEL {
            self.done = true;
            return Ok(Some(StreamEvent::Done));
        }

        let chunk: StreamChunk = serde_json::from_str(data).map_err(QuillError::Decode)?;
        Ok(chunk
            .content()
            .filter(|c| !c.is_empty())
            .map(|c| StreamEvent::TextDelta(c.to_string())))
    }
}
