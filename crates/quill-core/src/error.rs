use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuillError {
    #[error("{0}")]
    Read(String),

    #[error("{0}")]
    Transport(String),

    #[error("empty response")]
    EmptyResponse,

    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("no responses returned")]
    NoChoices,

    /// History could not be persisted. `answer` holds the reply that was
    /// already obtained from the remote service, if any.
    #[error("{message}")]
    Write {
        message: String,
        answer: Option<String>,
    },

    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl QuillError {
    pub fn write(message: impl Into<String>) -> Self {
        Self::Write {
            message: message.into(),
            answer: None,
        }
    }

    /// Attach a computed answer to a `Write` error. Other variants pass through.
    pub fn with_answer(self, answer: impl Into<String>) -> Self {
        match self {
            Self::Write { message, .. } => Self::Write {
                message,
                answer: Some(answer.into()),
            },
            other => other,
        }
    }

    /// The answer recovered from a failed persistence step.
    pub fn answer(&self) -> Option<&str> {
        match self {
            Self::Write { answer, .. } => answer.as_deref(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, QuillError>;
