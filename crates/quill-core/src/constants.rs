/// quill — centralized constants.
/// Defaults that configuration may override live here.

// ─── Models ───────────────────────────────────────────────────────────────────

pub mod models {
    pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
}

// ─── API Endpoints ────────────────────────────────────────────────────────────

pub mod endpoints {
    pub const CHAT_COMPLETIONS: &str = "https://api.openai.com/v1/chat/completions";
}

// ─── Roles ────────────────────────────────────────────────────────────────────

pub mod roles {
    pub const SYSTEM: &str = "system";
    pub const USER: &str = "user";
    pub const ASSISTANT: &str = "assistant";
}

// ─── Default Settings ─────────────────────────────────────────────────────────

pub mod defaults {
    /// Seed message inserted when a conversation has no history yet.
    pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";
    pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
    /// Token budget for the outgoing conversation; 0 keeps the full history.
    pub const CONTEXT_WINDOW: usize = 0;
    pub const DEFAULT_MODEL: &str = super::models::DEFAULT_MODEL;
}

// ─── Token Estimation ─────────────────────────────────────────────────────────

pub mod tokens {
    pub const CHARS_PER_TOKEN: usize = 4;
    pub const MESSAGE_OVERHEAD: usize = 4;
}

// ─── Streaming ────────────────────────────────────────────────────────────────

pub mod sse {
    pub const DATA_PREFIX: &str = "data:";
    pub const DONE_SENTINEL: &str = "[DONE]";
}

// ─── Config Paths ─────────────────────────────────────────────────────────────

pub mod paths {
    pub const APP_DIR: &str = "quill";
    pub const CONFIG_FILE: &str = "config.toml";
    pub const HISTORY_DIR: &str = ".quill";
    pub const HISTORY_FILE: &str = "history.json";
}
