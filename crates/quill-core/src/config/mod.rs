use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::constants::{defaults, endpoints, paths};
use crate::context::ContextWindow;
use crate::error::{QuillError, Result};
use crate::history::FileHistoryStore;
use crate::llm::Client;
use crate::transport::HttpTransport;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub model: String,
    pub url: String,
    pub api_key_env: String,
    pub system_prompt: String,
    /// Approximate token budget for the outgoing conversation; 0 disables trimming.
    pub context_window: usize,
    pub history_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model: defaults::DEFAULT_MODEL.to_string(),
            url: endpoints::CHAT_COMPLETIONS.to_string(),
            api_key_env: defaults::API_KEY_ENV.to_string(),
            system_prompt: defaults::SYSTEM_PROMPT.to_string(),
            context_window: defaults::CONTEXT_WINDOW,
            history_path: None,
        }
    }
}

impl Settings {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(paths::APP_DIR)
            .join(paths::CONFIG_FILE)
    }

    /// Load from the default config path, falling back to defaults.
    pub fn load() -> Self {
        let config_path = Self::config_path();
        if !config_path.exists() {
            return Self::default();
        }
        match Self::load_from(&config_path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Ignoring config file: {e}");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            QuillError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        toml::from_str(&content)
            .map_err(|e| QuillError::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| QuillError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the API key from the environment variable specified in settings.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }

    pub fn history_path(&self) -> Result<PathBuf> {
        match self.history_path {
            Some(ref path) => Ok(path.clone()),
            None => FileHistoryStore::default_path(),
        }
    }

    pub fn context_window(&self) -> ContextWindow {
        ContextWindow::new(self.context_window)
    }

    /// The history store alone; needs no API key.
    pub fn build_store(&self) -> Result<FileHistoryStore> {
        Ok(FileHistoryStore::with_path(self.history_path()?))
    }

    /// Wire the HTTP transport and file history store into a client.
    pub fn build_client(&self) -> Result<Client> {
        let api_key = self.api_key().ok_or_else(|| {
            QuillError::Config(format!(
                "missing API key: set the {} environment variable",
                self.api_key_env
            ))
        })?;

        let transport = HttpTransport::new(api_key);
        let store = self.build_store()?;

        Ok(Client::new(Box::new(transport), Box::new(store))
            .with_target(self.url.as_str())
            .with_model(self.model.as_str())
            .with_system_prompt(self.system_prompt.as_str())
            .with_window(self.context_window()))
    }
}
