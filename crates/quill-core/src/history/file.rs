use crate::constants::paths;
use crate::error::{QuillError, Result};
use crate::history::HistoryStore;
use crate::llm::Message;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Stores the conversation as a JSON array of `{role, content}` objects.
pub struct FileHistoryStore {
    path: PathBuf,
}

impl FileHistoryStore {
    /// Store at the default location (~/.quill/history.json)
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(Self::default_path()?))
    }

    /// Store at a custom path (useful for testing)
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| QuillError::Config("Could not determine home directory".to_string()))?;
        Ok(home.join(paths::HISTORY_DIR).join(paths::HISTORY_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for FileHistoryStore {
    fn read(&self) -> Result<Vec<Message>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No history file, starting fresh");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(QuillError::Read(format!(
                    "Failed to read history file {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&contents).map_err(|e| {
            QuillError::Read(format!(
                "Failed to parse history file {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    fn write(&self, messages: &[Message]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                QuillError::write(format!("Failed to create history directory: {}", e))
            })?;
        }

        let contents = serde_json::to_string_pretty(messages)
            .map_err(|e| QuillError::write(format!("Failed to serialize history: {}", e)))?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, contents).map_err(|e| {
            QuillError::write(format!("Failed to write temporary history file: {}", e))
        })?;

        fs::rename(&tmp_path, &self.path)
            .map_err(|e| QuillError::write(format!("Failed to rename history file: {}", e)))?;

        info!(path = %self.path.display(), messages = messages.len(), "History saved");
        Ok(())
    }

    fn delete(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), "History cleared");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(QuillError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileHistoryStore {
        FileHistoryStore::with_path(dir.path().join("nested").join("history.json"))
    }

    #[test]
    fn test_missing_file_is_empty_history() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.read().unwrap().is_empty());
    }

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let messages = vec![
            Message::system("seed"),
            Message::user("question 1"),
            Message::assistant("answer 1"),
        ];

        store.write(&messages).unwrap();
        assert_eq!(store.read().unwrap(), messages);
        assert!(!store.path().with_extension("json.tmp").exists());
    }

    #[test]
    fn test_write_replaces_previous_history() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.write(&[Message::user("old")]).unwrap();
        store.write(&[Message::user("new")]).unwrap();
        assert_eq!(store.read().unwrap(), vec![Message::user("new")]);
    }

    #[test]
    fn test_corrupt_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "[{\"role\": \"user\"").unwrap();

        let err = store.read().unwrap_err();
        assert!(matches!(err, QuillError::Read(_)));
        assert!(err.to_string().contains("Failed to parse history file"));
    }

    #[test]
    fn test_delete_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.write(&[Message::user("hi")]).unwrap();

        store.delete().unwrap();
        assert!(!store.path().exists());
        store.delete().unwrap();
        assert!(store.read().unwrap().is_empty());
    }
}
