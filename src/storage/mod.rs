//! Durable persistence for the notify-once flag.
//!
//! The state is one small JSON file. Loads are self-healing: a missing or
//! corrupt file degrades to the default pending state, which is written back
//! immediately so the next run starts from a well-formed file. Saves go
//! through a temp file and rename, so a crash never leaves a torn file.

use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::models::NotificationState;

/// JSON-file backed store for the notification state.
#[derive(Debug, Clone)]
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted state.
    ///
    /// Never fails the caller: an absent or unparseable file yields the
    /// default pending state, which is persisted back on a best-effort
    /// basis.
    pub async fn load(&self) -> NotificationState {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(state) => return state,
                Err(e) => {
                    log::warn!("Error reading state file: {}. Creating new state.", e);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                log::warn!("Error reading state file: {}. Creating new state.", e);
            }
        }

        let state = NotificationState::default();
        if let Err(e) = self.save(&state).await {
            log::warn!("Could not persist fresh state: {}", e);
        }
        state
    }

    /// Persist the state durably.
    ///
    /// The caller must treat an error as fatal for the run: until this
    /// returns `Ok`, the state change cannot be assumed durable.
    pub async fn save(&self, state: &NotificationState) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(state)?;
        self.write_atomic(&bytes)
            .await
            .map_err(|e| AppError::persistence(self.path.display().to_string(), e))?;
        log::info!("State saved: notified={}", state.notified);
        Ok(())
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_atomic(&self, bytes: &[u8]) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let tmp = self.path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_yields_default_and_heals() {
        let tmp = TempDir::new().unwrap();
        let store = StateFile::new(tmp.path().join("state.json"));

        let state = store.load().await;
        assert!(!state.notified);
        // Self-healing: the default was written back.
        assert!(store.path().exists());
    }

    #[tokio::test]
    async fn test_corrupt_file_yields_default_and_heals() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("state.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = StateFile::new(&path);
        let state = store.load().await;
        assert!(!state.notified);

        let healed = std::fs::read_to_string(&path).unwrap();
        let parsed: NotificationState = serde_json::from_str(&healed).unwrap();
        assert!(!parsed.notified);
    }

    #[tokio::test]
    async fn test_save_load_round_trip() {
        let tmp = TempDir::new().unwrap();
        let store = StateFile::new(tmp.path().join("state.json"));

        let mut state = NotificationState::default();
        state.mark_notified();
        store.save(&state).await.unwrap();

        let loaded = store.load().await;
        assert!(loaded.notified);
        assert_eq!(loaded.notified_at, state.notified_at);
    }

    #[tokio::test]
    async fn test_unknown_fields_survive_round_trip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("state.json");
        std::fs::write(&path, r#"{"notified": true, "operator_note": "keep me"}"#).unwrap();

        let store = StateFile::new(&path);
        let state = store.load().await;
        assert!(state.notified);

        store.save(&state).await.unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("operator_note"));
        assert!(written.contains("keep me"));
    }

    #[tokio::test]
    async fn test_save_into_unwritable_location_fails() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, "file, not a directory").unwrap();

        let store = StateFile::new(blocker.join("state.json"));
        let result = store.save(&NotificationState::default()).await;
        assert!(matches!(result, Err(AppError::Persistence { .. })));
    }

    #[tokio::test]
    async fn test_save_creates_parent_directories() {
        let tmp = TempDir::new().unwrap();
        let store = StateFile::new(tmp.path().join("nested/dir/state.json"));

        store.save(&NotificationState::default()).await.unwrap();
        assert!(store.path().exists());
    }
}
