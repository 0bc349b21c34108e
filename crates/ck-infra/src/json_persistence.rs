use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tokio::fs;
use tracing::warn;

use ck_core::history::truncate;
use ck_core::item::ClipboardItem;
use ck_core::ports::{PersistenceError, PersistencePort};
use ck_core::settings::AppSettings;

const HISTORY_FILE: &str = "history.json";
const SETTINGS_FILE: &str = "settings.json";

/// History and settings as two independent JSON documents.
///
/// Writes go through a temp-file-and-rename replacement so a crash mid-write
/// cannot leave a half-written document. Reads never fail: a missing, empty
/// or corrupt file resolves to the empty/default value with a log line.
pub struct JsonPersistence {
    history_path: PathBuf,
    settings_path: PathBuf,
}

impl JsonPersistence {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        let base = base_dir.into();
        Self {
            history_path: base.join(HISTORY_FILE),
            settings_path: base.join(SETTINGS_FILE),
        }
    }

    async fn atomic_write(path: &Path, content: &str) -> Result<(), PersistenceError> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).await?;
        }

        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, content).await?;
        fs::rename(&tmp_path, path).await?;
        Ok(())
    }

    async fn read_document<T: DeserializeOwned>(path: &Path) -> Option<T> {
        let content = match fs::read_to_string(path).await {
            Ok(content) => content,
            Err(error) if error.kind() == ErrorKind::NotFound => return None,
            Err(error) => {
                warn!(%error, path = %path.display(), "failed to read persisted document");
                return None;
            }
        };
        if content.trim().is_empty() {
            return None;
        }

        match serde_json::from_str(&content) {
            Ok(value) => Some(value),
            Err(error) => {
                warn!(%error, path = %path.display(), "persisted document corrupt, using fallback");
                None
            }
        }
    }
}

#[async_trait]
impl PersistencePort for JsonPersistence {
    async fn load_history(&self) -> Vec<ClipboardItem> {
        Self::read_document(&self.history_path)
            .await
            .unwrap_or_default()
    }

    async fn save_history(
        &self,
        items: &[ClipboardItem],
        settings: &AppSettings,
    ) -> Result<(), PersistenceError> {
        // Never trust the caller to have enforced the limit already.
        let limited = truncate(items.to_vec(), settings.history_limit);
        let content = serde_json::to_string_pretty(&limited)?;
        Self::atomic_write(&self.history_path, &content).await
    }

    async fn load_settings(&self) -> AppSettings {
        Self::read_document::<AppSettings>(&self.settings_path)
            .await
            .map(AppSettings::normalized)
            .unwrap_or_default()
    }

    async fn save_settings(&self, settings: &AppSettings) -> Result<(), PersistenceError> {
        let content = serde_json::to_string_pretty(settings)?;
        Self::atomic_write(&self.settings_path, &content).await
    }
}
