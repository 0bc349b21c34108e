use async_trait::async_trait;

use crate::item::ClipboardItem;
use crate::ports::errors::PersistenceError;
use crate::settings::AppSettings;

/// Durable storage for the history and settings documents.
#[async_trait]
pub trait PersistencePort: Send + Sync {
    /// Missing or corrupt history resolves to an empty list, never an error.
    async fn load_history(&self) -> Vec<ClipboardItem>;

    /// Persists the history, re-applying favorite-priority truncation with
    /// `settings.history_limit` before writing. The gateway never trusts the
    /// caller to have already enforced the limit.
    async fn save_history(
        &self,
        items: &[ClipboardItem],
        settings: &AppSettings,
    ) -> Result<(), PersistenceError>;

    /// Missing or corrupt settings resolve to defaults, never an error.
    async fn load_settings(&self) -> AppSettings;

    async fn save_settings(&self, settings: &AppSettings) -> Result<(), PersistenceError>;
}
