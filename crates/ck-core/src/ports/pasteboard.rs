use anyhow::Result;
use async_trait::async_trait;

use crate::item::ClipboardItem;

/// Read-only view of the OS clipboard.
pub trait PasteboardPort: Send + Sync {
    /// Changes whenever the OS clipboard content changes. Used as the cheap
    /// first-level "did anything change" filter before any text is read.
    fn change_count(&self) -> u64;

    /// Current text payload, or `None` if the clipboard holds no text.
    fn read_text(&self) -> Option<String>;
}

/// Writes a chosen history item back to the OS clipboard.
#[async_trait]
pub trait CopyServicePort: Send + Sync {
    async fn copy(&self, item: &ClipboardItem) -> Result<()>;
}
