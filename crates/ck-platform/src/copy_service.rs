use anyhow::{Context, Result};
use arboard::Clipboard;
use async_trait::async_trait;

use ck_core::item::ClipboardItem;
use ck_core::ports::CopyServicePort;

/// Writes a history item's text back to the OS clipboard.
///
/// `arboard::Clipboard` is not `Send`, so the handle is created and dropped
/// inside a blocking task.
pub struct ArboardCopyService;

#[async_trait]
impl CopyServicePort for ArboardCopyService {
    async fn copy(&self, item: &ClipboardItem) -> Result<()> {
        let content = item.content.clone();
        tokio::task::spawn_blocking(move || -> Result<()> {
            let mut clipboard = Clipboard::new().context("open system clipboard")?;
            clipboard
                .set_text(content)
                .context("write text to system clipboard")?;
            Ok(())
        })
        .await
        .context("clipboard writer task")?
    }
}
