//! Headless clipboard-history daemon.
//!
//! Wires the production adapters into the repository, reloads persisted
//! state and monitors the clipboard until interrupted. UI front ends attach
//! through the repository's operations and its subscription stream.

use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use ck_app::{ClipboardMonitor, ClipboardRepository};
use ck_infra::{resolve_data_dir, JsonPersistence};
use ck_platform::{ArboardCopyService, ArboardPasteboard};

const APP_ID: &str = "clipkeep";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let data_dir = resolve_data_dir(APP_ID)?;
    info!(path = %data_dir.display(), "using data directory");

    let persistence = Arc::new(JsonPersistence::new(&data_dir));
    let pasteboard = Arc::new(ArboardPasteboard::new());
    let monitor = Arc::new(ClipboardMonitor::new(pasteboard));
    let repository = ClipboardRepository::new(monitor, persistence, Arc::new(ArboardCopyService));

    // Persisted state must be in place before the first capture lands.
    let items = repository.reload_history().await;
    info!(count = items.len(), "history loaded");

    repository.start_monitoring();

    let mut updates = repository.subscribe();
    tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let count = updates.borrow().len();
            debug!(count, "history updated");
        }
    });

    tokio::signal::ctrl_c().await?;
    info!("shutting down");
    repository.stop_monitoring();
    Ok(())
}
