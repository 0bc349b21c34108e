use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::{mpsc, watch, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use uuid::Uuid;

use ck_core::history::HistoryStore;
use ck_core::item::ClipboardItem;
use ck_core::ports::{CopyServicePort, PersistencePort};
use ck_core::settings::AppSettings;

use crate::monitor::ClipboardMonitor;

const INGEST_CHANNEL_CAPACITY: usize = 32;

/// Orchestrates monitor, history store, persistence gateway and copy
/// service.
///
/// Every mutation broadcasts the resulting list through a watch channel, so
/// new subscribers immediately see the latest snapshot and every subsequent
/// change exactly once. Monitor-driven ingestion persists best-effort;
/// user-invoked mutations persist synchronously and propagate failures.
pub struct ClipboardRepository {
    store: Mutex<HistoryStore>,
    persistence: Arc<dyn PersistencePort>,
    copy_service: Arc<dyn CopyServicePort>,
    monitor: Arc<ClipboardMonitor>,
    settings: Mutex<AppSettings>,
    items_tx: watch::Sender<Vec<ClipboardItem>>,
    ingest_task: std::sync::Mutex<Option<JoinHandle<()>>>,
}

impl ClipboardRepository {
    pub fn new(
        monitor: Arc<ClipboardMonitor>,
        persistence: Arc<dyn PersistencePort>,
        copy_service: Arc<dyn CopyServicePort>,
    ) -> Arc<Self> {
        let (items_tx, _) = watch::channel(Vec::new());
        Arc::new(Self {
            store: Mutex::new(HistoryStore::new()),
            persistence,
            copy_service,
            monitor,
            settings: Mutex::new(AppSettings::default()),
            items_tx,
            ingest_task: std::sync::Mutex::new(None),
        })
    }

    /// Replay-latest subscription to history snapshots.
    pub fn subscribe(&self) -> watch::Receiver<Vec<ClipboardItem>> {
        self.items_tx.subscribe()
    }

    /// Wires monitor captures into ingestion and starts the poll timer.
    /// Idempotent. Call [`reload_history`](Self::reload_history) first so a
    /// cold start does not overwrite persisted state.
    pub fn start_monitoring(self: &Arc<Self>) {
        let mut task = self.ingest_task.lock().expect("ingest task slot poisoned");
        if task.is_some() {
            return;
        }

        let (tx, mut rx) = mpsc::channel(INGEST_CHANNEL_CAPACITY);
        self.monitor.start(tx);

        let repository = Arc::clone(self);
        *task = Some(tokio::spawn(async move {
            while let Some(item) = rx.recv().await {
                repository.ingest(item).await;
            }
        }));
    }

    /// Cancels the poll timer and the ingestion pipeline. In-flight
    /// persistence writes run to completion.
    pub fn stop_monitoring(&self) {
        self.monitor.stop();
        if let Some(task) = self
            .ingest_task
            .lock()
            .expect("ingest task slot poisoned")
            .take()
        {
            task.abort();
        }
    }

    /// Snapshot of the in-memory history.
    pub async fn current_items(&self) -> Vec<ClipboardItem> {
        self.store.lock().await.all()
    }

    /// The settings adopted by the last reload (defaults before that).
    pub async fn current_settings(&self) -> AppSettings {
        self.settings.lock().await.clone()
    }

    /// Loads settings and history from the gateway, adopts the persisted
    /// limit and replaces the store contents. Never fails: missing or
    /// corrupt documents resolve to defaults.
    pub async fn reload_history(&self) -> Vec<ClipboardItem> {
        let loaded = self.persistence.load_settings().await.normalized();
        let limit = loaded.history_limit;
        *self.settings.lock().await = loaded;

        let history = self.persistence.load_history().await;
        let items = self.store.lock().await.set_initial(history, limit);
        self.items_tx.send_replace(items.clone());
        items
    }

    /// Flips the favorite flag of the matching item; `Ok(None)` when the id
    /// is unknown or the item fell out of the truncation window.
    pub async fn toggle_favorite(&self, id: Uuid) -> Result<Option<ClipboardItem>> {
        let limit = self.settings.lock().await.history_limit;
        let (updated, items) = self.store.lock().await.toggle_favorite(id, limit);
        self.items_tx.send_replace(items.clone());
        self.persist(&items).await.context("toggle favorite")?;
        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let items = self.store.lock().await.delete(id);
        self.items_tx.send_replace(items.clone());
        self.persist(&items).await.context("delete item")
    }

    pub async fn clear_history(&self) -> Result<()> {
        let items = self.store.lock().await.clear();
        self.items_tx.send_replace(items.clone());
        self.persist(&items).await.context("clear history")
    }

    pub async fn clear_non_favorites(&self) -> Result<()> {
        let items = self.store.lock().await.clear_non_favorites();
        self.items_tx.send_replace(items.clone());
        self.persist(&items).await.context("clear non-favorites")
    }

    /// Persists new settings, adopts the (normalized) limit and re-truncates
    /// the in-memory history to it.
    pub async fn update_settings(&self, settings: AppSettings) -> Result<()> {
        let settings = settings.normalized();
        self.persistence
            .save_settings(&settings)
            .await
            .context("save settings")?;

        let limit = settings.history_limit;
        *self.settings.lock().await = settings;

        let items = {
            let mut store = self.store.lock().await;
            let current = store.all();
            store.set_initial(current, limit)
        };
        self.items_tx.send_replace(items.clone());
        self.persist(&items).await.context("re-truncate history")
    }

    /// Writes the item back to the OS clipboard. History is untouched; the
    /// monitor's content-equality dedup suppresses the echo.
    pub async fn copy_to_clipboard(&self, item: &ClipboardItem) -> Result<()> {
        self.copy_service.copy(item).await.context("copy to clipboard")
    }

    /// Monitor-driven ingestion: insert, broadcast, persist best-effort.
    /// The in-memory list stays authoritative for the session when the
    /// write fails.
    async fn ingest(&self, item: ClipboardItem) {
        let settings = self.settings.lock().await.clone();
        let items = self.store.lock().await.insert(item, settings.history_limit);
        debug!(count = items.len(), "ingested clipboard capture");
        self.items_tx.send_replace(items.clone());

        let persistence = Arc::clone(&self.persistence);
        tokio::spawn(async move {
            if let Err(error) = persistence.save_history(&items, &settings).await {
                warn!(%error, "best-effort history persist failed");
            }
        });
    }

    async fn persist(&self, items: &[ClipboardItem]) -> Result<(), ck_core::ports::PersistenceError> {
        let settings = self.settings.lock().await.clone();
        self.persistence.save_history(items, &settings).await
    }
}
