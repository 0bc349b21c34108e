//! In-memory fakes shared by the monitor and repository tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;

use ck_core::history::truncate;
use ck_core::item::ClipboardItem;
use ck_core::ports::{CopyServicePort, PasteboardPort, PersistenceError, PersistencePort};
use ck_core::settings::AppSettings;

#[derive(Default)]
struct FakePasteboardState {
    change_count: u64,
    text: Option<String>,
}

/// Scriptable pasteboard: each `push` advances the change counter, like a
/// real copy does.
#[derive(Default)]
pub struct FakePasteboard {
    state: Mutex<FakePasteboardState>,
}

impl FakePasteboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, value: impl Into<String>) {
        let mut state = self.state.lock().unwrap();
        state.change_count += 1;
        state.text = Some(value.into());
    }
}

impl PasteboardPort for FakePasteboard {
    fn change_count(&self) -> u64 {
        self.state.lock().unwrap().change_count
    }

    fn read_text(&self) -> Option<String> {
        self.state.lock().unwrap().text.clone()
    }
}

/// In-memory persistence gateway mirroring the real one's truncate-on-save
/// behavior, with a record of every saved history snapshot.
pub struct FakePersistence {
    history: Mutex<Vec<ClipboardItem>>,
    settings: Mutex<AppSettings>,
    pub saved_history: Mutex<Vec<Vec<ClipboardItem>>>,
    pub saved_settings: Mutex<Vec<AppSettings>>,
    pub fail_saves: AtomicBool,
}

impl FakePersistence {
    pub fn new() -> Arc<Self> {
        Self::with(Vec::new(), AppSettings::default())
    }

    pub fn with(history: Vec<ClipboardItem>, settings: AppSettings) -> Arc<Self> {
        Arc::new(Self {
            history: Mutex::new(history),
            settings: Mutex::new(settings),
            saved_history: Mutex::new(Vec::new()),
            saved_settings: Mutex::new(Vec::new()),
            fail_saves: AtomicBool::new(false),
        })
    }

    pub fn last_saved_history(&self) -> Option<Vec<ClipboardItem>> {
        self.saved_history.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl PersistencePort for FakePersistence {
    async fn load_history(&self) -> Vec<ClipboardItem> {
        self.history.lock().unwrap().clone()
    }

    async fn save_history(
        &self,
        items: &[ClipboardItem],
        settings: &AppSettings,
    ) -> Result<(), PersistenceError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(PersistenceError::Io(std::io::Error::other(
                "saves disabled",
            )));
        }
        let limited = truncate(items.to_vec(), settings.history_limit);
        self.saved_history.lock().unwrap().push(limited.clone());
        *self.history.lock().unwrap() = limited;
        Ok(())
    }

    async fn load_settings(&self) -> AppSettings {
        self.settings.lock().unwrap().clone()
    }

    async fn save_settings(&self, settings: &AppSettings) -> Result<(), PersistenceError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(PersistenceError::Io(std::io::Error::other(
                "saves disabled",
            )));
        }
        self.saved_settings.lock().unwrap().push(settings.clone());
        *self.settings.lock().unwrap() = settings.clone();
        Ok(())
    }
}

/// Records copied items instead of touching the OS clipboard.
#[derive(Default)]
pub struct FakeCopyService {
    pub copied: Mutex<Vec<ClipboardItem>>,
}

#[async_trait]
impl CopyServicePort for FakeCopyService {
    async fn copy(&self, item: &ClipboardItem) -> Result<()> {
        self.copied.lock().unwrap().push(item.clone());
        Ok(())
    }
}
