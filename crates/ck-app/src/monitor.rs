use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;
use url::Url;

use ck_core::item::{ClipboardItem, ContentType};
use ck_core::ports::PasteboardPort;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(600);

#[derive(Debug)]
struct PollState {
    last_change_count: u64,
    last_content: Option<String>,
}

/// Polls the pasteboard and emits genuinely new text captures.
///
/// Two-level dedup: the change counter gates out unchanged clipboards
/// cheaply, and a content-equality check catches counter advances that did
/// not change the visible text (copying the same value twice).
pub struct ClipboardMonitor {
    pasteboard: Arc<dyn PasteboardPort>,
    poll_interval: Duration,
    state: Arc<Mutex<PollState>>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl ClipboardMonitor {
    pub fn new(pasteboard: Arc<dyn PasteboardPort>) -> Self {
        Self::with_interval(pasteboard, DEFAULT_POLL_INTERVAL)
    }

    pub fn with_interval(pasteboard: Arc<dyn PasteboardPort>, poll_interval: Duration) -> Self {
        // Seed from the adapter so content already on the clipboard at
        // startup is not captured.
        let state = PollState {
            last_change_count: pasteboard.change_count(),
            last_content: None,
        };
        Self {
            pasteboard,
            poll_interval,
            state: Arc::new(Mutex::new(state)),
            task: Mutex::new(None),
        }
    }

    /// One sweep of the dedup pipeline. Public for timer-less use and tests.
    pub fn poll(&self) -> Option<ClipboardItem> {
        poll_once(self.pasteboard.as_ref(), &self.state)
    }

    /// Starts the poll timer; captures are delivered through `tx`. Calling
    /// while already running is a no-op.
    pub fn start(&self, tx: mpsc::Sender<ClipboardItem>) {
        let mut task = self.task.lock().expect("monitor task slot poisoned");
        if task.is_some() {
            return;
        }

        let pasteboard = Arc::clone(&self.pasteboard);
        let state = Arc::clone(&self.state);
        let poll_interval = self.poll_interval;
        *task = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(poll_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                if let Some(item) = poll_once(pasteboard.as_ref(), &state) {
                    if tx.send(item).await.is_err() {
                        // Receiver gone, nobody ingests anymore.
                        break;
                    }
                }
            }
        }));
    }

    /// Cancels the poll timer. Safe to call when not running.
    pub fn stop(&self) {
        if let Some(task) = self.task.lock().expect("monitor task slot poisoned").take() {
            task.abort();
        }
    }
}

impl Drop for ClipboardMonitor {
    fn drop(&mut self) {
        self.stop();
    }
}

fn poll_once(pasteboard: &dyn PasteboardPort, state: &Mutex<PollState>) -> Option<ClipboardItem> {
    let mut state = state.lock().expect("monitor poll state poisoned");

    let current = pasteboard.change_count();
    if current == state.last_change_count {
        return None;
    }
    state.last_change_count = current;

    let text = pasteboard.read_text()?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if state.last_content.as_deref() == Some(trimmed) {
        return None;
    }
    state.last_content = Some(trimmed.to_string());

    let content_type = classify(trimmed);
    debug!(?content_type, "captured clipboard text");
    Some(ClipboardItem::new(trimmed, content_type))
}

/// A parse with an explicit scheme is treated as a link; bare hostnames stay
/// plain text.
fn classify(text: &str) -> ContentType {
    match Url::parse(text) {
        Ok(url) if !url.scheme().is_empty() => ContentType::Link,
        _ => ContentType::Text,
    }
}
