use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Mutex;

use arboard::Clipboard;
use tracing::warn;

use ck_core::ports::PasteboardPort;

#[derive(Default)]
struct CounterState {
    change_count: u64,
    last_hash: Option<u64>,
}

/// System clipboard read view backed by `arboard`.
///
/// arboard exposes no native change counter, so the adapter derives one: the
/// counter advances whenever the observed text hash differs from the last
/// read. That satisfies the port contract of changing whenever the clipboard
/// content changes; the monitor's content-equality check remains the source
/// of truth for dedup.
#[derive(Default)]
pub struct ArboardPasteboard {
    state: Mutex<CounterState>,
}

impl ArboardPasteboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn current_text() -> Option<String> {
        match Clipboard::new() {
            Ok(mut clipboard) => clipboard.get_text().ok(),
            Err(error) => {
                warn!(%error, "system clipboard unavailable");
                None
            }
        }
    }

    fn text_hash(text: &str) -> u64 {
        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        hasher.finish()
    }
}

impl PasteboardPort for ArboardPasteboard {
    fn change_count(&self) -> u64 {
        let hash = Self::current_text().map(|text| Self::text_hash(&text));
        let mut state = self.state.lock().expect("pasteboard counter poisoned");
        if hash != state.last_hash {
            state.last_hash = hash;
            state.change_count += 1;
        }
        state.change_count
    }

    fn read_text(&self) -> Option<String> {
        Self::current_text()
    }
}
