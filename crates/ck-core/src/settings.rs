use serde::{Deserialize, Serialize};

pub const DEFAULT_HISTORY_LIMIT: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShortcutModifier {
    Command,
    Option,
    Control,
    Shift,
}

/// Describes a keyboard shortcut (key + modifiers) for global actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutDescriptor {
    pub key: String,
    pub modifiers: Vec<ShortcutModifier>,
}

impl ShortcutDescriptor {
    pub fn new(key: impl Into<String>, modifiers: Vec<ShortcutModifier>) -> Self {
        Self {
            key: key.into(),
            modifiers,
        }
    }
}

/// User-facing application settings.
///
/// `history_limit` is always at least 1; out-of-range values are coerced up
/// both at construction and after a load from disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    pub history_limit: i64,
    pub close_after_paste: bool,
    pub launch_at_login: bool,
    pub show_preview: bool,
    pub global_shortcut: ShortcutDescriptor,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            close_after_paste: false,
            launch_at_login: false,
            show_preview: true,
            global_shortcut: ShortcutDescriptor::new(
                "v",
                vec![ShortcutModifier::Command, ShortcutModifier::Shift],
            ),
        }
    }
}

impl AppSettings {
    /// Coerces a non-positive history limit up to 1.
    pub fn normalized(mut self) -> Self {
        self.history_limit = self.history_limit.max(1);
        self
    }
}
