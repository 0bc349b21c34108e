use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Supported clipboard content categories.
///
/// `Image` and `Other` are reserved for future capture sources; the monitor
/// currently only distinguishes text from links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Text,
    Link,
    Image,
    Other,
}

/// Metadata attached to clipboard items (kept small but extensible).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_app_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_bundle_identifier: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<HashMap<String, String>>,
}

/// A single captured clipboard value.
///
/// `id` is stable across mutations of the same logical entry; `content`
/// equality is the dedup key used by the history store and the monitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipboardItem {
    pub id: Uuid,
    pub captured_at: DateTime<Utc>,
    pub content: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub is_favorite: bool,
    #[serde(default)]
    pub metadata: ItemMetadata,
}

impl ClipboardItem {
    /// Builds a fresh capture with a new id and the current timestamp.
    pub fn new(content: impl Into<String>, content_type: ContentType) -> Self {
        Self {
            id: Uuid::new_v4(),
            captured_at: Utc::now(),
            content: content.into(),
            content_type,
            is_favorite: false,
            metadata: ItemMetadata::default(),
        }
    }

    /// Transient plain-text copy for one-shot pastes.
    ///
    /// Shares the id with the source entry and must never be inserted into
    /// history as a new item.
    pub fn plain_text_variant(&self) -> Self {
        Self {
            content_type: ContentType::Text,
            ..self.clone()
        }
    }
}
