//! # ck-core
//!
//! Core domain models and business logic for clipkeep.
//!
//! This crate contains pure business logic without any infrastructure
//! dependencies: the clipboard item and settings models, the ordered
//! favorite-priority history store, and the port traits implemented by
//! the infrastructure and platform layers.

// Public module exports
pub mod history;
pub mod item;
pub mod ports;
pub mod settings;

// Re-export commonly used types at the crate root
pub use history::{truncate, HistoryStore};
pub use item::{ClipboardItem, ContentType, ItemMetadata};
pub use settings::{AppSettings, ShortcutDescriptor, ShortcutModifier};
