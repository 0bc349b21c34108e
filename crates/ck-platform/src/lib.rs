//! Clipkeep platform layer.
//!
//! Production implementations of the clipboard-facing ports on top of
//! `arboard`.

pub mod copy_service;
pub mod pasteboard;

pub use copy_service::ArboardCopyService;
pub use pasteboard::ArboardPasteboard;
