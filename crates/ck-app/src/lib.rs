//! Clipkeep application layer.
//!
//! Wires the capture pipeline together: the [`ClipboardMonitor`] polls the
//! pasteboard port and emits unique text captures, and the
//! [`ClipboardRepository`] feeds them into the history store, broadcasts
//! list snapshots and persists mutations.

pub mod monitor;
pub mod repository;

#[cfg(test)]
mod testing;

pub use monitor::{ClipboardMonitor, DEFAULT_POLL_INTERVAL};
pub use repository::ClipboardRepository;
