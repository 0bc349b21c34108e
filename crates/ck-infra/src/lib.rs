//! Clipkeep infrastructure layer.
//!
//! File-backed implementations of the core's persistence port plus the
//! application data directory resolution.

pub mod app_dirs;
pub mod json_persistence;

pub use app_dirs::resolve_data_dir;
pub use json_persistence::JsonPersistence;
