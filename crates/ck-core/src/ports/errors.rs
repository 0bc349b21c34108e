use thiserror::Error;

/// A persistence write failed. Read paths never surface errors: missing or
/// corrupt documents resolve to empty history / default settings instead.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization failed: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// No writable persistence location could be established at startup, after
/// exhausting fallbacks. This aborts the process; it is never a runtime
/// error.
#[derive(Debug, Error)]
pub enum DataDirError {
    #[error("no writable data directory available for '{app_id}'")]
    Unavailable { app_id: String },
}
