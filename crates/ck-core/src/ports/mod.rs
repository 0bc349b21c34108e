//! Port interfaces between the core pipeline and its collaborators.
//!
//! Ports define the contract between the capture/history logic and the
//! infrastructure (persistence) and platform (OS clipboard) layers, so the
//! core stays testable without real clipboard access or disk I/O. Every port
//! has one production implementation and at least one in-memory fake or mock
//! used in tests.

pub mod errors;
mod pasteboard;
mod persistence;

pub use errors::{DataDirError, PersistenceError};
pub use pasteboard::{CopyServicePort, PasteboardPort};
pub use persistence::PersistencePort;
