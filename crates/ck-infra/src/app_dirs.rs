use std::path::PathBuf;

use tracing::warn;

use ck_core::ports::DataDirError;

/// Resolves (and creates) the per-application data directory.
///
/// Primary location is the platform data-local directory; when that cannot
/// be created the system temp directory is used instead. Failing both is a
/// startup-abort condition.
pub fn resolve_data_dir(app_id: &str) -> Result<PathBuf, DataDirError> {
    if let Some(primary) = dirs::data_local_dir().map(|base| base.join(app_id)) {
        match std::fs::create_dir_all(&primary) {
            Ok(()) => return Ok(primary),
            Err(error) => warn!(
                %error,
                path = %primary.display(),
                "primary data dir unavailable, falling back to temp dir"
            ),
        }
    }

    let fallback = std::env::temp_dir().join(app_id);
    match std::fs::create_dir_all(&fallback) {
        Ok(()) => Ok(fallback),
        Err(_) => Err(DataDirError::Unavailable {
            app_id: app_id.to_string(),
        }),
    }
}
