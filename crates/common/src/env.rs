//! Environment/runtime helpers
//!
//! Sanity checks run once at startup. Nothing here creates state on disk;
//! the service keeps everything in memory.

use tracing::warn;

/// Warn when the static frontend directory is missing. Returns whether it exists.
pub async fn ensure_env(frontend_dir: &str) -> bool {
    if tokio::fs::metadata(frontend_dir).await.is_err() {
        warn!(%frontend_dir, "frontend assets directory not found; static assets may 404");
        return false;
    }
    true
}
