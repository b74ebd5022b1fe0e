//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use tracing::warn;

/// Warn when the admin panel asset directory is missing; the API still works,
/// the static routes just 404.
pub async fn ensure_env(admin_dir: &str) -> anyhow::Result<()> {
    if tokio::fs::metadata(admin_dir).await.is_err() {
        warn!(%admin_dir, "admin assets directory not found; /internal-tool may 404");
    }
    Ok(())
}
