//! Environment/runtime helpers
//!
//! Sanity checks on the static asset directory served as the SPA fallback.

use std::path::Path;

use tracing::warn;

/// Check the static directory at startup.
///
/// A missing directory or `index.html` only warns (non-API requests will 404);
/// a path that exists but is not a directory is an error.
pub async fn ensure_static_dir(static_dir: &str) -> anyhow::Result<()> {
    match tokio::fs::metadata(static_dir).await {
        Ok(meta) if !meta.is_dir() => {
            return Err(anyhow::anyhow!("{static_dir} exists but is not a directory"));
        }
        Ok(_) => {}
        Err(_) => {
            warn!(%static_dir, "static assets directory not found; non-API requests will 404");
            return Ok(());
        }
    }
    let index = Path::new(static_dir).join("index.html");
    if tokio::fs::metadata(&index).await.is_err() {
        warn!(index = %index.display(), "index.html missing; SPA fallback will 404");
    }
    Ok(())
}
