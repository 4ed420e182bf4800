//! Change-aware file writing.
//!
//! A generation cycle runs inside the very watch loop its outputs could
//! retrigger. Writing only on byte difference breaks that feedback loop: an
//! unchanged artifact produces no filesystem modification event and no
//! downstream hot-reload.

use camino::Utf8Path;

/// Writes `content` to `path` only if the on-disk bytes differ.
///
/// Parent directories are created as needed. A missing file counts as
/// differing. Returns `true` if a write occurred.
///
/// # Errors
///
/// Propagates any I/O failure other than the target not existing yet.
pub async fn write_if_changed(path: &Utf8Path, content: &str) -> Result<bool, std::io::Error> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let existing = match tokio::fs::read(path).await {
        Ok(bytes) => Some(bytes),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => None,
        Err(error) => return Err(error),
    };

    if existing.as_deref() == Some(content.as_bytes()) {
        tracing::trace!(path = %path, "content unchanged, skipping write");
        return Ok(false);
    }

    tokio::fs::write(path, content).await?;
    tracing::debug!(path = %path, bytes = content.len(), "wrote artifact");
    Ok(true)
}
