//! Error types for the icongen-watcher crate.

use camino::Utf8PathBuf;

/// Errors that can occur during icon-root watching.
///
/// # Error Recovery Strategy
///
/// - **Notify errors** ([`WatchError::Notify`]): fatal, propagate immediately
/// - **Path not found** ([`WatchError::PathNotFound`]): fatal, the watch root
///   must exist before a watcher is created
/// - **Channel closed** ([`WatchError::ChannelClosed`]): fatal, communication
///   with the blocking task is broken
/// - **I/O errors** ([`WatchError::Io`]): fatal, propagate immediately
///
/// Non-UTF-8 paths inside individual events are not errors; they are logged
/// and skipped in the watcher callback.
#[derive(Debug, thiserror::Error)]
pub enum WatchError {
    /// Failed to initialize or operate the notify watcher.
    #[error("notify watcher error: {0}")]
    Notify(#[from] notify::Error),

    /// The watch root does not exist.
    #[error("watch root does not exist: {0}")]
    PathNotFound(Utf8PathBuf),

    /// The event channel was closed unexpectedly.
    #[error("event channel closed unexpectedly")]
    ChannelClosed,

    /// An I/O error occurred during path validation.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WatchError {
    /// Creates a new [`WatchError::PathNotFound`] error.
    #[inline]
    pub fn path_not_found(path: impl Into<Utf8PathBuf>) -> Self {
        Self::PathNotFound(path.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_not_found_display() {
        let error = WatchError::path_not_found("/missing/icons");
        assert!(error.to_string().contains("/missing/icons"));
    }

    #[test]
    fn test_channel_closed_display() {
        assert!(WatchError::ChannelClosed.to_string().contains("channel"));
    }
}
