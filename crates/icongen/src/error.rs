//! Error types for the icongen orchestration crate.

use icongen_scanner::ScanError;
use icongen_watcher::WatchError;

/// Errors that can abort a generation cycle or the watch loop.
///
/// There is no retry policy and no partial-artifact rollback: a failed cycle
/// leaves whatever it already wrote on disk and waits for the next trigger.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// Scanning the icon root failed.
    #[error("icon scan failed: {0}")]
    Scan(#[from] ScanError),

    /// Reading or writing an artifact failed.
    #[error("artifact I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The icon-root watcher failed.
    #[error("icon watcher failed: {0}")]
    Watch(#[from] WatchError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = GenerateError::Io(io);
        assert!(error.to_string().contains("denied"));
    }

    #[test]
    fn test_watch_error_converts() {
        let error: GenerateError = WatchError::ChannelClosed.into();
        assert!(matches!(error, GenerateError::Watch(_)));
    }
}
