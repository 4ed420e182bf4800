//! The debounced icon-root watcher.
//!
//! [`IconWatcher`] bridges the synchronous `notify` watcher to the async
//! tokio runtime. The debouncer runs in a blocking task; each debounced
//! callback is filtered and forwarded as one [`FileEventBatch`] through a
//! bounded mpsc channel.

use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use notify::RecursiveMode;
use notify_debouncer_mini::{new_debouncer, DebounceEventResult, Debouncer};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::error::WatchError;
use crate::events::{FileEvent, FileEventBatch};
use crate::filter::FileFilter;

/// Default channel capacity for event batches.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// A watcher that streams debounced event batches to an async context.
///
/// # Lifecycle
///
/// 1. **Creation**: [`IconWatcher::new`] validates the watch root, creates
///    the channels, and spawns a blocking task running the notify debouncer.
/// 2. **Reception**: [`IconWatcher::recv`] yields one batch per debounce
///    window; batches are already filtered.
/// 3. **Shutdown**: [`IconWatcher::shutdown`] for graceful teardown, or just
///    drop the watcher. Either way the blocking task stops, which drops the
///    debouncer along with its subscription and any pending window.
///
/// # Examples
///
/// ```no_run
/// use camino::Utf8Path;
/// use icongen_watcher::{IconWatcher, SvgFilter};
///
/// # async fn example() -> Result<(), icongen_watcher::WatchError> {
/// let mut watcher = IconWatcher::new(
///     Utf8Path::new("./src/assets/svg"),
///     100,
///     SvgFilter::default(),
/// ).await?;
///
/// while let Some(batch) = watcher.recv().await {
///     println!("{} changed files", batch.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct IconWatcher {
    /// Shutdown signal sender; `None` once shutdown has been initiated.
    shutdown_tx: Option<oneshot::Sender<()>>,

    /// Handle to the blocking watcher task, awaited during shutdown.
    task_handle: Option<JoinHandle<Result<(), WatchError>>>,

    /// Batch receiver for async consumption.
    batch_rx: mpsc::Receiver<FileEventBatch>,

    /// The root being watched.
    watch_path: Utf8PathBuf,
}

impl std::fmt::Debug for IconWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IconWatcher")
            .field("watch_path", &self.watch_path)
            .field("is_running", &self.is_running())
            .finish_non_exhaustive()
    }
}

impl IconWatcher {
    /// Creates a watcher for the given root with the given debounce window.
    ///
    /// The root is watched recursively without a depth limit.
    ///
    /// # Errors
    ///
    /// Returns [`WatchError::PathNotFound`] if the root doesn't exist and
    /// [`WatchError::Notify`] if the watcher fails to initialize.
    pub async fn new<F: FileFilter>(
        path: &Utf8Path,
        debounce_ms: u64,
        filter: F,
    ) -> Result<Self, WatchError> {
        Self::with_capacity(path, debounce_ms, filter, DEFAULT_CHANNEL_CAPACITY).await
    }

    /// Creates a watcher with a custom channel capacity.
    ///
    /// Use this when bursts of batches must not backpressure the watcher
    /// thread.
    #[allow(clippy::unused_async)] // Async for API consistency with shutdown()
    pub async fn with_capacity<F: FileFilter>(
        path: &Utf8Path,
        debounce_ms: u64,
        filter: F,
        channel_capacity: usize,
    ) -> Result<Self, WatchError> {
        if !path.exists() {
            return Err(WatchError::path_not_found(path));
        }

        let watch_path = path.canonicalize_utf8().map_err(WatchError::Io)?;

        let (batch_tx, batch_rx) = mpsc::channel(channel_capacity);
        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        let task_path = watch_path.clone();
        let task_handle = tokio::task::spawn_blocking(move || {
            run_watcher_loop(task_path, debounce_ms, batch_tx, shutdown_rx, filter)
        });

        Ok(Self {
            shutdown_tx: Some(shutdown_tx),
            task_handle: Some(task_handle),
            batch_rx,
            watch_path,
        })
    }

    /// Receives the next debounced batch.
    ///
    /// Returns `None` when the watcher has been shut down.
    pub async fn recv(&mut self) -> Option<FileEventBatch> {
        self.batch_rx.recv().await
    }

    /// Returns the root being watched.
    #[must_use]
    pub fn watch_path(&self) -> &Utf8Path {
        &self.watch_path
    }

    /// Returns `true` if the watcher is still running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.shutdown_tx.is_some() && self.task_handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Gracefully shuts down the watcher.
    ///
    /// Sends the shutdown signal and awaits the blocking task, returning any
    /// error it produced.
    ///
    /// # Errors
    ///
    /// Returns the watcher thread's error, or [`WatchError::ChannelClosed`]
    /// if the thread panicked.
    pub async fn shutdown(mut self) -> Result<(), WatchError> {
        if let Some(tx) = self.shutdown_tx.take() {
            // Ignore error if the receiver is already gone
            let _ = tx.send(());
        }

        if let Some(handle) = self.task_handle.take() {
            match handle.await {
                Ok(result) => result?,
                Err(_join_error) => return Err(WatchError::ChannelClosed),
            }
        }

        Ok(())
    }
}

impl Drop for IconWatcher {
    fn drop(&mut self) {
        // Signal shutdown; Drop is sync so the task is not awaited here.
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Runs the notify debouncer in a blocking context until shutdown.
///
/// Each debounced callback becomes at most one forwarded batch; callbacks
/// whose every event is filtered out are dropped entirely.
#[allow(clippy::needless_pass_by_value)] // Path must be owned for the blocking task lifetime
fn run_watcher_loop<F: FileFilter>(
    path: Utf8PathBuf,
    debounce_ms: u64,
    batch_tx: mpsc::Sender<FileEventBatch>,
    shutdown_rx: oneshot::Receiver<()>,
    filter: F,
) -> Result<(), WatchError> {
    let timeout = Duration::from_millis(debounce_ms);

    let tx = batch_tx;
    let debouncer_result: Result<Debouncer<notify::RecommendedWatcher>, notify::Error> =
        new_debouncer(timeout, move |res: DebounceEventResult| match res {
            Ok(events) => {
                let mut batch = FileEventBatch::new();
                for event in events {
                    let utf8_path = match Utf8PathBuf::try_from(event.path) {
                        Ok(p) => p,
                        Err(e) => {
                            let invalid_path = e.into_path_buf();
                            tracing::warn!(
                                path = %invalid_path.display(),
                                "skipping non-UTF-8 path in file event"
                            );
                            continue;
                        }
                    };

                    if !filter.should_process(&utf8_path) {
                        tracing::trace!(path = %utf8_path, "filtered out file event");
                        continue;
                    }

                    batch.push(FileEvent::new(utf8_path));
                }

                if batch.is_empty() {
                    return;
                }

                if tx.blocking_send(batch).is_err() {
                    tracing::debug!("batch channel closed, stopping watcher");
                }
            }
            Err(error) => {
                tracing::warn!(error = %error, "debouncer error");
            }
        });

    let mut debouncer = debouncer_result?;

    debouncer
        .watcher()
        .watch(path.as_std_path(), RecursiveMode::Recursive)?;

    tracing::info!(path = %path, debounce_ms, "icon watcher started");

    // Block until the shutdown signal arrives; dropping the debouncer on
    // return releases the subscription and any pending debounce window.
    let _ = shutdown_rx.blocking_recv();

    tracing::info!(path = %path, "icon watcher stopped");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{AcceptAllFilter, SvgFilter};
    use std::fs;
    use tempfile::TempDir;

    fn create_temp_dir() -> TempDir {
        TempDir::new().expect("Failed to create temp directory")
    }

    #[tokio::test]
    async fn test_watcher_creation() {
        let temp_dir = create_temp_dir();
        let path = Utf8Path::from_path(temp_dir.path()).expect("Invalid path");

        let watcher = IconWatcher::new(path, 100, AcceptAllFilter).await;

        assert!(watcher.is_ok());
        let watcher = watcher.expect("Watcher should be created");
        assert!(watcher.is_running());
    }

    #[tokio::test]
    async fn test_watcher_path_not_found() {
        let result = IconWatcher::new(
            Utf8Path::new("/nonexistent/path/that/does/not/exist"),
            100,
            AcceptAllFilter,
        )
        .await;

        match result {
            Err(WatchError::PathNotFound(_)) => {}
            other => panic!("Expected PathNotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_watcher_shutdown() {
        let temp_dir = create_temp_dir();
        let path = Utf8Path::from_path(temp_dir.path()).expect("Invalid path");

        let watcher = IconWatcher::new(path, 100, AcceptAllFilter)
            .await
            .expect("Failed to create watcher");

        assert!(watcher.shutdown().await.is_ok());
    }

    #[tokio::test]
    async fn test_rapid_changes_collapse_into_one_batch() {
        let temp_dir = create_temp_dir();
        let path = Utf8Path::from_path(temp_dir.path()).expect("Invalid path");

        let mut watcher = IconWatcher::new(path, 200, SvgFilter)
            .await
            .expect("Failed to create watcher");

        // Three changes well inside one debounce window.
        for name in ["a.svg", "b.svg", "c.svg"] {
            fs::write(temp_dir.path().join(name), "<svg/>").expect("Failed to write file");
        }

        let first = tokio::time::timeout(Duration::from_secs(2), watcher.recv()).await;

        // Timing-dependent; only assert when the event arrived in CI time.
        if let Ok(Some(batch)) = first {
            assert!(!batch.is_empty());
            assert!(batch.unique_paths().len() <= 3);
            // No second batch should follow from the same burst.
            let second = tokio::time::timeout(Duration::from_millis(400), watcher.recv()).await;
            assert!(second.is_err(), "burst produced a second batch");
        }

        watcher.shutdown().await.expect("Shutdown failed");
    }

    #[tokio::test]
    async fn test_directory_move_triggers_a_batch() {
        let temp_dir = create_temp_dir();
        let watch_root = temp_dir.path().join("icons");
        fs::create_dir(&watch_root).expect("Failed to create watch root");

        // Stage a populated directory outside the watch root.
        let staged = temp_dir.path().join("staged");
        fs::create_dir(&staged).expect("Failed to create staging dir");
        fs::write(staged.join("a.svg"), "<svg/>").expect("Failed to write file");

        let path = Utf8Path::from_path(&watch_root).expect("Invalid path");
        let mut watcher = IconWatcher::new(path, 50, SvgFilter)
            .await
            .expect("Failed to create watcher");

        // Moving the directory in surfaces as one event for the directory
        // itself; the contained file gets no event of its own.
        fs::rename(&staged, watch_root.join("staged")).expect("Failed to move directory");

        let received = tokio::time::timeout(Duration::from_secs(2), watcher.recv()).await;
        assert!(
            matches!(received, Ok(Some(_))),
            "directory move produced no batch"
        );

        watcher.shutdown().await.expect("Shutdown failed");
    }

    #[tokio::test]
    async fn test_non_svg_changes_are_filtered() {
        let temp_dir = create_temp_dir();
        let path = Utf8Path::from_path(temp_dir.path()).expect("Invalid path");

        let mut watcher = IconWatcher::new(path, 50, SvgFilter)
            .await
            .expect("Failed to create watcher");

        fs::write(temp_dir.path().join("notes.txt"), "hi").expect("Failed to write file");

        let received = tokio::time::timeout(Duration::from_millis(500), watcher.recv()).await;
        assert!(received.is_err(), "non-SVG change produced a batch");

        watcher.shutdown().await.expect("Shutdown failed");
    }

    #[tokio::test]
    async fn test_watcher_watch_path() {
        let temp_dir = create_temp_dir();
        let path = Utf8Path::from_path(temp_dir.path()).expect("Invalid path");

        let watcher = IconWatcher::new(path, 100, AcceptAllFilter)
            .await
            .expect("Failed to create watcher");

        assert!(!watcher.watch_path().as_str().is_empty());
    }
}
