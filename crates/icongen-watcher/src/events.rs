//! Event types for debounced filesystem change notifications.
//!
//! The debouncer collapses every change inside one idle window into a single
//! callback; that callback becomes one [`FileEventBatch`]. Consumers run at
//! most one regeneration cycle per batch, which is the whole point of the
//! debounce window.

use std::time::Instant;

use camino::Utf8PathBuf;
use smallvec::SmallVec;

/// A single debounced file change with a UTF-8 path guarantee.
///
/// The debouncer intentionally abstracts away whether the change was a
/// create, modify, or delete; a full rescan follows either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEvent {
    /// Absolute path of the file that changed.
    pub path: Utf8PathBuf,

    /// Monotonic timestamp at which the event was received.
    pub timestamp: Instant,
}

impl FileEvent {
    /// Creates a new file event for the given path, stamped now.
    #[inline]
    #[must_use]
    pub fn new(path: Utf8PathBuf) -> Self {
        Self {
            path,
            timestamp: Instant::now(),
        }
    }

    /// Returns the file name without the directory path.
    #[inline]
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name()
    }
}

/// One debounced batch of file events.
///
/// Uses [`SmallVec`] with inline storage for up to 8 events, avoiding heap
/// allocation for the common small batch.
///
/// # Examples
///
/// ```
/// use camino::Utf8PathBuf;
/// use icongen_watcher::{FileEvent, FileEventBatch};
///
/// let mut batch = FileEventBatch::new();
/// batch.push(FileEvent::new(Utf8PathBuf::from("icons/a.svg")));
/// batch.push(FileEvent::new(Utf8PathBuf::from("icons/b.svg")));
/// assert_eq!(batch.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct FileEventBatch {
    /// The events in this batch.
    pub events: SmallVec<[FileEvent; 8]>,

    /// When this batch was assembled.
    pub received_at: Instant,
}

impl FileEventBatch {
    /// Creates a new empty batch stamped now.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: SmallVec::new(),
            received_at: Instant::now(),
        }
    }

    /// Creates a batch from an iterator of events.
    #[inline]
    #[must_use]
    pub fn from_events(events: impl IntoIterator<Item = FileEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            received_at: Instant::now(),
        }
    }

    /// Adds an event to the batch.
    #[inline]
    pub fn push(&mut self, event: FileEvent) {
        self.events.push(event);
    }

    /// Returns the number of events in this batch.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if the batch contains no events.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns an iterator over the events.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &FileEvent> {
        self.events.iter()
    }

    /// Returns the unique paths in this batch, sorted.
    ///
    /// Useful when several events for the same file land in one window.
    #[must_use]
    pub fn unique_paths(&self) -> Vec<&Utf8PathBuf> {
        let mut paths: Vec<&Utf8PathBuf> = self.events.iter().map(|e| &e.path).collect();
        paths.sort();
        paths.dedup();
        paths
    }
}

impl Default for FileEventBatch {
    fn default() -> Self {
        Self::new()
    }
}

impl IntoIterator for FileEventBatch {
    type Item = FileEvent;
    type IntoIter = smallvec::IntoIter<[FileEvent; 8]>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

impl<'a> IntoIterator for &'a FileEventBatch {
    type Item = &'a FileEvent;
    type IntoIter = std::slice::Iter<'a, FileEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

impl FromIterator<FileEvent> for FileEventBatch {
    fn from_iter<T: IntoIterator<Item = FileEvent>>(iter: T) -> Self {
        Self::from_events(iter)
    }
}
