//! File filtering for watch events.
//!
//! Events are filtered in the blocking watcher thread before they reach the
//! channel, so a burst of irrelevant changes (editor temp files, build
//! output) never wakes the async consumer.

use camino::Utf8Path;

/// A predicate deciding which file events to forward.
///
/// Filters must be [`Send`] + [`Sync`] + `'static` because they are moved
/// into the blocking watcher task.
pub trait FileFilter: Send + Sync + 'static {
    /// Returns `true` if the event for `path` should be forwarded.
    fn should_process(&self, path: &Utf8Path) -> bool;
}

/// A filter that accepts every file.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAllFilter;

impl FileFilter for AcceptAllFilter {
    #[inline]
    fn should_process(&self, _path: &Utf8Path) -> bool {
        true
    }
}

/// The icon filter: accepts `.svg` paths (any case) and extensionless paths.
///
/// An extensionless path is almost always a directory, and a directory
/// rename or move can be the only notification the contained files ever get,
/// so those events must trigger a rescan rather than be dropped. Files with
/// a non-icon extension are rejected.
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use icongen_watcher::{FileFilter, SvgFilter};
///
/// let filter = SvgFilter::default();
/// assert!(filter.should_process(Utf8Path::new("icons/close.svg")));
/// assert!(filter.should_process(Utf8Path::new("icons/Close.SVG")));
/// assert!(filter.should_process(Utf8Path::new("icons/arrows")));
/// assert!(!filter.should_process(Utf8Path::new("icons/readme.md")));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgFilter;

impl FileFilter for SvgFilter {
    fn should_process(&self, path: &Utf8Path) -> bool {
        match path.extension() {
            Some(ext) => ext.eq_ignore_ascii_case("svg"),
            None => true,
        }
    }
}

impl<F: FileFilter + ?Sized> FileFilter for Box<F> {
    fn should_process(&self, path: &Utf8Path) -> bool {
        (**self).should_process(path)
    }
}

impl<F: FileFilter + ?Sized> FileFilter for std::sync::Arc<F> {
    fn should_process(&self, path: &Utf8Path) -> bool {
        (**self).should_process(path)
    }
}
