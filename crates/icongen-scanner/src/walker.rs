//! Directory traversal for SVG icon files.
//!
//! This module provides [`SvgWalker`], which uses the `ignore` crate to walk
//! the icon root. Standard filters (gitignore, hidden files) are disabled:
//! every file under the root is a candidate, exactly as a developer dropping
//! icons into the directory would expect.

use camino::{Utf8Path, Utf8PathBuf};
use ignore::WalkBuilder;

use icongen_core::IconEntry;

use crate::error::ScanError;

/// A walker that discovers SVG files under an icon root.
///
/// # Behavior
///
/// - Recurses without a depth limit
/// - Matches the `.svg` suffix case-insensitively
/// - Returns an empty result when the root does not exist
/// - Propagates any other traversal failure
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use icongen_scanner::SvgWalker;
///
/// let walker = SvgWalker::new(Utf8Path::new("/nonexistent/icons"));
/// let paths = walker.collect_paths().unwrap();
/// assert!(paths.is_empty());
/// ```
#[derive(Debug)]
pub struct SvgWalker {
    /// The icon root to walk.
    root: Utf8PathBuf,
}

impl SvgWalker {
    /// Creates a walker for the given icon root.
    ///
    /// The root is not required to exist; see [`SvgWalker::collect_paths`].
    #[must_use]
    pub fn new(root: &Utf8Path) -> Self {
        Self {
            root: root.to_owned(),
        }
    }

    /// Collects the absolute paths of every SVG file under the root.
    ///
    /// Order is filesystem-enumeration order, not sorted.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Walk`] for any traversal failure other than a
    /// missing root.
    pub fn collect_paths(&self) -> Result<Vec<Utf8PathBuf>, ScanError> {
        if !self.root.exists() {
            tracing::debug!(root = %self.root, "icon root does not exist, treating as empty");
            return Ok(Vec::new());
        }

        let walker = WalkBuilder::new(self.root.as_std_path())
            .standard_filters(false)
            .build();

        let mut paths = Vec::new();
        for result in walker {
            let dir_entry = result?;

            if !dir_entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            let path = dir_entry.path();
            let Some(utf8_path) = Utf8Path::from_path(path) else {
                tracing::warn!(path = %path.display(), "skipping non-UTF-8 path during scan");
                continue;
            };

            if is_svg_file(utf8_path) {
                paths.push(utf8_path.to_owned());
            }
        }

        Ok(paths)
    }

    /// Collects derived [`IconEntry`] values for every SVG file under the root.
    ///
    /// This is the scan half of a generation cycle: one entry per discovered
    /// file, derived with the rules in [`icongen_core::entry`].
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Walk`] for any traversal failure other than a
    /// missing root.
    pub fn collect_entries(&self) -> Result<Vec<IconEntry>, ScanError> {
        let paths = self.collect_paths()?;
        Ok(paths
            .iter()
            .map(|path| IconEntry::from_file(path, &self.root))
            .collect())
    }
}

/// Returns `true` if the file name ends in `.svg`, any case.
fn is_svg_file(path: &Utf8Path) -> bool {
    path.file_name().is_some_and(|name| {
        name.len()
            .checked_sub(4)
            .and_then(|cut| name.get(cut..))
            .is_some_and(|suffix| suffix.eq_ignore_ascii_case(".svg"))
    })
}
