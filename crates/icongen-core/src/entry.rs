//! The [`IconEntry`] type and its path-derivation rules.
//!
//! An entry is derived from a discovered file path and the scan root by pure
//! string manipulation: no I/O, no hidden state. Given unchanged files the
//! derivation is stable across runs, which is what makes the generated
//! identifier usable as a type-level string literal.
//!
//! # Derivation rules
//!
//! For a file at `<root>/arrows/left.svg`:
//!
//! - `name` = `arrows-left` (relative path, extension stripped, segments
//!   joined with `-`)
//! - `path` = `arrows/left` (same, joined with `/`, never contains `\`)
//! - `category` = `arrows` (parent directory, or `root` directly under the
//!   scan root)

use camino::{Utf8Component, Utf8Path};
use serde::{Deserialize, Serialize};

/// The recognized icon file extension, matched case-insensitively.
pub const ICON_EXTENSION: &str = ".svg";

/// One discovered icon.
///
/// Entries are recomputed wholesale on every generation cycle; there is no
/// persisted identity across cycles.
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use icongen_core::IconEntry;
///
/// let entry = IconEntry::from_file(
///     Utf8Path::new("/icons/arrows/left.svg"),
///     Utf8Path::new("/icons"),
/// );
/// assert_eq!(entry.name, "arrows-left");
/// assert_eq!(entry.path, "arrows/left");
/// assert_eq!(entry.category, "arrows");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IconEntry {
    /// Derived identifier, used as a type-union member and preview lookup key.
    ///
    /// Uniqueness is intended but not enforced: two files whose derived
    /// names coincide both end up in the output.
    pub name: String,

    /// Root-relative, forward-slash, extension-stripped display path.
    pub path: String,

    /// Parent directory name, or `"root"` directly under the scan root.
    pub category: String,
}

impl IconEntry {
    /// Derives an entry from a discovered file path and the scan root.
    ///
    /// A `file` outside `icons_root` is treated as relative to nothing and
    /// derived from its full path; the scanner never produces such paths.
    #[must_use]
    pub fn from_file(file: &Utf8Path, icons_root: &Utf8Path) -> Self {
        let relative = file.strip_prefix(icons_root).unwrap_or(file);

        let mut segments: Vec<&str> = relative
            .components()
            .filter_map(|component| match component {
                Utf8Component::Normal(segment) => Some(segment),
                _ => None,
            })
            .collect();

        // The extension is only recognized on the final segment.
        if let Some(last) = segments.pop() {
            let stripped = strip_icon_extension(last);
            if !stripped.is_empty() {
                segments.push(stripped);
            }
        }

        let name = segments.join("-");
        let path = segments.join("/").replace('\\', "/");
        let category = derive_category(&path);

        Self {
            name,
            path,
            category,
        }
    }
}

/// Strips a trailing `.svg` (any case) from a path segment.
fn strip_icon_extension(segment: &str) -> &str {
    let Some(cut) = segment.len().checked_sub(ICON_EXTENSION.len()) else {
        return segment;
    };
    match segment.get(cut..) {
        Some(suffix) if suffix.eq_ignore_ascii_case(ICON_EXTENSION) => &segment[..cut],
        _ => segment,
    }
}

/// Second-to-last segment of a display path, or `"root"` for top-level icons.
fn derive_category(display_path: &str) -> String {
    let parts: Vec<&str> = display_path.split('/').filter(|p| !p.is_empty()).collect();
    if parts.len() < 2 {
        return "root".to_owned();
    }
    parts[parts.len() - 2].to_owned()
}
