//! Configuration structures for the icongen asset generator.
//!
//! This module provides the two configuration types of the tool:
//!
//! - [`GeneratorOptions`] - The user-facing surface where every field is
//!   optional and falls back to a documented default
//! - [`ResolvedOptions`] - The absolute, per-session value computed once the
//!   host's project root is known, read-only afterwards
//!
//! All paths in [`GeneratorOptions`] are interpreted relative to the project
//! root unless they are already absolute.

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

/// Default directory scanned for SVG icon files, relative to the project root.
pub const DEFAULT_ICONS_DIR: &str = "src/assets/svg";

/// Default destination for the generated identifier union type.
pub const DEFAULT_TYPE_OUTPUT: &str = "src/types/generated-svg-names.d.ts";

/// Default destination for the browsable preview page component.
pub const DEFAULT_PREVIEW_COMPONENT_OUTPUT: &str = "icon-preview/generated-preview.vue";

/// Default destination for the preview bootstrap script.
pub const DEFAULT_PREVIEW_MAIN_OUTPUT: &str = "icon-preview/main.ts";

/// Default destination for the preview HTML shell.
pub const DEFAULT_PREVIEW_HTML_OUTPUT: &str = "icon-preview.html";

/// Default regeneration coalescing window in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 100;

/// User-supplied generator options.
///
/// Every field is optional; missing fields fall back to the module-level
/// defaults. The struct deserializes from a host configuration file with
/// `#[serde(default)]`, so a partial object is valid input.
///
/// # Examples
///
/// ```
/// use icongen_core::GeneratorOptions;
///
/// let options = GeneratorOptions::default();
/// assert!(options.icons_dir.is_none());
///
/// let parsed: GeneratorOptions =
///     serde_json::from_str(r#"{"icons_dir": "assets/icons"}"#).unwrap();
/// assert_eq!(parsed.icons_dir.as_deref(), Some("assets/icons"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Directory scanned for icon files, relative to the project root.
    pub icons_dir: Option<String>,

    /// Destination for the identifier union type declaration.
    pub type_output: Option<String>,

    /// Destination for the preview page component.
    pub preview_component_output: Option<String>,

    /// Destination for the preview bootstrap script.
    pub preview_main_output: Option<String>,

    /// Destination for the preview HTML shell.
    pub preview_html_output: Option<String>,

    /// Regeneration coalescing window in milliseconds.
    pub debounce_ms: Option<u64>,
}

/// Immutable per-session configuration with absolute, resolved paths.
///
/// Computed once via [`ResolvedOptions::resolve`] when the host's project
/// root becomes available. Every generation cycle and the change-notification
/// filter read this value; nothing mutates it afterwards.
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use icongen_core::{GeneratorOptions, ResolvedOptions};
///
/// let resolved = ResolvedOptions::resolve(
///     &GeneratorOptions::default(),
///     Utf8Path::new("/project"),
/// );
/// assert_eq!(resolved.icons_root, "/project/src/assets/svg");
/// assert_eq!(resolved.debounce_ms, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedOptions {
    /// Absolute project root.
    pub root: Utf8PathBuf,

    /// Absolute directory recursively scanned for icon files.
    pub icons_root: Utf8PathBuf,

    /// Absolute destination of the type declaration file.
    pub type_output_file: Utf8PathBuf,

    /// Absolute destination of the preview page component.
    pub preview_component_file: Utf8PathBuf,

    /// Absolute destination of the preview bootstrap script.
    pub preview_main_file: Utf8PathBuf,

    /// Absolute destination of the preview HTML shell.
    pub preview_html_file: Utf8PathBuf,

    /// Regeneration coalescing window in milliseconds.
    pub debounce_ms: u64,
}

impl ResolvedOptions {
    /// Merges user options with defaults into absolute paths.
    ///
    /// Relative option paths are joined onto `root`; absolute option paths
    /// pass through unchanged.
    #[must_use]
    pub fn resolve(options: &GeneratorOptions, root: &Utf8Path) -> Self {
        let join = |configured: Option<&str>, default: &str| {
            root.join(configured.unwrap_or(default))
        };

        Self {
            root: root.to_owned(),
            icons_root: join(options.icons_dir.as_deref(), DEFAULT_ICONS_DIR),
            type_output_file: join(options.type_output.as_deref(), DEFAULT_TYPE_OUTPUT),
            preview_component_file: join(
                options.preview_component_output.as_deref(),
                DEFAULT_PREVIEW_COMPONENT_OUTPUT,
            ),
            preview_main_file: join(
                options.preview_main_output.as_deref(),
                DEFAULT_PREVIEW_MAIN_OUTPUT,
            ),
            preview_html_file: join(
                options.preview_html_output.as_deref(),
                DEFAULT_PREVIEW_HTML_OUTPUT,
            ),
            debounce_ms: options.debounce_ms.unwrap_or(DEFAULT_DEBOUNCE_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        let resolved = ResolvedOptions::resolve(&GeneratorOptions::default(), Utf8Path::new("/p"));
        assert_eq!(resolved.root, "/p");
        assert_eq!(resolved.icons_root, "/p/src/assets/svg");
        assert_eq!(resolved.type_output_file, "/p/src/types/generated-svg-names.d.ts");
        assert_eq!(
            resolved.preview_component_file,
            "/p/icon-preview/generated-preview.vue"
        );
        assert_eq!(resolved.preview_main_file, "/p/icon-preview/main.ts");
        assert_eq!(resolved.preview_html_file, "/p/icon-preview.html");
        assert_eq!(resolved.debounce_ms, DEFAULT_DEBOUNCE_MS);
    }

    #[test]
    fn test_resolve_custom_relative_paths() {
        let options = GeneratorOptions {
            icons_dir: Some("assets/icons".to_owned()),
            type_output: Some("types/icons.d.ts".to_owned()),
            debounce_ms: Some(250),
            ..GeneratorOptions::default()
        };
        let resolved = ResolvedOptions::resolve(&options, Utf8Path::new("/project"));
        assert_eq!(resolved.icons_root, "/project/assets/icons");
        assert_eq!(resolved.type_output_file, "/project/types/icons.d.ts");
        assert_eq!(resolved.debounce_ms, 250);
    }

    #[test]
    fn test_resolve_absolute_path_passes_through() {
        let options = GeneratorOptions {
            icons_dir: Some("/elsewhere/icons".to_owned()),
            ..GeneratorOptions::default()
        };
        let resolved = ResolvedOptions::resolve(&options, Utf8Path::new("/project"));
        assert_eq!(resolved.icons_root, "/elsewhere/icons");
    }

    #[test]
    fn test_options_deserialize_with_missing_fields() {
        let options: GeneratorOptions =
            serde_json::from_str(r#"{"debounce_ms": 50}"#).unwrap();
        assert_eq!(options.debounce_ms, Some(50));
        assert!(options.icons_dir.is_none());
    }

    #[test]
    fn test_resolved_options_round_trip() {
        let resolved = ResolvedOptions::resolve(&GeneratorOptions::default(), Utf8Path::new("/p"));
        let json = serde_json::to_string(&resolved).unwrap();
        let parsed: ResolvedOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(resolved, parsed);
    }
}
