//! The generation cycle: scan, derive, render, conditionally write.
//!
//! One call to [`generate`] produces a consistent snapshot of all four
//! artifacts from a single directory walk. The four writes are issued
//! concurrently; they are independent files and completion order does not
//! matter. There is no multi-file transaction - a failing write leaves the
//! already-written artifacts in place.

use icongen_core::{IconEntry, ResolvedOptions};
use icongen_render::{
    build_preview_component, build_preview_html, build_preview_main, build_type_file,
};
use icongen_scanner::{ScanError, SvgWalker};

use crate::error::GenerateError;
use crate::write::write_if_changed;

/// The four rendered artifacts of one generation cycle, plus the entries
/// they were rendered from.
///
/// Transient: lives only for the duration of one cycle.
#[derive(Debug, Clone)]
pub struct GeneratedFiles {
    /// The identifier union type declaration.
    pub type_content: String,
    /// The preview page component.
    pub preview_content: String,
    /// The preview bootstrap script.
    pub preview_main: String,
    /// The preview HTML shell.
    pub preview_html: String,
    /// The entries the artifacts were rendered from.
    pub entries: Vec<IconEntry>,
}

/// Scans the icon root and derives one entry per discovered file.
///
/// # Errors
///
/// Returns [`ScanError`] for traversal failures; a missing icon root is not
/// one and yields an empty list.
pub fn collect_entries(options: &ResolvedOptions) -> Result<Vec<IconEntry>, ScanError> {
    SvgWalker::new(&options.icons_root).collect_entries()
}

/// Renders all four artifacts from the given entries.
///
/// Entries whose derived name is empty are excluded from the type union but
/// still appear in the preview, mirroring the per-artifact derivation rules.
#[must_use]
pub fn build_artifacts(entries: Vec<IconEntry>, options: &ResolvedOptions) -> GeneratedFiles {
    let names: Vec<String> = entries
        .iter()
        .map(|entry| entry.name.clone())
        .filter(|name| !name.is_empty())
        .collect();

    GeneratedFiles {
        type_content: build_type_file(&names),
        preview_content: build_preview_component(&entries),
        preview_main: build_preview_main(),
        preview_html: build_preview_html(&options.preview_main_file, &options.root),
        entries,
    }
}

/// Writes the four artifacts concurrently, each only if changed.
///
/// # Errors
///
/// Propagates the first write failure; sibling writes may already have
/// completed.
pub async fn write_artifacts(
    files: &GeneratedFiles,
    options: &ResolvedOptions,
) -> Result<(), std::io::Error> {
    tokio::try_join!(
        write_if_changed(&options.type_output_file, &files.type_content),
        write_if_changed(&options.preview_component_file, &files.preview_content),
        write_if_changed(&options.preview_main_file, &files.preview_main),
        write_if_changed(&options.preview_html_file, &files.preview_html),
    )?;
    Ok(())
}

/// Runs one full generation cycle and returns the number of entries.
///
/// # Errors
///
/// Returns [`GenerateError`] if scanning or writing fails. The cycle has no
/// partial-success state; the caller decides whether to retry on the next
/// trigger.
pub async fn generate(options: &ResolvedOptions) -> Result<usize, GenerateError> {
    let entries = collect_entries(options)?;
    let files = build_artifacts(entries, options);
    write_artifacts(&files, options).await?;
    Ok(files.entries.len())
}
