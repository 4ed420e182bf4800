//! Pure artifact renderers for the icongen asset generator.
//!
//! Four independent renderers turn already-derived data into text:
//!
//! - [`build_type_file`] - the identifier union type declaration
//! - [`build_preview_component`] - the browsable preview page
//! - [`build_preview_main`] - the preview bootstrap script
//! - [`build_preview_html`] - the HTML shell referencing the bootstrap
//!
//! None of them touch the filesystem; writing is the orchestrator's job.
//! The [`controls`] module holds the preview page's control model (color
//! round-trip, rotation wrapping) whose constants are spliced into the
//! rendered page.

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod controls;
pub mod preview;
pub mod shell;
pub mod type_file;

pub use preview::build_preview_component;
pub use shell::{build_preview_html, build_preview_main};
pub use type_file::{build_type_file, FILE_HEADER};
