//! SVG icon type-manifest and preview generator.
//!
//! icongen scans a directory tree for SVG icon files, derives a stable
//! identifier for each, and emits four artifacts: a TypeScript union type of
//! valid identifiers, a browsable preview page component, the preview's
//! bootstrap script, and an HTML shell. Artifacts are rewritten only when
//! their content actually changes, so a regeneration cycle never feeds
//! spurious modification events back into the watcher that triggered it.
//!
//! This is a library for host build tooling, not a standalone executable.
//! The host calls [`generate`] (or [`GeneratorSession::generate_once`])
//! before a production build and runs [`GeneratorSession::watch`] for the
//! dev-server lifetime.
//!
//! # Usage
//!
//! ```no_run
//! use camino::Utf8Path;
//! use icongen::GeneratorSession;
//! use icongen_core::GeneratorOptions;
//!
//! # async fn example() -> Result<(), icongen::GenerateError> {
//! let session = GeneratorSession::new(
//!     GeneratorOptions::default(),
//!     Utf8Path::new("/path/to/project"),
//! );
//!
//! // Build hook: one synchronous-feeling cycle, errors fail the build.
//! let count = session.generate_once().await?;
//! println!("{count} icons");
//!
//! // Dev-server hook: regenerate on debounced icon changes until the
//! // future is dropped.
//! session.watch().await?;
//! # Ok(())
//! # }
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod artifacts;
pub mod error;
pub mod session;
pub mod write;

pub use artifacts::{generate, GeneratedFiles};
pub use error::GenerateError;
pub use session::GeneratorSession;
pub use write::write_if_changed;

// Re-exported so hosts only need one dependency.
pub use icongen_core::{GeneratorOptions, IconEntry, ResolvedOptions};
