//! Recursive SVG discovery for the icongen asset generator.
//!
//! This crate walks the configured icon root and returns every file whose
//! name ends in `.svg` (case-insensitive), at any depth. A missing root is a
//! normal state - a project may not have created its icon directory yet - and
//! yields an empty result instead of an error.
//!
//! Traversal order is whatever the filesystem enumerates; consumers impose
//! their own ordering.
//!
//! # Examples
//!
//! ```no_run
//! use camino::Utf8Path;
//! use icongen_scanner::SvgWalker;
//!
//! # fn main() -> Result<(), icongen_scanner::ScanError> {
//! let walker = SvgWalker::new(Utf8Path::new("/project/src/assets/svg"));
//! let entries = walker.collect_entries()?;
//! for entry in &entries {
//!     println!("{} -> {}", entry.path, entry.name);
//! }
//! # Ok(())
//! # }
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod error;
pub mod walker;

pub use error::ScanError;
pub use walker::SvgWalker;
