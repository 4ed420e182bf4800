//! Error types for the icongen-scanner crate.

/// Errors that can occur while scanning the icon root.
///
/// A missing icon root is not an error; the walker reports it as an empty
/// result. Everything else - permission failures, I/O errors mid-traversal -
/// is fatal for the generation cycle that triggered the scan.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// Directory traversal failed.
    #[error("failed to walk icon directory: {0}")]
    Walk(#[from] ignore::Error),
}
