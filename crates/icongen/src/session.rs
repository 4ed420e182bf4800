//! The generator session owned by the host's lifecycle integration.
//!
//! A [`GeneratorSession`] holds the resolved options as explicit state and
//! exposes the two host-facing operations: a one-shot cycle for the build
//! hook and a watch loop for the dev-server hook. Nothing here is ambient;
//! the session is passed wherever its options are needed, and shutting down
//! is dropping the watch future, which tears down the watcher subscription
//! and any pending debounce window.

use camino::Utf8Path;

use icongen_core::{GeneratorOptions, ResolvedOptions};
use icongen_watcher::{IconWatcher, SvgFilter};

use crate::artifacts::generate;
use crate::error::GenerateError;

/// Per-session generator state: the resolved options, set once.
///
/// # Examples
///
/// ```no_run
/// use camino::Utf8Path;
/// use icongen::GeneratorSession;
/// use icongen_core::GeneratorOptions;
///
/// # async fn example() -> Result<(), icongen::GenerateError> {
/// let session = GeneratorSession::new(
///     GeneratorOptions::default(),
///     Utf8Path::new("/project"),
/// );
/// session.generate_once().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GeneratorSession {
    options: ResolvedOptions,
}

impl GeneratorSession {
    /// Creates a session by resolving user options against the project root.
    #[must_use]
    pub fn new(options: GeneratorOptions, project_root: &Utf8Path) -> Self {
        Self {
            options: ResolvedOptions::resolve(&options, project_root),
        }
    }

    /// Creates a session from already-resolved options.
    #[must_use]
    pub const fn from_resolved(options: ResolvedOptions) -> Self {
        Self { options }
    }

    /// Returns the session's resolved options.
    #[must_use]
    pub const fn options(&self) -> &ResolvedOptions {
        &self.options
    }

    /// Runs one generation cycle, propagating any failure to the caller.
    ///
    /// This is the build-hook path: a failure here is allowed to fail the
    /// host's build.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] if scanning or writing fails.
    pub async fn generate_once(&self) -> Result<usize, GenerateError> {
        let count = generate(&self.options).await?;
        log_generated(count);
        Ok(count)
    }

    /// Runs an initial cycle, then regenerates on debounced icon changes.
    ///
    /// This is the dev-server path. Cycle failures inside the loop are
    /// logged and the loop keeps waiting for the next trigger; there is no
    /// retry. Cycles are serialized: the next batch is not received until
    /// the current cycle finishes, so two cycles never overlap.
    ///
    /// The loop runs until the returned future is dropped (or the watcher
    /// stops on its own), which releases the watch subscription and cancels
    /// any pending debounce window.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Watch`] if the watcher cannot be created.
    /// A watch root that does not exist yet is not an error; watching is
    /// skipped until the next session.
    pub async fn watch(&self) -> Result<(), GenerateError> {
        // The initial dev-server cycle is best-effort, like every cycle on
        // this path.
        match generate(&self.options).await {
            Ok(count) => log_generated(count),
            Err(error) => tracing::error!(error = %error, "failed to generate icon artifacts"),
        }

        if !self.options.icons_root.exists() {
            tracing::warn!(
                icons_root = %self.options.icons_root,
                "icon root does not exist, skipping watch"
            );
            return Ok(());
        }

        let mut watcher = IconWatcher::new(
            &self.options.icons_root,
            self.options.debounce_ms,
            SvgFilter::default(),
        )
        .await?;

        while let Some(batch) = watcher.recv().await {
            tracing::debug!(
                changed = batch.unique_paths().len(),
                "icon files changed, regenerating"
            );
            match generate(&self.options).await {
                Ok(count) => log_generated(count),
                Err(error) => tracing::error!(error = %error, "failed to generate icon artifacts"),
            }
        }

        watcher.shutdown().await?;
        Ok(())
    }
}

/// Generation summary with a singular/plural count label.
fn log_generated(count: usize) {
    let label = if count == 1 { "icon" } else { "icons" };
    tracing::info!("generated {count} {label} (types + preview)");
}
