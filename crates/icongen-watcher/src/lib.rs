//! Debounced icon-root watcher with async event streaming.
//!
//! This crate detects filesystem changes under the configured icon root via
//! the `notify` crate, coalesces rapid changes with `notify-debouncer-mini`,
//! and streams the resulting batches to an async tokio context. One debounced
//! batch corresponds to at most one downstream regeneration cycle.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                   Blocking Thread (spawn_blocking)             │
//! │  ┌───────────────────┐   ┌────────────────┐   ┌────────────┐  │
//! │  │ RecommendedWatcher│ ->│ Debouncer      │ ->│ Callback   │  │
//! │  │ (notify)          │   │ (idle window)  │   │ (SvgFilter)│  │
//! │  └───────────────────┘   └────────────────┘   └─────┬──────┘  │
//! └──────────────────────────────────────────────────────│────────┘
//!                                          blocking_send │
//!                                                        ▼
//! ┌────────────────────────────────────────────────────────────────┐
//! │                   Async Runtime (tokio)                        │
//! │  ┌──────────────────┐   ┌────────────────┐                     │
//! │  │ IconWatcher      │   │ mpsc::Receiver │ -> generation loop  │
//! │  │ (shutdown ctrl)  │   │ (batches)      │                     │
//! │  └──────────────────┘   └────────────────┘                     │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use camino::Utf8Path;
//! use icongen_watcher::{IconWatcher, SvgFilter};
//!
//! # async fn example() -> Result<(), icongen_watcher::WatchError> {
//! let mut watcher = IconWatcher::new(
//!     Utf8Path::new("/project/src/assets/svg"),
//!     100,
//!     SvgFilter::default(),
//! ).await?;
//!
//! while let Some(batch) = watcher.recv().await {
//!     println!("{} icon files changed", batch.len());
//!     // run one regeneration cycle
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Dropping the watcher (or calling [`IconWatcher::shutdown`]) signals the
//! blocking task to stop and tears down the debouncer, so the subscription
//! and any pending debounce window are released regardless of how shutdown
//! is triggered.

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod error;
pub mod events;
pub mod filter;
pub mod watcher;

pub use error::WatchError;
pub use events::{FileEvent, FileEventBatch};
pub use filter::{AcceptAllFilter, FileFilter, SvgFilter};
pub use watcher::IconWatcher;
