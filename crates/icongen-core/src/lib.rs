//! Core types for the icongen asset generator.
//!
//! This crate provides the foundational types used across the workspace:
//!
//! - Configuration structures ([`GeneratorOptions`], [`ResolvedOptions`])
//! - The [`IconEntry`] domain type and its path-derivation rules
//! - Default output locations and the debounce interval

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod config;
pub mod entry;

pub use config::{GeneratorOptions, ResolvedOptions};
pub use entry::IconEntry;
