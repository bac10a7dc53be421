//! sasswatch - keeps an `@import` manifest of a stylesheet directory in sync
//! and recompiles it on every change
//!
//! A watch session tracks the set of source files under a directory, rewrites
//! the manifest when that set changes, touches it when only contents change,
//! and compiles it to CSS through a strictly serialized rebuild pipeline.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

#[cfg(test)]
mod testing;

// Re-exports for convenience
pub use application::{WatchEvent, WatchOptions, WatchSession};
pub use config::Config;
pub use domain::entities::{Manifest, SourceSet};
pub use domain::value_objects::{CompileStyle, PendingWork, SourceFileName, WorkStage};
pub use error::{SassWatchError, SassWatchResult};
