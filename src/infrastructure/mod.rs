//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system with atomic writes
//! - `compiler/` - SCSS compilation via grass
//! - `conflict/` - Terminal overwrite prompt
//! - `watcher` - OS notifications via notify
//! - `scan` - Initial directory walk

pub mod compiler;
pub mod conflict;
pub mod fs;
pub mod scan;
pub mod watcher;

// Re-export for convenience
pub use compiler::GrassCompiler;
pub use conflict::InteractiveConfirmer;
pub use fs::LocalFs;
pub use scan::scan_sources;
pub use watcher::{notification_kind, NotifySubscription};
