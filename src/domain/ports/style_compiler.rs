//! Style Compiler Port
//!
//! Boundary to the style-compilation engine. The engine is handed a path and
//! re-reads every source from disk on each call; nothing is cached between
//! calls, which is what lets content-only edits show up after a touch.

use std::path::{Path, PathBuf};

use crate::error::SassWatchResult;

pub trait StyleCompiler: Send + Sync {
    /// Compile the stylesheet at `entry`, resolving imports against
    /// `include_paths` in order.
    fn compile(&self, entry: &Path, include_paths: &[PathBuf]) -> SassWatchResult<String>;
}

impl<T: StyleCompiler + ?Sized> StyleCompiler for std::sync::Arc<T> {
    fn compile(&self, entry: &Path, include_paths: &[PathBuf]) -> SassWatchResult<String> {
        (**self).compile(entry, include_paths)
    }
}
