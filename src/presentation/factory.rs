//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{EventSink, WatchOptions, WatchSession};
use crate::domain::entities::SourceSet;
use crate::domain::value_objects::CompileStyle;
use crate::error::SassWatchResult;
use crate::infrastructure::{scan_sources, GrassCompiler, LocalFs};

/// Type alias for the concrete WatchSession with all dependencies
pub type ConcreteWatchSession = WatchSession<LocalFs>;

/// Scan the watched directory as described by `options`.
pub fn initial_sources(options: &WatchOptions) -> SourceSet {
    let manifest_name = options
        .manifest
        .file_name()
        .and_then(|name| name.to_str());
    scan_sources(
        &options.watch_dir,
        &options.suffix,
        manifest_name,
        options.compiled.as_deref(),
    )
}

/// Create a watch session on the local disk, compiling with grass.
pub fn create_watch_session(
    options: WatchOptions,
    style: CompileStyle,
    on_event: EventSink,
) -> SassWatchResult<ConcreteWatchSession> {
    let initial = initial_sources(&options);
    WatchSession::new(
        options,
        LocalFs::new(),
        GrassCompiler::new(style),
        initial,
        on_event,
    )
}
