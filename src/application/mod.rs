//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `WatchSession` - Intake of filesystem notifications, startup and shutdown
//! - `RebuildPipeline` - Serialized manifest and compile work units

pub mod pipeline;
pub mod watch;

pub use pipeline::{ArtifactPaths, PipelineEvent, RebuildExecutor, RebuildPipeline, UnitReport};
pub use watch::{
    preflight, EventSink, PreflightOutcome, WatchEvent, WatchOptions, WatchSession, POLL_INTERVAL,
};
