//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod overwrite_confirmer;
pub mod style_compiler;
pub mod work_queue;

pub use file_system::{FileSystem, FsError, FsResult};
pub use overwrite_confirmer::{AssumeNo, AssumeYes, OverwriteConfirmer};
pub use style_compiler::StyleCompiler;
pub use work_queue::{RecordingQueue, WorkQueue};
