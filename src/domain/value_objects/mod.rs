//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod compile_style;
mod config_warning;
mod source_file_name;
mod suffix;
mod work;

pub use compile_style::CompileStyle;
pub use config_warning::ConfigWarning;
pub use source_file_name::SourceFileName;
pub use suffix::{SuffixPattern, DEFAULT_EXTENSION};
pub use work::{PendingWork, WorkStage};
