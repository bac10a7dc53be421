//! Domain Entities
//!
//! - `SourceSet` - tracked source files, shared with the rebuild pipeline
//! - `Manifest` - the generated `@import` file

mod manifest;
mod source_set;

pub use manifest::{Manifest, MANIFEST_BANNER};
pub use source_set::{SharedSourceSet, SourceSet};
