//! Style compiler backed by the `grass` SCSS engine.

use std::path::{Path, PathBuf};

use crate::domain::ports::StyleCompiler;
use crate::domain::value_objects::CompileStyle;
use crate::error::{SassWatchError, SassWatchResult};

/// Compiles from disk on every call; grass keeps no state between runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct GrassCompiler {
    style: CompileStyle,
}

impl GrassCompiler {
    pub fn new(style: CompileStyle) -> Self {
        Self { style }
    }

    fn output_style(&self) -> ::grass::OutputStyle {
        match self.style {
            CompileStyle::Expanded => ::grass::OutputStyle::Expanded,
            CompileStyle::Compressed => ::grass::OutputStyle::Compressed,
        }
    }
}

impl StyleCompiler for GrassCompiler {
    fn compile(&self, entry: &Path, include_paths: &[PathBuf]) -> SassWatchResult<String> {
        let options = ::grass::Options::default()
            .style(self.output_style())
            .load_paths(include_paths);

        tracing::debug!(entry = %entry.display(), style = self.style.as_str(), "compiling");
        ::grass::from_path(entry, &options).map_err(|err| SassWatchError::Compile {
            message: err.to_string(),
        })
    }
}
