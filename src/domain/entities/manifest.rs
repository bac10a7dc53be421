//! The generated import manifest.

use chrono::{DateTime, FixedOffset, Local};

use crate::domain::entities::SourceSet;
use crate::domain::value_objects::SourceFileName;

/// First line of every manifest.
pub const MANIFEST_BANNER: &str = "// This is a generated file. Changes will get stomped.";

const SOURCE_PREFIX: &str = "// source: ";
const TIMESTAMP_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

/// A manifest ready to be rendered.
///
/// Built from a SourceSet snapshot; rendering is deterministic for a given
/// snapshot and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    source: String,
    generated_at: DateTime<FixedOffset>,
    imports: Vec<SourceFileName>,
}

impl Manifest {
    /// Manifest for `sources`, stamped with the current local time.
    pub fn generate(source: impl Into<String>, sources: &SourceSet) -> Self {
        Self::with_timestamp(source, sources, Local::now().fixed_offset())
    }

    pub fn with_timestamp(
        source: impl Into<String>,
        sources: &SourceSet,
        generated_at: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            source: source.into(),
            generated_at,
            imports: sources.iter().cloned().collect(),
        }
    }

    pub fn imports(&self) -> &[SourceFileName] {
        &self.imports
    }

    /// Render the manifest text, including the trailing newline.
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.imports.len() + 4);
        lines.push(MANIFEST_BANNER.to_string());
        lines.push(format!("{}{}", SOURCE_PREFIX, self.source));
        lines.push(format!("// {}", self.generated_at.format(TIMESTAMP_FORMAT)));
        lines.extend(self.imports.iter().map(|name| format!("@import \"{}\";", name)));
        lines.push(String::new());
        lines.join("\n")
    }

    /// Recover the import list from manifest text.
    ///
    /// Comment lines and anything that is not a plain `@import "...";` are
    /// skipped.
    pub fn parse_imports(text: &str) -> Vec<SourceFileName> {
        text.lines()
            .filter_map(|line| {
                line.trim()
                    .strip_prefix("@import \"")
                    .and_then(|rest| rest.strip_suffix("\";"))
                    .map(SourceFileName::new)
            })
            .collect()
    }
}
