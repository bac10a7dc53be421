//! Recognized source-file suffixes.

use std::path::Path;

/// Default extension tracked when nothing is configured.
pub const DEFAULT_EXTENSION: &str = "scss";

/// Set of file extensions that make a path a tracked source file.
///
/// Matching is case-insensitive: `Theme.SCSS` is tracked just like `theme.scss`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixPattern {
    extensions: Vec<String>,
}

impl SuffixPattern {
    /// Build a pattern from extensions, with or without a leading dot.
    ///
    /// An empty list falls back to [`DEFAULT_EXTENSION`].
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut extensions: Vec<String> = extensions
            .into_iter()
            .map(|e| e.as_ref().trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        extensions.dedup();
        if extensions.is_empty() {
            extensions.push(DEFAULT_EXTENSION.to_string());
        }
        Self { extensions }
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn matches(&self, path: &Path) -> bool {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => self.extensions.iter().any(|known| known.eq_ignore_ascii_case(ext)),
            None => false,
        }
    }
}

impl Default for SuffixPattern {
    fn default() -> Self {
        Self::new([DEFAULT_EXTENSION])
    }
}
