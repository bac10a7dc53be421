//! Source file name value object.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

/// A source file relative to the watched directory.
///
/// Always stored with `/` separators so the rendered `@import` lines are the
/// same on every platform. Comparison is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SourceFileName(String);

impl SourceFileName {
    /// Create a name from a relative path string, normalizing separators.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        if name.contains('\\') {
            Self(name.replace('\\', "/"))
        } else {
            Self(name)
        }
    }

    /// Build a name from a path already relative to the watched directory.
    ///
    /// Returns `None` for empty paths and paths that escape the directory.
    pub fn from_relative_path(path: &Path) -> Option<Self> {
        let mut parts = Vec::new();
        for component in path.components() {
            match component {
                Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
                Component::CurDir => {}
                _ => return None,
            }
        }
        if parts.is_empty() {
            return None;
        }
        Some(Self(parts.join("/")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Absolute location of this file under `root`.
    pub fn to_path(&self, root: &Path) -> PathBuf {
        self.0.split('/').fold(root.to_path_buf(), |acc, part| acc.join(part))
    }
}

impl fmt::Display for SourceFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SourceFileName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SourceFileName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
