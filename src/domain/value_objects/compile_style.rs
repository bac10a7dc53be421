//! Compile Style Value Object
//!
//! Formatting of the compiled stylesheet.

use serde::{Deserialize, Serialize};

/// Output formatting for compiled CSS
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CompileStyle {
    /// One declaration per line, indented (default)
    #[default]
    Expanded,
    /// Whitespace stripped
    Compressed,
}

impl CompileStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompileStyle::Expanded => "expanded",
            CompileStyle::Compressed => "compressed",
        }
    }

    /// Parse a style name, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "expanded" => Some(CompileStyle::Expanded),
            "compressed" => Some(CompileStyle::Compressed),
            _ => None,
        }
    }
}
