//! Configuration module for sasswatch
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SASSWATCH_*)
//! 3. Project config (`sasswatch.toml`, or `--config`)
//! 4. User config (`<config dir>/sasswatch/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

// Re-export ConfigWarning from domain layer
pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{PROJECT_CONFIG_FILE, USER_CONFIG_DIR};
pub use types::{ColorMode, CompileConfig, CompileStyle, Config, OutputConfig, WatchConfig};
