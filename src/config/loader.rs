//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{SassWatchError, SassWatchResult};

use super::types::{ColorMode, CompileStyle, Config};

pub use crate::domain::value_objects::ConfigWarning;

/// Project config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "sasswatch.toml";
/// Subdirectory of the platform config dir holding `config.toml`
pub const USER_CONFIG_DIR: &str = "sasswatch";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> SassWatchResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SassWatchError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the layered configuration. Environment overrides are applied last.
pub fn load_layered(
    explicit: Option<&Path>,
    project_root: &Path,
) -> SassWatchResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path).map_err(|err| match err {
            SassWatchError::Io(io) => SassWatchError::InvalidConfig {
                file: path.to_path_buf(),
                message: io.to_string(),
            },
            other => other,
        })?;
        return Ok((with_env_overrides(config, env_var), warnings));
    }

    let candidates = [
        Some(project_root.join(PROJECT_CONFIG_FILE)),
        user_config_path(),
    ];
    for candidate in candidates.into_iter().flatten() {
        if !candidate.is_file() {
            continue;
        }
        match load_with_warnings(&candidate) {
            Ok((config, warnings)) => {
                tracing::debug!(path = %candidate.display(), "loaded config");
                return Ok((with_env_overrides(config, env_var), warnings));
            }
            Err(err) => tracing::warn!(error = %err, "ignoring unreadable config"),
        }
    }

    Ok((with_env_overrides(Config::default(), env_var), Vec::new()))
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Apply environment variable overrides (SASSWATCH_* prefix).
///
/// Unrecognized values are ignored with a warning.
pub fn with_env_overrides(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // SASSWATCH_STYLE
    if let Some(style) = get_env("SASSWATCH_STYLE") {
        match CompileStyle::parse(&style) {
            Some(style) => config.compile.style = style,
            None => tracing::warn!(value = %style, "ignoring unknown SASSWATCH_STYLE"),
        }
    }

    // SASSWATCH_EXTENSIONS (comma-separated)
    if let Some(extensions) = get_env("SASSWATCH_EXTENSIONS") {
        let parsed: Vec<String> = extensions
            .split(',')
            .map(|s| s.trim().trim_start_matches('.').to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if !parsed.is_empty() {
            config.watch.extensions = parsed;
        }
    }

    // SASSWATCH_COLOR
    if let Some(color) = get_env("SASSWATCH_COLOR") {
        match ColorMode::parse(&color) {
            Some(mode) => config.output.color = mode,
            None => tracing::warn!(value = %color, "ignoring unknown SASSWATCH_COLOR"),
        }
    }

    config
}

/// `<config dir>/sasswatch/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(USER_CONFIG_DIR).join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "watch",
        "extensions",
        "compile",
        "style",
        "load_paths",
        "output",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

pub(super) fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
