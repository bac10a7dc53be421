//! Initial directory scan.

use std::path::Path;

use ignore::WalkBuilder;

use crate::domain::entities::SourceSet;
use crate::domain::value_objects::{SourceFileName, SuffixPattern};

/// Collect every matching file under `root`, recursively.
///
/// Nothing is skipped for being hidden or git-ignored. Left out are every file
/// whose basename equals `manifest_name`, wherever it sits, and the compiled
/// output itself. Unreadable entries are logged and skipped.
pub fn scan_sources(
    root: &Path,
    suffix: &SuffixPattern,
    manifest_name: Option<&str>,
    compiled: Option<&Path>,
) -> SourceSet {
    let compiled = compiled.and_then(|path| path.canonicalize().ok());
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .build();

    let mut sources = SourceSet::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }

        let path = entry.path();
        if !suffix.matches(path) {
            continue;
        }
        if manifest_name.is_some_and(|name| path.file_name().is_some_and(|f| f == name)) {
            continue;
        }
        if let Some(compiled) = &compiled {
            if path.file_name() == compiled.file_name()
                && path.canonicalize().is_ok_and(|p| p == *compiled)
            {
                continue;
            }
        }

        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };
        if let Some(name) = SourceFileName::from_relative_path(relative) {
            sources.insert(name);
        }
    }

    tracing::debug!(root = %root.display(), count = sources.len(), "initial scan");
    sources
}
