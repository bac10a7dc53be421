//! Startup checks run before anything is written or watched.

use std::path::Path;

use crate::domain::ports::{FileSystem, OverwriteConfirmer};
use crate::error::{SassWatchError, SassWatchResult};

/// Result of a successful preflight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreflightOutcome {
    /// Go ahead. `replaces_manifest` is set when an existing file will be
    /// overwritten.
    Proceed { replaces_manifest: bool },
    /// The user kept the existing manifest; exit without watching.
    Declined,
}

/// Validate the watched directory and manifest target, asking before an
/// existing manifest is replaced.
pub fn preflight(
    watch_dir: Option<&Path>,
    manifest: Option<&Path>,
    fs: &dyn FileSystem,
    confirmer: &dyn OverwriteConfirmer,
) -> SassWatchResult<PreflightOutcome> {
    let watch_dir = watch_dir.ok_or(SassWatchError::MissingWatchDir)?;
    if !fs.is_dir(watch_dir) {
        return Err(if fs.is_file(watch_dir) {
            SassWatchError::NotADirectory {
                path: watch_dir.to_path_buf(),
            }
        } else {
            SassWatchError::DirectoryNotFound {
                path: watch_dir.to_path_buf(),
            }
        });
    }

    let manifest = manifest.ok_or(SassWatchError::MissingOutput)?;
    if !fs.is_file(manifest) {
        return Ok(PreflightOutcome::Proceed {
            replaces_manifest: false,
        });
    }

    if confirmer.confirm_overwrite(manifest) {
        Ok(PreflightOutcome::Proceed {
            replaces_manifest: true,
        })
    } else {
        tracing::info!(path = %manifest.display(), "keeping existing manifest");
        Ok(PreflightOutcome::Declined)
    }
}
