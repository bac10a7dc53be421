//! Overwrite Confirmer Port
//!
//! Asked once at startup when the manifest path already exists.
//! Implementations can be interactive (prompting the user) or fixed.

use std::path::Path;

pub trait OverwriteConfirmer {
    /// Return `true` to replace the existing file at `path`.
    fn confirm_overwrite(&self, path: &Path) -> bool;
}

/// Always overwrites. Used for `--yes`.
pub struct AssumeYes;

impl OverwriteConfirmer for AssumeYes {
    fn confirm_overwrite(&self, _path: &Path) -> bool {
        true
    }
}

/// Never overwrites. Used when no prompt can be shown.
pub struct AssumeNo;

impl OverwriteConfirmer for AssumeNo {
    fn confirm_overwrite(&self, _path: &Path) -> bool {
        false
    }
}
