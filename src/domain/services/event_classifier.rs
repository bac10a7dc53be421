//! Event Classifier
//!
//! Decides which raw filesystem notifications concern a tracked source file.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{SourceFileName, SuffixPattern};

/// Kind of a raw notification, as reported by the OS watcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Create,
    Modify,
    Remove,
    Rename,
    /// File was opened or read. Never relevant: the compiler reading sources
    /// would otherwise retrigger itself.
    Access,
    Other,
}

/// One path from one OS notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawNotification {
    pub path: PathBuf,
    pub kind: NotificationKind,
}

impl RawNotification {
    pub fn new(path: impl Into<PathBuf>, kind: NotificationKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

/// A notification about a tracked source file, with its on-disk state at
/// classification time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub name: SourceFileName,
    pub kind: NotificationKind,
    pub exists_on_disk: bool,
}

/// Filters notifications down to relevant `ChangeEvent`s.
///
/// The watched root and both artifact paths are normalized once at
/// construction; every notification path is normalized the same way before
/// comparison, so neither the manifest nor the compiled output living inside
/// the watched tree ever feeds back into the pipeline.
#[derive(Debug, Clone)]
pub struct EventClassifier {
    root: PathBuf,
    manifest: PathBuf,
    compiled: Option<PathBuf>,
    suffix: SuffixPattern,
}

impl EventClassifier {
    pub fn new(root: &Path, manifest: &Path, suffix: SuffixPattern, fs: &dyn FileSystem) -> Self {
        Self {
            root: fs.normalize(root),
            manifest: fs.normalize(manifest),
            compiled: None,
            suffix,
        }
    }

    /// Also ignore the compiled output, which matches the suffix once `css`
    /// is among the watched extensions.
    pub fn with_compiled(mut self, compiled: Option<&Path>, fs: &dyn FileSystem) -> Self {
        self.compiled = compiled.map(|path| fs.normalize(path));
        self
    }

    /// Classify a notification. `None` means no further action.
    pub fn classify(
        &self,
        notification: &RawNotification,
        fs: &dyn FileSystem,
    ) -> Option<ChangeEvent> {
        if notification.kind == NotificationKind::Access {
            return None;
        }
        if !self.suffix.matches(&notification.path) {
            return None;
        }

        let path = fs.normalize(&notification.path);
        if path == self.manifest || self.compiled.as_ref() == Some(&path) {
            return None;
        }

        let relative = path.strip_prefix(&self.root).ok()?;
        let name = SourceFileName::from_relative_path(relative)?;

        Some(ChangeEvent {
            name,
            kind: notification.kind,
            exists_on_disk: fs.is_file(&path),
        })
    }
}
