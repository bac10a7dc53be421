//! Work units scheduled onto the rebuild pipeline.

use serde::Serialize;

/// One scheduled pass through the rebuild pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PendingWork {
    /// Source set membership changed: rewrite the manifest, then compile.
    RegenerateManifestAndCompile,
    /// Only content changed: bump the manifest mtime, then compile.
    TouchAndCompile,
}

impl PendingWork {
    pub fn label(&self) -> &'static str {
        match self {
            PendingWork::RegenerateManifestAndCompile => "regenerate",
            PendingWork::TouchAndCompile => "touch",
        }
    }
}

/// Lifecycle of a single work unit.
///
/// `Queued -> Rendering|Touching -> Compiling -> Writing -> Done`, or any
/// active stage `-> Failed`. Stages only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkStage {
    Queued,
    Rendering,
    Touching,
    Compiling,
    Writing,
    Done,
    Failed,
}

impl WorkStage {
    /// Whether a unit in `self` may move to `next`.
    pub fn can_advance_to(&self, next: WorkStage) -> bool {
        use WorkStage::*;
        match (*self, next) {
            (Queued, Rendering) | (Queued, Touching) => true,
            (Rendering, Compiling) | (Touching, Compiling) => true,
            // No compiled output configured: the manifest step is the last one.
            (Rendering, Done) | (Touching, Done) => true,
            (Compiling, Writing) | (Writing, Done) => true,
            (Rendering | Touching | Compiling | Writing, Failed) => true,
            _ => false,
        }
    }
}
