//! Watch event types and options

use std::path::PathBuf;
use std::time::Duration;

use crate::application::pipeline::{ArtifactPaths, PipelineEvent};
use crate::domain::value_objects::{PendingWork, SuffixPattern, WorkStage};

/// How long the intake loop blocks on the notification channel before
/// re-checking the running flag.
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Watch options
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Directory whose source files are tracked
    pub watch_dir: PathBuf,
    /// Generated manifest path
    pub manifest: PathBuf,
    /// Compiled output path; without one the session only maintains the manifest
    pub compiled: Option<PathBuf>,
    /// Include paths searched after the watched directory
    pub load_paths: Vec<PathBuf>,
    /// Which file names count as sources
    pub suffix: SuffixPattern,
    /// Output as NDJSON
    pub json: bool,
}

impl WatchOptions {
    /// Create new watch options with minimal required fields
    pub fn new(watch_dir: impl Into<PathBuf>, manifest: impl Into<PathBuf>) -> Self {
        Self {
            watch_dir: watch_dir.into(),
            manifest: manifest.into(),
            compiled: None,
            load_paths: Vec::new(),
            suffix: SuffixPattern::default(),
            json: false,
        }
    }

    /// Set the compiled output path
    pub fn with_compiled(mut self, compiled: Option<PathBuf>) -> Self {
        self.compiled = compiled;
        self
    }

    /// Set extra include paths
    pub fn with_load_paths(mut self, load_paths: Vec<PathBuf>) -> Self {
        self.load_paths = load_paths;
        self
    }

    /// Set the source suffix filter
    pub fn with_suffix(mut self, suffix: SuffixPattern) -> Self {
        self.suffix = suffix;
        self
    }

    /// Set JSON output mode
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn artifact_paths(&self) -> ArtifactPaths {
        ArtifactPaths::new(&self.watch_dir, &self.manifest)
            .with_compiled(self.compiled.clone())
            .with_extra_load_paths(self.load_paths.clone())
    }
}

/// Watch event types for NDJSON output
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    /// Watch started
    WatchStarted {
        source: String,
        manifest: String,
        compiled: Option<String>,
        tracked: Vec<String>,
    },
    /// A tracked source changed and a unit was scheduled
    FileChanged {
        path: String,
        exists: bool,
        work: PendingWork,
    },
    /// The pipeline picked up a unit
    RebuildStarted { work: PendingWork },
    /// A unit finished
    RebuildComplete {
        work: PendingWork,
        imports: usize,
        compiled_bytes: Option<usize>,
    },
    /// A unit stopped early; earlier artifacts are untouched
    RebuildFailed {
        work: PendingWork,
        stage: WorkStage,
        message: String,
    },
    /// Error outside any work unit
    Error { message: String },
    /// Watch stopped
    Shutdown,
}

impl WatchEvent {
    /// Convert to JSON string with "command": "watch" field included
    pub fn to_json(&self) -> String {
        let mut value =
            serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("command".to_string(), serde_json::json!("watch"));
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            WatchEvent::RebuildFailed { .. } | WatchEvent::Error { .. }
        )
    }
}

impl From<PipelineEvent> for WatchEvent {
    fn from(event: PipelineEvent) -> Self {
        match event {
            PipelineEvent::Started(work) => WatchEvent::RebuildStarted { work },
            PipelineEvent::Finished(report) => match report.error {
                None => WatchEvent::RebuildComplete {
                    work: report.work,
                    imports: report.imports,
                    compiled_bytes: report.compiled_bytes,
                },
                Some(message) => WatchEvent::RebuildFailed {
                    work: report.work,
                    stage: report.failed_at.unwrap_or(WorkStage::Failed),
                    message,
                },
            },
        }
    }
}
