//! Rebuild Pipeline
//!
//! Serialized execution of work units. A single worker thread owns the
//! manifest and compiled-output paths and pulls units from a channel in
//! submission order, so a unit's compile-and-write always finishes before the
//! next unit starts and an older manifest can never overwrite a newer result.
//!
//! ```text
//! submit ─▶ [ mpsc FIFO ] ─▶ worker: render|touch ─▶ compile ─▶ write ─▶ report
//! ```

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread::{self, JoinHandle};

use serde::Serialize;

use crate::domain::entities::{Manifest, SharedSourceSet};
use crate::domain::ports::{FileSystem, StyleCompiler, WorkQueue};
use crate::domain::value_objects::{PendingWork, WorkStage};
use crate::error::{SassWatchError, SassWatchResult};

/// Where a rebuild reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    /// Watched directory, as given by the user. Printed in the manifest header
    /// and always the first include path.
    pub watch_dir: PathBuf,
    /// Generated manifest file
    pub manifest: PathBuf,
    /// Compiled output; `None` skips compilation entirely
    pub compiled: Option<PathBuf>,
    /// Extra include paths searched after the watched directory
    pub extra_load_paths: Vec<PathBuf>,
}

impl ArtifactPaths {
    pub fn new(watch_dir: impl Into<PathBuf>, manifest: impl Into<PathBuf>) -> Self {
        Self {
            watch_dir: watch_dir.into(),
            manifest: manifest.into(),
            compiled: None,
            extra_load_paths: Vec::new(),
        }
    }

    pub fn with_compiled(mut self, compiled: Option<PathBuf>) -> Self {
        self.compiled = compiled;
        self
    }

    pub fn with_extra_load_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.extra_load_paths = paths;
        self
    }

    pub fn load_paths(&self) -> Vec<PathBuf> {
        std::iter::once(self.watch_dir.clone())
            .chain(self.extra_load_paths.iter().cloned())
            .collect()
    }
}

/// Outcome of one work unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitReport {
    pub work: PendingWork,
    /// `Done` or `Failed`
    pub stage: WorkStage,
    /// Stage that was active when the unit failed
    pub failed_at: Option<WorkStage>,
    /// Number of imports in the source set snapshot the unit worked from
    pub imports: usize,
    /// Size of the compiled output written, if any
    pub compiled_bytes: Option<usize>,
    pub error: Option<String>,
}

impl UnitReport {
    pub fn is_success(&self) -> bool {
        self.stage == WorkStage::Done
    }
}

/// Tracks a unit through its stages, refusing to move backwards.
struct UnitProgress {
    work: PendingWork,
    stage: WorkStage,
    imports: usize,
    compiled_bytes: Option<usize>,
}

impl UnitProgress {
    fn new(work: PendingWork) -> Self {
        Self {
            work,
            stage: WorkStage::Queued,
            imports: 0,
            compiled_bytes: None,
        }
    }

    fn advance(&mut self, next: WorkStage) {
        debug_assert!(
            self.stage.can_advance_to(next),
            "illegal stage transition {:?} -> {:?}",
            self.stage,
            next
        );
        tracing::trace!(work = self.work.label(), from = ?self.stage, to = ?next, "stage");
        self.stage = next;
    }

    fn finish(mut self) -> UnitReport {
        self.advance(WorkStage::Done);
        UnitReport {
            work: self.work,
            stage: WorkStage::Done,
            failed_at: None,
            imports: self.imports,
            compiled_bytes: self.compiled_bytes,
            error: None,
        }
    }

    fn fail(self, err: SassWatchError) -> UnitReport {
        let failed_at = self.stage;
        UnitReport {
            work: self.work,
            stage: WorkStage::Failed,
            failed_at: Some(failed_at),
            imports: self.imports,
            compiled_bytes: None,
            error: Some(err.to_string()),
        }
    }
}

/// Runs one unit to completion. Used by the worker thread and directly by
/// tests that want to step the pipeline synchronously.
pub struct RebuildExecutor<F, C> {
    paths: ArtifactPaths,
    fs: F,
    compiler: C,
    sources: SharedSourceSet,
}

impl<F: FileSystem, C: StyleCompiler> RebuildExecutor<F, C> {
    pub fn new(paths: ArtifactPaths, fs: F, compiler: C, sources: SharedSourceSet) -> Self {
        Self {
            paths,
            fs,
            compiler,
            sources,
        }
    }

    pub fn run(&self, work: PendingWork) -> UnitReport {
        let mut unit = UnitProgress::new(work);
        match self.execute(&mut unit) {
            Ok(()) => unit.finish(),
            Err(err) => {
                tracing::warn!(
                    work = work.label(),
                    stage = ?unit.stage,
                    error = %err,
                    "work unit failed"
                );
                unit.fail(err)
            }
        }
    }

    fn execute(&self, unit: &mut UnitProgress) -> SassWatchResult<()> {
        let manifest_path = &self.paths.manifest;

        match unit.work {
            PendingWork::RegenerateManifestAndCompile => {
                unit.advance(WorkStage::Rendering);
                self.write_manifest(unit)?;
            }
            PendingWork::TouchAndCompile => {
                unit.advance(WorkStage::Touching);
                if self.fs.is_file(manifest_path) {
                    unit.imports = self.sources.snapshot().len();
                    self.fs
                        .touch(manifest_path)
                        .map_err(|source| write_error(manifest_path, source))?;
                } else {
                    // Nothing to touch: the manifest was removed behind our back.
                    tracing::debug!(
                        path = %manifest_path.display(),
                        "manifest missing, regenerating instead of touching"
                    );
                    self.write_manifest(unit)?;
                }
            }
        }

        let Some(compiled_path) = &self.paths.compiled else {
            return Ok(());
        };

        unit.advance(WorkStage::Compiling);
        let css = self
            .compiler
            .compile(manifest_path, &self.paths.load_paths())?;

        unit.advance(WorkStage::Writing);
        self.fs
            .write(compiled_path, css.as_bytes())
            .map_err(|source| write_error(compiled_path, source))?;
        unit.compiled_bytes = Some(css.len());

        Ok(())
    }

    /// Snapshot the set now, not at submission time: a unit that runs late
    /// renders the newest membership.
    fn write_manifest(&self, unit: &mut UnitProgress) -> SassWatchResult<()> {
        let snapshot = self.sources.snapshot();
        let text = Manifest::generate(self.paths.watch_dir.display().to_string(), &snapshot)
            .render();
        unit.imports = snapshot.len();
        self.fs
            .write(&self.paths.manifest, text.as_bytes())
            .map_err(|source| write_error(&self.paths.manifest, source))
    }
}

fn write_error(path: &Path, source: crate::domain::ports::FsError) -> SassWatchError {
    SassWatchError::Write {
        path: path.to_path_buf(),
        source,
    }
}

/// Progress notifications from the worker thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    Started(PendingWork),
    Finished(UnitReport),
}

enum Job {
    Work(PendingWork),
    Flush(mpsc::Sender<()>),
}

/// FIFO of work units with exactly one unit in flight.
///
/// Dropping (or calling [`RebuildPipeline::shutdown`]) closes the queue and
/// waits for every unit already submitted to finish.
pub struct RebuildPipeline {
    sender: Option<mpsc::Sender<Job>>,
    worker: Option<JoinHandle<()>>,
}

impl RebuildPipeline {
    pub fn spawn<F, C, E>(executor: RebuildExecutor<F, C>, on_event: E) -> SassWatchResult<Self>
    where
        F: FileSystem + 'static,
        C: StyleCompiler + 'static,
        E: Fn(PipelineEvent) + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel::<Job>();

        let worker = thread::Builder::new()
            .name("sasswatch-rebuild".to_string())
            .spawn(move || {
                for job in receiver {
                    match job {
                        Job::Work(work) => {
                            on_event(PipelineEvent::Started(work));
                            let report = executor.run(work);
                            on_event(PipelineEvent::Finished(report));
                        }
                        Job::Flush(done) => {
                            let _ = done.send(());
                        }
                    }
                }
                tracing::debug!("rebuild queue drained");
            })?;

        Ok(Self {
            sender: Some(sender),
            worker: Some(worker),
        })
    }

    /// Block until every unit submitted so far has finished.
    pub fn flush(&self) {
        let Some(sender) = &self.sender else {
            return;
        };
        let (done_tx, done_rx) = mpsc::channel();
        if sender.send(Job::Flush(done_tx)).is_ok() {
            let _ = done_rx.recv();
        }
    }

    /// Stop accepting work and drain what is queued.
    pub fn shutdown(mut self) {
        self.close();
    }

    fn close(&mut self) {
        drop(self.sender.take());
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                tracing::error!("rebuild worker panicked");
            }
        }
    }
}

impl WorkQueue for RebuildPipeline {
    fn submit(&self, work: PendingWork) {
        let delivered = self
            .sender
            .as_ref()
            .is_some_and(|sender| sender.send(Job::Work(work)).is_ok());
        if !delivered {
            tracing::warn!(work = work.label(), "rebuild pipeline closed, dropping work unit");
        }
    }
}

impl Drop for RebuildPipeline {
    fn drop(&mut self) {
        self.close();
    }
}
