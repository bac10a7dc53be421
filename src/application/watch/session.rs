//! Watch session: wires intake (classify, reconcile, schedule) to the
//! rebuild pipeline.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::sync::Arc;

use crate::application::pipeline::{RebuildExecutor, RebuildPipeline};
use crate::domain::entities::{SharedSourceSet, SourceSet};
use crate::domain::ports::{FileSystem, StyleCompiler, WorkQueue};
use crate::domain::services::{EventClassifier, RawNotification, Reconciler, Scheduler};
use crate::domain::value_objects::PendingWork;
use crate::error::SassWatchResult;

use super::event::{WatchEvent, WatchOptions, POLL_INTERVAL};

/// Callback receiving every event of a session, from both the intake thread
/// and the rebuild worker.
pub type EventSink = Arc<dyn Fn(WatchEvent) + Send + Sync>;

/// One running watch.
///
/// Intake happens on the caller's thread and only touches the in-memory
/// SourceSet; every file write happens on the pipeline's worker thread.
pub struct WatchSession<F> {
    options: WatchOptions,
    fs: F,
    classifier: EventClassifier,
    sources: SharedSourceSet,
    pipeline: RebuildPipeline,
    on_event: EventSink,
}

impl<F> WatchSession<F>
where
    F: FileSystem + Clone + 'static,
{
    /// Build a session over an already-scanned `initial` set. Nothing is
    /// written until [`WatchSession::start`].
    pub fn new<C>(
        options: WatchOptions,
        fs: F,
        compiler: C,
        initial: SourceSet,
        on_event: EventSink,
    ) -> SassWatchResult<Self>
    where
        C: StyleCompiler + 'static,
    {
        let classifier = EventClassifier::new(
            &options.watch_dir,
            &options.manifest,
            options.suffix.clone(),
            &fs,
        )
        .with_compiled(options.compiled.as_deref(), &fs);
        let sources = SharedSourceSet::new(initial);

        let executor =
            RebuildExecutor::new(options.artifact_paths(), fs.clone(), compiler, sources.clone());
        let sink = on_event.clone();
        let pipeline = RebuildPipeline::spawn(executor, move |event| sink(event.into()))?;

        Ok(Self {
            options,
            fs,
            classifier,
            sources,
            pipeline,
            on_event,
        })
    }

    /// Copy of the currently tracked names.
    pub fn sources(&self) -> SourceSet {
        self.sources.snapshot()
    }

    /// Announce the session and queue the initial manifest generation.
    pub fn start(&self) {
        let snapshot = self.sources.snapshot();
        (self.on_event)(WatchEvent::WatchStarted {
            source: self.options.watch_dir.display().to_string(),
            manifest: self.options.manifest.display().to_string(),
            compiled: self
                .options
                .compiled
                .as_ref()
                .map(|p| p.display().to_string()),
            tracked: snapshot.to_strings(),
        });
        tracing::info!(
            dir = %self.options.watch_dir.display(),
            tracked = snapshot.len(),
            "watch session started"
        );
        self.pipeline.submit(PendingWork::RegenerateManifestAndCompile);
    }

    /// Process one raw notification. Returns the scheduled unit, or `None` if
    /// the notification was irrelevant.
    pub fn handle_notification(&self, notification: &RawNotification) -> Option<PendingWork> {
        let Some(event) = self.classifier.classify(notification, &self.fs) else {
            tracing::trace!(
                path = %notification.path.display(),
                kind = ?notification.kind,
                "ignored"
            );
            return None;
        };

        let result = self.sources.update(|set| Reconciler::apply(set, &event));
        let work = Scheduler::plan(result);
        tracing::debug!(
            name = %event.name,
            exists = event.exists_on_disk,
            work = work.label(),
            "source changed"
        );

        (self.on_event)(WatchEvent::FileChanged {
            path: event.name.to_string(),
            exists: event.exists_on_disk,
            work,
        });
        Scheduler::schedule(result, &self.pipeline);
        Some(work)
    }

    /// Block until every unit scheduled so far has finished.
    pub fn wait_idle(&self) {
        self.pipeline.flush();
    }

    /// Start, then process notifications until `running` clears or the
    /// channel closes. Drains the pipeline before returning.
    pub fn run(self, notifications: &Receiver<RawNotification>, running: &AtomicBool) {
        self.start();

        while running.load(Ordering::SeqCst) {
            match notifications.recv_timeout(POLL_INTERVAL) {
                Ok(notification) => {
                    self.handle_notification(&notification);
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    (self.on_event)(WatchEvent::Error {
                        message: "file watcher stopped unexpectedly".to_string(),
                    });
                    break;
                }
            }
        }

        self.shutdown();
    }

    /// Stop intake, let queued units finish, then emit `Shutdown`.
    pub fn shutdown(self) {
        let Self {
            pipeline, on_event, ..
        } = self;
        pipeline.shutdown();
        tracing::info!("watch session stopped");
        on_event(WatchEvent::Shutdown);
    }
}
