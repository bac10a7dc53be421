//! Session harness shared by the scenarios.

use std::path::Path;
use std::sync::{Arc, Mutex};

use sasswatch::application::EventSink;
use sasswatch::domain::services::{NotificationKind, RawNotification};
use sasswatch::presentation::{create_watch_session, ConcreteWatchSession};
use sasswatch::{CompileStyle, PendingWork, WatchEvent, WatchOptions};

use crate::common::TestEnv;

pub struct Harness {
    pub env: TestEnv,
    pub session: ConcreteWatchSession,
    events: Arc<Mutex<Vec<WatchEvent>>>,
}

impl Harness {
    /// Start a session over whatever `env` already contains and wait for the
    /// initial build.
    pub fn start(env: TestEnv) -> Self {
        let options = WatchOptions::new(env.styles(), env.manifest())
            .with_compiled(Some(env.css()));
        let events = Arc::new(Mutex::new(Vec::new()));
        let recorded = events.clone();
        let sink: EventSink = Arc::new(move |event| recorded.lock().unwrap().push(event));

        let session = create_watch_session(options, CompileStyle::Compressed, sink).unwrap();
        session.start();
        session.wait_idle();

        Self {
            env,
            session,
            events,
        }
    }

    pub fn notify(&self, path: &Path, kind: NotificationKind) -> Option<PendingWork> {
        let work = self
            .session
            .handle_notification(&RawNotification::new(path, kind));
        self.session.wait_idle();
        work
    }

    pub fn create(&self, relative: &str, content: &str) -> Option<PendingWork> {
        let path = self.env.write_source(relative, content);
        self.notify(&path, NotificationKind::Create)
    }

    pub fn edit(&self, relative: &str, content: &str) -> Option<PendingWork> {
        let path = self.env.write_source(relative, content);
        self.notify(&path, NotificationKind::Modify)
    }

    pub fn delete(&self, relative: &str) -> Option<PendingWork> {
        let path = self.env.remove_source(relative);
        self.notify(&path, NotificationKind::Remove)
    }

    pub fn events(&self) -> Vec<WatchEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn last_event(&self) -> Option<WatchEvent> {
        self.events.lock().unwrap().last().cloned()
    }
}
