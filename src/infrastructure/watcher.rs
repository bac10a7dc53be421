//! OS file watching via `notify`.
//!
//! Every path of every backend event becomes one `RawNotification` on a
//! channel; filtering is left to the classifier.

use std::path::Path;
use std::sync::mpsc::{channel, Receiver, Sender};

use notify::event::ModifyKind;
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::domain::services::{NotificationKind, RawNotification};
use crate::error::SassWatchResult;

/// Live recursive subscription. Dropping it stops delivery.
pub struct NotifySubscription {
    _watcher: RecommendedWatcher,
}

impl NotifySubscription {
    /// Subscribe to `root` recursively, forwarding notifications to `sender`.
    pub fn start(root: &Path, sender: Sender<RawNotification>) -> SassWatchResult<Self> {
        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| match res {
                Ok(event) => {
                    let kind = notification_kind(&event.kind);
                    for path in event.paths {
                        let _ = sender.send(RawNotification::new(path, kind));
                    }
                }
                Err(err) => tracing::warn!(error = %err, "file watcher backend error"),
            },
            Config::default(),
        )?;
        watcher.watch(root, RecursiveMode::Recursive)?;
        tracing::debug!(root = %root.display(), "subscribed");

        Ok(Self { _watcher: watcher })
    }

    /// Subscribe and hand back the receiving end.
    pub fn channel(root: &Path) -> SassWatchResult<(Self, Receiver<RawNotification>)> {
        let (tx, rx) = channel();
        let subscription = Self::start(root, tx)?;
        Ok((subscription, rx))
    }
}

/// Collapse notify's event taxonomy onto the kinds the classifier knows.
pub fn notification_kind(kind: &EventKind) -> NotificationKind {
    match kind {
        EventKind::Create(_) => NotificationKind::Create,
        EventKind::Modify(ModifyKind::Name(_)) => NotificationKind::Rename,
        EventKind::Modify(_) => NotificationKind::Modify,
        EventKind::Remove(_) => NotificationKind::Remove,
        EventKind::Access(_) => NotificationKind::Access,
        EventKind::Any | EventKind::Other => NotificationKind::Other,
    }
}
