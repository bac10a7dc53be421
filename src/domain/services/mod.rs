//! Domain Services
//!
//! The intake path, in order: classify, reconcile, schedule.

mod event_classifier;
mod reconciler;
mod scheduler;

pub use event_classifier::{ChangeEvent, EventClassifier, NotificationKind, RawNotification};
pub use reconciler::{Reconciler, ReconciliationResult};
pub use scheduler::Scheduler;
