//! Work Queue Port
//!
//! Where the scheduler puts work units. The production queue is the rebuild
//! pipeline; tests record submissions in a vector.

use std::sync::Mutex;

use crate::domain::value_objects::PendingWork;

pub trait WorkQueue {
    /// Enqueue `work` behind everything already submitted.
    fn submit(&self, work: PendingWork);
}

/// Queue that only records what was submitted.
#[derive(Debug, Default)]
pub struct RecordingQueue {
    submitted: Mutex<Vec<PendingWork>>,
}

impl RecordingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submitted(&self) -> Vec<PendingWork> {
        self.submitted
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

impl WorkQueue for RecordingQueue {
    fn submit(&self, work: PendingWork) {
        self.submitted
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(work);
    }
}
