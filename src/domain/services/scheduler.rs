//! Scheduler
//!
//! Turns a reconciliation verdict into a work unit and hands it to the queue.

use crate::domain::ports::WorkQueue;
use crate::domain::services::ReconciliationResult;
use crate::domain::value_objects::PendingWork;

pub struct Scheduler;

impl Scheduler {
    /// Membership change needs a new manifest; anything else only needs the
    /// compiled output refreshed.
    pub fn plan(result: ReconciliationResult) -> PendingWork {
        if result.membership_changed {
            PendingWork::RegenerateManifestAndCompile
        } else {
            PendingWork::TouchAndCompile
        }
    }

    /// Plan and submit. Every call submits exactly one unit.
    pub fn schedule(result: ReconciliationResult, queue: &dyn WorkQueue) -> PendingWork {
        let work = Self::plan(result);
        queue.submit(work);
        work
    }
}
