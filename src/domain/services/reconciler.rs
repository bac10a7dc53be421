//! Reconciler
//!
//! Applies a classified change to the SourceSet.

use serde::Serialize;

use crate::domain::entities::SourceSet;
use crate::domain::services::ChangeEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReconciliationResult {
    pub membership_changed: bool,
}

impl ReconciliationResult {
    pub const CHANGED: Self = Self {
        membership_changed: true,
    };
    pub const UNCHANGED: Self = Self {
        membership_changed: false,
    };
}

/// Brings the set in line with what is on disk for one path.
///
/// | on disk | in set | action  | changed |
/// |---------|--------|---------|---------|
/// | yes     | no     | insert  | yes     |
/// | no      | yes    | remove  | yes     |
/// | yes     | yes    | nothing | no      |
/// | no      | no     | nothing | no      |
///
/// The notification kind is not consulted: a rename shows up as a
/// missing old path and an existing new path, and duplicate notifications
/// collapse to no-ops.
pub struct Reconciler;

impl Reconciler {
    pub fn apply(set: &mut SourceSet, event: &ChangeEvent) -> ReconciliationResult {
        let changed = if event.exists_on_disk {
            set.insert(event.name.clone())
        } else {
            set.remove(&event.name)
        };
        if changed {
            ReconciliationResult::CHANGED
        } else {
            ReconciliationResult::UNCHANGED
        }
    }
}
