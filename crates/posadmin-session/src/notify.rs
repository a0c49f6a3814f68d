//! The selection/notification surface.
//!
//! Replaces the original modal-driven flow: instead of "open a dialog and
//! wait", the controller pushes events at a sink the embedder owns.

use std::collections::BTreeMap;

use crate::controller::SaveOutcome;
use crate::repository::RepositoryError;
use crate::state::ActionMode;

pub trait NotificationSink {
    /// The user tried to enter a mode that needs a selection without one.
    /// The embedder should open its selection surface.
    fn selection_required(&mut self, action: ActionMode, message: &str);

    /// Validation blocked a save; render these inline.
    fn validation_failed(&mut self, errors: &BTreeMap<&'static str, String>);

    /// A save or delete was persisted.
    fn commit_succeeded(&mut self, outcome: &SaveOutcome);

    /// The repository rejected a write; the working form is preserved and
    /// the operation can be retried as-is.
    fn commit_failed(&mut self, error: &RepositoryError);
}

/// Discards every notification. Useful for headless callers that only
/// inspect returned outcomes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn selection_required(&mut self, _action: ActionMode, _message: &str) {}

    fn validation_failed(&mut self, _errors: &BTreeMap<&'static str, String>) {}

    fn commit_succeeded(&mut self, _outcome: &SaveOutcome) {}

    fn commit_failed(&mut self, _error: &RepositoryError) {}
}
