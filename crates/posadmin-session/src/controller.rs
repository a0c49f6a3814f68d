//! The form lifecycle state machine.

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, info, warn};

use posadmin_model::{FormValues, RecordId, RecordSchema, StoredRecord, VersionedEntry};
use posadmin_validate::{ValidationContext, ValidationReport, validate};

use crate::error::SessionError;
use crate::notify::NotificationSink;
use crate::repository::RecordRepository;
use crate::state::{ActionMode, SelectionState};

const SELECT_PROMPT: &str = "please select a record";

/// Result of attempting a mode change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeChange {
    Entered,
    /// The mode needs a selection and none exists; the previous mode is
    /// still in effect and the sink has been asked to open its selection
    /// surface.
    SelectionRequired,
}

/// What a save attempt did.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    Created(RecordId),
    Updated(RecordId),
    Deleted(RecordId),
    /// Validation blocked the save; nothing was persisted and the session
    /// state is unchanged.
    Rejected(ValidationReport),
    /// Delete mode never persists from `save`; the embedder confirms with
    /// the user, then calls [`FormSession::delete_selected`].
    ConfirmDelete,
    /// Search mode never saves.
    ViewOnly,
}

/// Drives one form: its record set, working form, and selection state.
///
/// The record set mirrors what the repository supplied; every mutation goes
/// through the repository first and is applied locally only on success.
pub struct FormSession<R, N> {
    schema: RecordSchema,
    repo: R,
    sink: N,
    records: Vec<StoredRecord>,
    form: FormValues,
    state: SelectionState,
}

impl<R: RecordRepository, N: NotificationSink> FormSession<R, N> {
    /// Load the record set and start in Add mode with an empty form.
    pub fn new(schema: RecordSchema, repo: R, sink: N) -> Result<Self, SessionError> {
        let records = repo.list()?;
        debug!(entity = schema.entity, count = records.len(), "form session loaded");
        Ok(Self {
            schema,
            repo,
            sink,
            records,
            form: FormValues::new(),
            state: SelectionState::new(),
        })
    }

    pub fn schema(&self) -> &RecordSchema {
        &self.schema
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn form(&self) -> &FormValues {
        &self.form
    }

    pub fn records(&self) -> &[StoredRecord] {
        &self.records
    }

    /// The notification sink, for embedders that poll instead of react.
    pub fn sink(&self) -> &N {
        &self.sink
    }

    /// Switch action modes.
    ///
    /// Entering Add resets the form; entering any record-oriented mode
    /// requires a selection and copies the selected record into the working
    /// form. Without a selection nothing changes except a prompt pushed at
    /// the sink.
    pub fn set_action(&mut self, action: ActionMode) -> ModeChange {
        if action.needs_selection() && self.state.selected.is_none() {
            debug!(entity = self.schema.entity, action = %action, "mode change without selection");
            self.sink.selection_required(action, SELECT_PROMPT);
            return ModeChange::SelectionRequired;
        }
        self.state.action = action;
        if action == ActionMode::Add {
            self.state.reset();
            self.form = FormValues::new();
        } else {
            self.load_selection();
        }
        ModeChange::Entered
    }

    /// Select a record by index into the current record set.
    pub fn select(&mut self, index: usize) -> Result<(), SessionError> {
        if index >= self.records.len() {
            return Err(SessionError::InvalidSelection { index });
        }
        self.state.selected = Some(index);
        if self.state.action.needs_selection() {
            self.load_selection();
        }
        Ok(())
    }

    /// Mutate one working-form field.
    ///
    /// The first effective change flips the dirty flag. Search mode is
    /// read-only, and the natural key is locked while editing.
    pub fn set_field(&mut self, field: &str, value: impl Into<String>) -> Result<(), SessionError> {
        match self.state.action {
            ActionMode::Search => return Err(SessionError::ReadOnly),
            ActionMode::Edit if field == self.schema.key_field => {
                return Err(SessionError::KeyFieldLocked {
                    field: field.to_string(),
                });
            }
            _ => {}
        }
        if self.form.set(field, value) {
            self.state.dirty = true;
        }
        Ok(())
    }

    /// Abandon the working form: back to Add mode with a clean slate.
    /// Persisted records are untouched.
    pub fn clear(&mut self) {
        self.form = FormValues::new();
        self.state.reset();
    }

    /// Attempt to commit the working form.
    ///
    /// Runs the full validation pipeline first; a failed validation leaves
    /// every piece of state exactly as it was. Repository failures likewise
    /// preserve the form so the user can retry without re-entering data.
    pub fn save(&mut self, now: DateTime<Utc>) -> Result<SaveOutcome, SessionError> {
        match self.state.action {
            ActionMode::Search => Ok(SaveOutcome::ViewOnly),
            ActionMode::Delete => Ok(SaveOutcome::ConfirmDelete),
            ActionMode::Add | ActionMode::Copy | ActionMode::Edit => self.commit(now),
        }
    }

    /// Remove the selected record after the embedder has confirmed.
    pub fn delete_selected(&mut self) -> Result<SaveOutcome, SessionError> {
        let Some(index) = self.state.selected else {
            self.sink.selection_required(ActionMode::Delete, SELECT_PROMPT);
            return Err(SessionError::SelectionRequired);
        };
        let id = self.records[index].id;
        if let Err(error) = self.repo.delete(id) {
            warn!(entity = self.schema.entity, id = %id, error = %error, "delete failed");
            self.sink.commit_failed(&error);
            return Err(error.into());
        }
        self.records.remove(index);
        info!(entity = self.schema.entity, id = %id, "record deleted");
        let outcome = SaveOutcome::Deleted(id);
        self.sink.commit_succeeded(&outcome);
        self.clear();
        Ok(outcome)
    }

    /// Re-read the record set from the repository. A selection pointing
    /// past the end of the fresh set is dropped.
    pub fn refresh(&mut self) -> Result<(), SessionError> {
        self.records = self.repo.list()?;
        if let Some(index) = self.state.selected
            && index >= self.records.len()
        {
            self.state.invalidate_selection();
        }
        Ok(())
    }

    /// The applicable configuration per code as of `as_of`, for versioned
    /// entities. Records that do not parse as dated revisions are omitted.
    pub fn applicable(&self, as_of: NaiveDate) -> Vec<VersionedEntry> {
        let entries: Vec<VersionedEntry> = self
            .records
            .iter()
            .filter_map(|record| VersionedEntry::from_record(record).ok())
            .collect();
        posadmin_engine::resolve_all(&entries, as_of)
            .into_values()
            .cloned()
            .collect()
    }

    fn commit(&mut self, now: DateTime<Utc>) -> Result<SaveOutcome, SessionError> {
        // Only an in-place edit may ignore its own row in cross-record
        // checks; a Copy candidate is a new record and competes with its
        // source.
        let exclude = match self.state.action {
            ActionMode::Edit => self.state.selected,
            _ => None,
        };
        let ctx = ValidationContext {
            existing: &self.records,
            selected: exclude,
        };
        let report = validate(&self.schema, &self.form, &ctx);
        if !report.is_empty() {
            debug!(
                entity = self.schema.entity,
                findings = report.len(),
                "validation rejected save"
            );
            self.sink.validation_failed(&report.field_errors());
            return Ok(SaveOutcome::Rejected(report));
        }

        let outcome = if self.state.action == ActionMode::Edit {
            let index = self.state.selected.ok_or(SessionError::SelectionRequired)?;
            let id = self.records[index].id;
            match self.repo.update(id, self.form.clone(), now) {
                Ok(record) => {
                    self.records[index] = record;
                    info!(entity = self.schema.entity, id = %id, "record updated");
                    SaveOutcome::Updated(id)
                }
                Err(error) => {
                    warn!(entity = self.schema.entity, id = %id, error = %error, "update failed");
                    self.sink.commit_failed(&error);
                    return Err(error.into());
                }
            }
        } else {
            match self.repo.create(self.form.clone(), now) {
                Ok(record) => {
                    let id = record.id;
                    self.records.push(record);
                    info!(entity = self.schema.entity, id = %id, "record created");
                    SaveOutcome::Created(id)
                }
                Err(error) => {
                    warn!(entity = self.schema.entity, error = %error, "create failed");
                    self.sink.commit_failed(&error);
                    return Err(error.into());
                }
            }
        };

        self.sink.commit_succeeded(&outcome);
        self.clear();
        Ok(outcome)
    }

    fn load_selection(&mut self) {
        let Some(index) = self.state.selected else {
            return;
        };
        self.form = self.records[index].values.clone();
        match self.state.action {
            ActionMode::Copy => {
                // A copy is a brand-new record: drop the key, let the user
                // assign one, and treat the session as already dirty.
                self.form.set(self.schema.key_field, "");
                self.state.dirty = true;
            }
            ActionMode::Edit => {
                // An edit session holds discardable state from the start.
                self.state.dirty = true;
            }
            ActionMode::Add | ActionMode::Delete | ActionMode::Search => {
                self.state.dirty = false;
            }
        }
    }
}
