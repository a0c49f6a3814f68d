//! Record lifecycle control for admin forms.
//!
//! A [`FormSession`] drives one form's record set through the
//! Add/Edit/Delete/Search/Copy action modes, runs the validation pipeline on
//! save, and commits through a [`RecordRepository`]. User-facing feedback
//! flows through a [`NotificationSink`], keeping the controller free of any
//! UI coupling.

mod controller;
mod error;
mod memory;
mod notify;
mod repository;
mod state;

pub use controller::{FormSession, ModeChange, SaveOutcome};
pub use error::{Result, SessionError};
pub use memory::MemoryRepository;
pub use notify::{NotificationSink, NullSink};
pub use repository::{RecordRepository, RepositoryError};
pub use state::{ActionMode, SelectionState};
