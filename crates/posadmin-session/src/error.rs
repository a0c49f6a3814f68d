use thiserror::Error;

use crate::repository::RepositoryError;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no record is selected")]
    SelectionRequired,
    #[error("record index {index} is out of range")]
    InvalidSelection { index: usize },
    #[error("{field} cannot change while editing")]
    KeyFieldLocked { field: String },
    #[error("the form is read-only in Search mode")]
    ReadOnly,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type Result<T> = std::result::Result<T, SessionError>;
