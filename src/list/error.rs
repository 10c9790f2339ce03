use thiserror::Error;

use crate::domain::ValidationError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("List has not been loaded yet")]
    NotLoaded,

    #[error("List was already loaded")]
    AlreadyLoaded,

    #[error("No edit in progress")]
    NotEditing,

    #[error("Finish or cancel the current edit first")]
    EditInProgress,

    #[error("Item not found: {0}")]
    NotFound(String),
}
