use crate::types::RecordId;

/// A rejected form submission. Every variant carries a message fit to
/// show the user directly; the operation that produced it was aborted
/// before any state changed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing {field}")]
    MissingField { field: &'static str },

    #[error("The {field} must contain only letters and spaces")]
    InvalidCharacters { field: &'static str },

    #[error("The {field} must be at least {min} characters long")]
    TooShort { field: &'static str, min: usize },

    #[error("This user is already registered")]
    AlreadyRegistered,
}

/// A failed call to the remote document store.
///
/// Every call is single-attempt: there is no retry or backoff layer, so
/// these surface directly to the controller, which decides per operation
/// whether to log, show, or swallow them.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Transport or auth failure reaching the store.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The id no longer exists in the remote collection.
    #[error("Record not found: {id}")]
    NotFound { id: RecordId },
}
