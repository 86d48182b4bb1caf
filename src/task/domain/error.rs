//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is missing or blank.
    #[error("title is required")]
    MissingTitle,

    /// The priority value is not one of the supported levels.
    #[error("unsupported priority '{0}', expected one of: low, medium, high")]
    InvalidPriority(String),

    /// An update request carried no fields.
    #[error("no data provided for update")]
    EmptyUpdate,
}

/// Error returned while parsing priorities from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParsePriorityError(pub String);

impl From<ParsePriorityError> for TaskDomainError {
    fn from(err: ParsePriorityError) -> Self {
        Self::InvalidPriority(err.0)
    }
}
