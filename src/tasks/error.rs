use crate::storage::error::StorageError;

/// Reasons a submitted task is rejected. These are checked before anything reaches storage.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a task name.")]
    EmptyTaskName,

    #[error("End time must be after start time.")]
    EndNotAfterStart,

    #[error("Can't read {field} time {value:?}. Expected HH:MM or HH:MM:SS")]
    MalformedTime { field: &'static str, value: String },

    #[error("Can't read action day {value:?}. Expected YYYY-MM-DD")]
    MalformedDay { value: String },
}

#[derive(Debug, thiserror::Error)]
pub enum TaskLogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
