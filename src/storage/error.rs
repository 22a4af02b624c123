use std::path::PathBuf;

/// Failures of the underlying database. These are never retried.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to open task database at {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("failed to create task_log table")]
    Schema(#[source] rusqlite::Error),

    #[error("failed to write task entry")]
    Write(#[source] rusqlite::Error),

    #[error("failed to read task entries")]
    Read(#[source] rusqlite::Error),
}
