//!  Storage is organized through [task_storage::SqliteTaskStorage].
//!  The basic idea is:
//!   - There is a single SQLite file with a single `task_log` table.
//!   - Every submitted task becomes one row. Rows are never updated or deleted.
//!   - Days and times are stored as canonical text, see [crate::utils::time].

pub mod entities;
pub mod error;
pub mod task_storage;
