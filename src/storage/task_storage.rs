use std::{ops::Deref, path::Path};

use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use tracing::debug;

use crate::utils::time::format_day;

use super::{
    entities::{NewTaskLogEntity, TaskLogEntity},
    error::StorageError,
};

const SCHEMA_TASK_LOG: &str = "CREATE TABLE IF NOT EXISTS task_log (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    Action_Day TEXT,
    Task_Name TEXT,
    Start_Time TEXT,
    End_Time TEXT,
    Language TEXT,
    Platform TEXT
)";
const INSERT_TASK: &str = "INSERT INTO task_log (Action_Day, Task_Name, Start_Time, End_Time, Language, Platform)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_BY_DAY: &str = "SELECT id, Action_Day, Task_Name, Start_Time, End_Time, Language, Platform
    FROM task_log
    WHERE Action_Day = ?1
    ORDER BY id";

/// Interface for abstracting storage of task entries. The table is append-only, so there is no way
/// to change or remove an entry once it's inserted.
pub trait TaskStorage {
    /// Creates the table if it doesn't exist yet. Existing data is left untouched, so it's safe to
    /// call on every start.
    fn ensure_schema(&self) -> Result<(), StorageError>;

    /// Appends a row and returns its freshly assigned id. Identical entries are stored twice.
    fn insert(&self, entry: &NewTaskLogEntity) -> Result<i64, StorageError>;

    /// Retrieves every row attributed to `day` in insertion order.
    fn query_by_day(&self, day: NaiveDate) -> Result<Vec<TaskLogEntity>, StorageError>;
}

impl<T: Deref> TaskStorage for T
where
    T::Target: TaskStorage,
{
    fn ensure_schema(&self) -> Result<(), StorageError> {
        self.deref().ensure_schema()
    }

    fn insert(&self, entry: &NewTaskLogEntity) -> Result<i64, StorageError> {
        self.deref().insert(entry)
    }

    fn query_by_day(&self, day: NaiveDate) -> Result<Vec<TaskLogEntity>, StorageError> {
        self.deref().query_by_day(day)
    }
}

/// The main realization of [TaskStorage]. Owns a single connection for the lifetime of the
/// process, the connection is closed on drop.
pub struct SqliteTaskStorage {
    conn: Connection,
}

impl SqliteTaskStorage {
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        debug!("Opening task database {path:?}");
        let conn = Connection::open(path).map_err(|source| StorageError::Open {
            path: path.to_owned(),
            source,
        })?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory().map_err(|source| StorageError::Open {
            path: ":memory:".into(),
            source,
        })?;
        Ok(Self { conn })
    }
}

impl TaskStorage for SqliteTaskStorage {
    fn ensure_schema(&self) -> Result<(), StorageError> {
        self.conn
            .execute_batch(SCHEMA_TASK_LOG)
            .map_err(StorageError::Schema)
    }

    fn insert(&self, entry: &NewTaskLogEntity) -> Result<i64, StorageError> {
        let mut stmt = self
            .conn
            .prepare_cached(INSERT_TASK)
            .map_err(StorageError::Write)?;
        stmt.execute(params![
            entry.action_day,
            entry.task_name,
            entry.start_time,
            entry.end_time,
            entry.language,
            entry.platform,
        ])
        .map_err(StorageError::Write)?;

        let id = self.conn.last_insert_rowid();
        debug!("Inserted task_log row {id}");
        Ok(id)
    }

    fn query_by_day(&self, day: NaiveDate) -> Result<Vec<TaskLogEntity>, StorageError> {
        let day = format_day(day);
        let mut stmt = self
            .conn
            .prepare_cached(SELECT_BY_DAY)
            .map_err(StorageError::Read)?;
        let rows = stmt
            .query_map(params![day], row_to_entity)
            .map_err(StorageError::Read)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(StorageError::Read)?;

        debug!("Found {} task_log rows for {day}", rows.len());
        Ok(rows)
    }
}

/// Columns are nullable for rows written by other tools. Missing text is read as empty, which
/// later shows up as an unavailable duration instead of failing the whole query.
fn row_to_entity(row: &Row) -> rusqlite::Result<TaskLogEntity> {
    let text = |column: &str| -> rusqlite::Result<String> {
        Ok(row.get::<_, Option<String>>(column)?.unwrap_or_default())
    };

    Ok(TaskLogEntity {
        id: row.get("id")?,
        action_day: text("Action_Day")?,
        task_name: text("Task_Name")?,
        start_time: text("Start_Time")?,
        end_time: text("End_Time")?,
        language: text("Language")?,
        platform: text("Platform")?,
    })
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use chrono::NaiveDate;
    use rusqlite::params;
    use tempfile::tempdir;

    use crate::storage::entities::{NewTaskLogEntity, TaskLogEntity};

    use super::{SqliteTaskStorage, TaskStorage};

    const TEST_DAY: NaiveDate = NaiveDate::from_ymd_opt(2018, 7, 4).unwrap();

    fn entry(task_name: &str, start_time: &str, end_time: &str) -> NewTaskLogEntity {
        NewTaskLogEntity {
            action_day: "2018-07-04".into(),
            task_name: task_name.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            language: "Rust".into(),
            platform: "Neovim".into(),
        }
    }

    fn column_names(storage: &SqliteTaskStorage) -> Result<Vec<String>> {
        let mut stmt = storage.conn.prepare("PRAGMA table_info(task_log)")?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>("name"))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(names)
    }

    #[test]
    fn test_ensure_schema_is_idempotent() -> Result<()> {
        let storage = SqliteTaskStorage::open_in_memory()?;
        for _ in 0..3 {
            storage.ensure_schema()?;
        }

        let tables: i64 = storage.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'task_log'",
            [],
            |row| row.get(0),
        )?;
        assert_eq!(tables, 1);
        assert_eq!(
            column_names(&storage)?,
            vec![
                "id",
                "Action_Day",
                "Task_Name",
                "Start_Time",
                "End_Time",
                "Language",
                "Platform"
            ]
        );
        Ok(())
    }

    #[test]
    fn test_ensure_schema_keeps_existing_rows() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("task_log.db");

        {
            let storage = SqliteTaskStorage::open(&path)?;
            storage.ensure_schema()?;
            storage.insert(&entry("write docs", "09:00:00", "09:30:00"))?;
        }

        let storage = SqliteTaskStorage::open(&path)?;
        storage.ensure_schema()?;
        assert_eq!(storage.query_by_day(TEST_DAY)?.len(), 1);
        Ok(())
    }

    #[test]
    fn test_insert_then_query() -> Result<()> {
        let storage = SqliteTaskStorage::open_in_memory()?;
        storage.ensure_schema()?;

        let first = entry("write docs", "09:00:00", "09:30:00");
        let second = entry("review", "10:00:00", "11:15:00");
        let first_id = storage.insert(&first)?;
        let second_id = storage.insert(&second)?;

        let rows = storage.query_by_day(TEST_DAY)?;
        assert_eq!(
            rows,
            vec![
                TaskLogEntity::from_new(first_id, first),
                TaskLogEntity::from_new(second_id, second)
            ]
        );
        Ok(())
    }

    #[test]
    fn test_query_other_day_is_empty() -> Result<()> {
        let storage = SqliteTaskStorage::open_in_memory()?;
        storage.ensure_schema()?;
        storage.insert(&entry("write docs", "09:00:00", "09:30:00"))?;

        let rows = storage.query_by_day(TEST_DAY.succ_opt().unwrap())?;
        assert!(rows.is_empty());
        Ok(())
    }

    #[test]
    fn test_duplicates_get_distinct_ids() -> Result<()> {
        let storage = SqliteTaskStorage::open_in_memory()?;
        storage.ensure_schema()?;

        let value = entry("write docs", "09:00:00", "09:30:00");
        let a = storage.insert(&value)?;
        let b = storage.insert(&value)?;
        assert_ne!(a, b);
        assert!(b > a);

        let rows = storage.query_by_day(TEST_DAY)?;
        assert_eq!(rows.len(), 2);
        assert_ne!(rows[0].id, rows[1].id);
        Ok(())
    }

    #[test]
    fn test_null_columns_read_as_empty() -> Result<()> {
        let storage = SqliteTaskStorage::open_in_memory()?;
        storage.ensure_schema()?;
        storage.conn.execute(
            "INSERT INTO task_log (Action_Day, Task_Name) VALUES (?1, ?2)",
            params!["2018-07-04", "imported"],
        )?;

        let rows = storage.query_by_day(TEST_DAY)?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].task_name, "imported");
        assert_eq!(rows[0].start_time, "");
        assert_eq!(rows[0].platform, "");
        Ok(())
    }

    #[test]
    fn test_insert_without_schema_fails() -> Result<()> {
        let storage = SqliteTaskStorage::open_in_memory()?;
        let result = storage.insert(&entry("write docs", "09:00:00", "09:30:00"));
        assert!(matches!(result, Err(super::StorageError::Write(_))));
        Ok(())
    }
}
