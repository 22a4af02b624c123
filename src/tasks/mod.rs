//! Logging and querying of tasks on top of [TaskStorage]. This is the layer the command line
//! talks to, it never touches SQL directly.

pub mod duration;
pub mod error;
pub mod input;
pub mod validation;

use duration::{compute_duration, TaskDuration};
use error::{TaskLogError, ValidationError};
use input::{DayInput, TimeInput};
use serde::Serialize;
use tracing::{debug, info};
use validation::validate_submission;

use crate::{
    storage::{
        entities::{NewTaskLogEntity, TaskLogEntity},
        error::StorageError,
        task_storage::TaskStorage,
    },
    utils::{
        clock::Clock,
        time::{format_day, format_time},
    },
};

/// Values of a submitted form, as entered.
#[derive(Debug, Clone)]
pub struct TaskSubmission {
    /// Day the task is attributed to. Defaults to today.
    pub action_day: Option<DayInput>,
    pub task_name: String,
    pub start_time: TimeInput,
    pub end_time: TimeInput,
    pub language: String,
    pub platform: String,
}

/// An entry of today's log together with its duration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TodayLogRow {
    pub task_name: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(rename = "duration_minutes")]
    pub duration: TaskDuration,
    pub language: String,
    pub platform: String,
}

impl From<TaskLogEntity> for TodayLogRow {
    fn from(
        TaskLogEntity {
            task_name,
            start_time,
            end_time,
            language,
            platform,
            ..
        }: TaskLogEntity,
    ) -> Self {
        let duration = compute_duration(&start_time, &end_time);
        TodayLogRow {
            task_name,
            start_time,
            end_time,
            duration,
            language,
            platform,
        }
    }
}

/// Bridges the command line and [TaskStorage]. Owns the storage, and with it the database
/// connection, for as long as the application runs.
pub struct TaskLogger<S: TaskStorage> {
    storage: S,
    clock: Box<dyn Clock>,
}

impl<S: TaskStorage> TaskLogger<S> {
    /// Makes sure the table exists before anything else happens.
    pub fn new(storage: S, clock: Box<dyn Clock>) -> Result<Self, StorageError> {
        storage.ensure_schema()?;
        Ok(Self { storage, clock })
    }

    /// Validates and stores a single task. Nothing is written if validation fails.
    pub fn log_task(&self, submission: TaskSubmission) -> Result<(), TaskLogError> {
        let entity = self.prepare(submission)?;
        let id = self.storage.insert(&entity)?;
        info!(
            "Logged task {id} {:?} on {} from {} to {}",
            entity.task_name, entity.action_day, entity.start_time, entity.end_time
        );
        Ok(())
    }

    /// Returns every task attributed to the current day with its duration.
    pub fn today_logs(&self) -> Result<Vec<TodayLogRow>, StorageError> {
        let today = self.clock.today();
        debug!("Fetching logs for {today}");
        let rows = self.storage.query_by_day(today)?;
        Ok(rows.into_iter().map(TodayLogRow::from).collect())
    }

    fn prepare(
        &self,
        TaskSubmission {
            action_day,
            task_name,
            start_time,
            end_time,
            language,
            platform,
        }: TaskSubmission,
    ) -> Result<NewTaskLogEntity, ValidationError> {
        let start = start_time.resolve("start")?;
        let end = end_time.resolve("end")?;
        validate_submission(&task_name, start, end)?;

        let action_day = match action_day {
            Some(day) => day.resolve()?,
            None => self.clock.today(),
        };

        Ok(NewTaskLogEntity {
            action_day: format_day(action_day),
            task_name: task_name.trim().to_owned(),
            start_time: format_time(start),
            end_time: format_time(end),
            language: language.trim().to_owned(),
            platform: platform.trim().to_owned(),
        })
    }
}
