/// A row that is about to be appended. All values are expected to be in their canonical form
/// already, storage doesn't interpret them.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct NewTaskLogEntity {
    pub action_day: String,
    pub task_name: String,
    pub start_time: String,
    pub end_time: String,
    pub language: String,
    pub platform: String,
}

/// A row read back from the `task_log` table.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct TaskLogEntity {
    pub id: i64,
    pub action_day: String,
    pub task_name: String,
    pub start_time: String,
    pub end_time: String,
    pub language: String,
    pub platform: String,
}

impl TaskLogEntity {
    pub fn from_new(id: i64, entity: NewTaskLogEntity) -> Self {
        let NewTaskLogEntity {
            action_day,
            task_name,
            start_time,
            end_time,
            language,
            platform,
        } = entity;
        Self {
            id,
            action_day,
            task_name,
            start_time,
            end_time,
            language,
            platform,
        }
    }
}
