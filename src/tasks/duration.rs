use std::fmt::Display;

use serde::{Serialize, Serializer};
use tracing::warn;

use crate::utils::time::parse_stored_time;

/// Duration of a logged task. Stored times are plain text, so they might not parse, in which case
/// the duration is [TaskDuration::Unavailable] instead of an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TaskDuration {
    Minutes(f64),
    Unavailable,
}

impl TaskDuration {
    pub fn minutes(&self) -> Option<f64> {
        match self {
            TaskDuration::Minutes(v) => Some(*v),
            TaskDuration::Unavailable => None,
        }
    }
}

/// Serialized as a number of minutes, or `null` when unavailable.
impl Serialize for TaskDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.minutes().serialize(serializer)
    }
}

/// Shown in the "Total (min)" column. Minutes are rounded to 2 decimals.
impl Display for TaskDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskDuration::Minutes(v) => write!(f, "{v:.2}"),
            TaskDuration::Unavailable => write!(f, "-"),
        }
    }
}

pub fn compute_duration(start_time: &str, end_time: &str) -> TaskDuration {
    let parsed = parse_stored_time(start_time)
        .and_then(|start| parse_stored_time(end_time).map(|end| (start, end)));
    match parsed {
        Ok((start, end)) => TaskDuration::Minutes((end - start).num_seconds() as f64 / 60.),
        Err(e) => {
            warn!("Can't compute duration between {start_time:?} and {end_time:?}: {e}");
            TaskDuration::Unavailable
        }
    }
}
