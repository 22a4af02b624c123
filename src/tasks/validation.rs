use chrono::NaiveTime;

use super::error::ValidationError;

/// Checks a submission the same way the form does: the task needs a name and the end has to be
/// strictly after the start.
pub fn validate_submission(
    task_name: &str,
    start: NaiveTime,
    end: NaiveTime,
) -> Result<(), ValidationError> {
    if task_name.trim().is_empty() {
        return Err(ValidationError::EmptyTaskName);
    }
    if start >= end {
        return Err(ValidationError::EndNotAfterStart);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use crate::tasks::error::ValidationError;

    use super::validate_submission;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn rejects_blank_names() {
        for name in ["", "   ", "\t\n"] {
            assert_eq!(
                validate_submission(name, time(9, 0), time(10, 0)),
                Err(ValidationError::EmptyTaskName)
            );
        }
    }

    #[test]
    fn rejects_non_increasing_times() {
        assert_eq!(
            validate_submission("task", time(9, 0), time(9, 0)),
            Err(ValidationError::EndNotAfterStart)
        );
        assert_eq!(
            validate_submission("task", time(10, 0), time(9, 0)),
            Err(ValidationError::EndNotAfterStart)
        );
    }

    #[test]
    fn accepts_valid_submission() {
        assert_eq!(validate_submission(" task ", time(9, 0), time(9, 1)), Ok(()));
        assert_eq!(validate_submission("x", time(0, 0), time(23, 59)), Ok(()));
    }
}
