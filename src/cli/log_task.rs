use std::fmt::Display;

use ansi_term::Colour;
use anyhow::Result;
use chrono::Local;
use chrono_english::parse_date_string;
use clap::{CommandFactory, Parser, ValueEnum};

use crate::{
    storage::task_storage::TaskStorage,
    tasks::{
        error::TaskLogError,
        input::{DayInput, TimeInput},
        TaskLogger, TaskSubmission,
    },
    utils::time::parse_day,
};

use super::Args;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DateStyle {
    Uk,
    Us,
}

impl From<DateStyle> for chrono_english::Dialect {
    fn from(value: DateStyle) -> Self {
        match value {
            DateStyle::Uk => Self::Uk,
            DateStyle::Us => Self::Us,
        }
    }
}

impl Display for DateStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateStyle::Uk => write!(f, "uk"),
            DateStyle::Us => write!(f, "us"),
        }
    }
}

#[derive(Debug, Parser)]
pub struct LogCommand {
    #[arg(long = "task", short, help = "Name of the task")]
    task_name: String,
    #[arg(long = "start", short, help = "Start time. Examples are \"09:00\", \"09:00:30\"")]
    start_time: String,
    #[arg(long = "end", short, help = "End time. Examples are \"09:45\", \"17:30:00\"")]
    end_time: String,
    #[arg(long, short, default_value = "", help = "Language worked in")]
    language: String,
    #[arg(long, short, default_value = "", help = "Platform or tool used")]
    platform: String,
    #[arg(
        long = "day",
        short = 'd',
        help = "Day the task is attributed to. Defaults to today. Examples are \"2025-03-15\", \"yesterday\", \"15/03/2025\""
    )]
    action_day: Option<String>,
    #[arg(long, default_value_t = DateStyle::Uk, help = "Style of dates used during parsing. For Uk it's day/month/year. For Us it's month/day/year")]
    date_style: DateStyle,
}

/// Command to process `log` command. Equivalent of submitting the form once.
pub fn process_log_command<S: TaskStorage>(
    logger: &TaskLogger<S>,
    LogCommand {
        task_name,
        start_time,
        end_time,
        language,
        platform,
        action_day,
        date_style,
    }: LogCommand,
) -> Result<()> {
    let action_day = action_day
        .map(|v| parse_action_day(v, date_style))
        .transpose()?;

    let submission = TaskSubmission {
        action_day,
        task_name,
        start_time: TimeInput::Text(start_time),
        end_time: TimeInput::Text(end_time),
        language,
        platform,
    };

    match logger.log_task(submission) {
        Ok(()) => {
            println!("{}", Colour::Green.paint("Task logged successfully!"));
            Ok(())
        }
        Err(TaskLogError::Validation(e)) => Err(Args::command()
            .error(clap::error::ErrorKind::ValueValidation, e.to_string())
            .into()),
        Err(TaskLogError::Storage(e)) => Err(e.into()),
    }
}

/// ISO days are handed over as they are, anything else goes through `chrono_english`.
fn parse_action_day(value: String, date_style: DateStyle) -> Result<DayInput> {
    if parse_day(&value).is_ok() {
        return Ok(DayInput::Text(value));
    }
    match parse_date_string(&value, Local::now(), date_style.into()) {
        Ok(v) => Ok(DayInput::Structured(v.date_naive())),
        Err(e) => Err(Args::command()
            .error(
                clap::error::ErrorKind::ValueValidation,
                format!("Failed to validate action day {e}"),
            )
            .into()),
    }
}
