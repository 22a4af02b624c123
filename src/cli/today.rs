use ansi_term::{Colour, Style};
use anyhow::Result;
use clap::Parser;

use crate::{storage::task_storage::TaskStorage, tasks::TaskLogger};

use super::output::table_lines;

#[derive(Debug, Parser)]
pub struct TodayCommand {
    #[arg(long, help = "Print entries as JSON instead of a table")]
    json: bool,
}

/// Command to process `today` command. Prints every task attributed to the current day.
pub fn process_today_command<S: TaskStorage>(
    logger: &TaskLogger<S>,
    TodayCommand { json }: TodayCommand,
) -> Result<()> {
    let rows = logger.today_logs()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("{}", Colour::Blue.paint("No tasks logged today yet."));
        return Ok(());
    }

    println!("{}", Style::new().bold().paint("Today's Log"));
    let mut lines = table_lines(&rows).into_iter();
    if let Some(header) = lines.next() {
        println!("{}", Style::new().bold().paint(header));
    }
    for line in lines {
        println!("{line}");
    }
    Ok(())
}
