pub mod log_task;
pub mod output;
pub mod today;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log_task::{process_log_command, LogCommand};
use today::{process_today_command, TodayCommand};
use tracing::{debug, level_filters::LevelFilter};

use crate::{
    config::AppConfig,
    storage::task_storage::SqliteTaskStorage,
    tasks::TaskLogger,
    utils::{
        clock::DefaultClock,
        logging::{enable_logging, CLI_PREFIX},
    },
};

#[derive(Parser, Debug)]
#[command(name = "Crush It", version, long_about = None)]
#[command(about = "Daily task logger", long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
    #[arg(long, global = true, help = "Enable logging")]
    log: bool,
    #[arg(
        long,
        global = true,
        help = "Application directory. By default tries to save into $XDG_STATE_HOME or $HOME/.local/state"
    )]
    dir: Option<PathBuf>,
    #[arg(
        long = "db",
        global = true,
        help = "Database file. By default task_log.db inside the application directory"
    )]
    database: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Log a task you worked on")]
    Log {
        #[command(flatten)]
        command: LogCommand,
    },
    #[command(about = "Display tasks logged for today")]
    Today {
        #[command(flatten)]
        command: TodayCommand,
    },
}

pub fn run_cli() -> Result<()> {
    let args = Args::parse();

    let config = AppConfig::resolve(args.dir, args.database)?;

    let logging_level = if args.log {
        Some(LevelFilter::TRACE)
    } else {
        None
    };
    enable_logging(CLI_PREFIX, &config.log_dir, logging_level, args.log)?;
    debug!("Using {config:?}");

    // The connection lives as long as the logger, which is the whole run.
    let storage = SqliteTaskStorage::open(&config.database_path)?;
    let logger = TaskLogger::new(storage, Box::new(DefaultClock))?;

    match args.commands {
        Commands::Log { command } => process_log_command(&logger, command),
        Commands::Today { command } => process_today_command(&logger, command),
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Args, Commands};

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_log_command() {
        let args = Args::try_parse_from([
            "crushit",
            "--dir",
            "/tmp/crushit",
            "log",
            "--task",
            "write docs",
            "--start",
            "09:00",
            "--end",
            "09:30",
            "--language",
            "English",
        ])
        .unwrap();

        assert!(matches!(args.commands, Commands::Log { .. }));
        assert_eq!(args.dir.as_deref(), Some(std::path::Path::new("/tmp/crushit")));
        assert!(!args.log);
    }

    #[test]
    fn log_requires_times() {
        assert!(Args::try_parse_from(["crushit", "log", "--task", "write docs"]).is_err());
    }

    #[test]
    fn parses_today_command() {
        let args = Args::try_parse_from(["crushit", "today", "--json", "--log"]).unwrap();
        assert!(matches!(args.commands, Commands::Today { .. }));
        assert!(args.log);
    }
}
