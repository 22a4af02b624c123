use std::path::PathBuf;

use anyhow::Result;

use crate::utils::dir::{create_application_default_path, ensure_dir};

/// Name of the database file inside the application directory.
pub const DATABASE_FILE_NAME: &str = "task_log.db";

const LOG_DIR_NAME: &str = "logs";

/// Locations used by a single run of the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub app_dir: PathBuf,
    pub database_path: PathBuf,
    pub log_dir: PathBuf,
}

impl AppConfig {
    /// `dir` falls back to the platform state directory, `database` falls back to
    /// [DATABASE_FILE_NAME] inside the application directory.
    pub fn resolve(dir: Option<PathBuf>, database: Option<PathBuf>) -> Result<Self> {
        let app_dir = match dir {
            Some(dir) => ensure_dir(dir)?,
            None => create_application_default_path()?,
        };
        let database_path = database.unwrap_or_else(|| app_dir.join(DATABASE_FILE_NAME));
        if let Some(parent) = database_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            ensure_dir(parent.to_path_buf())?;
        }
        let log_dir = app_dir.join(LOG_DIR_NAME);

        Ok(Self {
            app_dir,
            database_path,
            log_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use tempfile::tempdir;

    use super::{AppConfig, DATABASE_FILE_NAME};

    #[test]
    fn defaults_inside_app_dir() -> Result<()> {
        let dir = tempdir()?;
        let app_dir = dir.path().join("crushit");

        let config = AppConfig::resolve(Some(app_dir.clone()), None)?;

        assert!(app_dir.is_dir());
        assert_eq!(config.database_path, app_dir.join(DATABASE_FILE_NAME));
        assert_eq!(config.log_dir, app_dir.join("logs"));
        Ok(())
    }

    #[test]
    fn database_override() -> Result<()> {
        let dir = tempdir()?;
        let database = dir.path().join("elsewhere/tasks.db");

        let config = AppConfig::resolve(Some(dir.path().to_owned()), Some(database.clone()))?;

        assert_eq!(config.database_path, database);
        assert!(dir.path().join("elsewhere").is_dir());
        Ok(())
    }
}
