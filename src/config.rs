//! Environment-driven settings. Call `dotenvy::dotenv()` first so `.env` values apply.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Dataset read when neither `--data` nor `ZOMATO_DATA` is given.
pub const DEFAULT_DATA_SOURCE: &str = "Zomato_Live.csv";

const DEFAULT_LOG_FILE_PATH: &str = "logs/zomato_explorer.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub directory: PathBuf,
    pub file_name: String,
}

impl LogSettings {
    /// Reads `LOG_FILE_PATH`, falling back to `logs/zomato_explorer.log`.
    pub fn from_env() -> Self {
        let path =
            std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| DEFAULT_LOG_FILE_PATH.to_string());
        Self::from_path(&path)
    }

    pub fn from_path(path: &str) -> Self {
        let path = Path::new(path);
        let directory = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("logs"))
            .to_path_buf();
        let file_name = path
            .file_name()
            .unwrap_or(OsStr::new("zomato_explorer.log"))
            .to_string_lossy()
            .into_owned();

        LogSettings {
            directory,
            file_name,
        }
    }
}
