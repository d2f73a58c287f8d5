//! Settings file management

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::WatchError;
use crate::filesys::file::File;
use crate::logs::LogLevel;

/// Watcher settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Emit logs as JSON
    #[serde(default)]
    pub json_logs: bool,

    /// Also write logs to files in this directory
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// Cloud CLI executable
    #[serde(default = "default_cli_program")]
    pub cli_program: String,

    /// Color rows by provisioning state
    #[serde(default = "default_true")]
    pub color: bool,

    /// Print deployment outputs
    #[serde(default = "default_true")]
    pub show_outputs: bool,

    /// Drop malformed operations instead of failing the whole list
    #[serde(default)]
    pub skip_malformed_operations: bool,
}

fn default_true() -> bool {
    true
}

fn default_cli_program() -> String {
    "az".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            json_logs: false,
            log_dir: None,
            cli_program: default_cli_program(),
            color: true,
            show_outputs: true,
            skip_malformed_operations: false,
        }
    }
}

impl Settings {
    /// Read settings from `file`, falling back to defaults when it does not exist
    pub async fn load(file: &File) -> Result<Self, WatchError> {
        if !file.exists().await {
            debug!(
                "No settings file at {}, using defaults",
                file.path().display()
            );
            return Ok(Self::default());
        }

        let settings = file.read_json::<Settings>().await.map_err(|e| {
            WatchError::ConfigError(format!(
                "Unable to read settings file {}: {}",
                file.path().display(),
                e
            ))
        })?;
        info!("Loaded settings from {}", file.path().display());
        Ok(settings)
    }
}
