//! Logging configuration

use std::path::{Path, PathBuf};

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::errors::WatchError;

const LOG_FILE_NAME: &str = "deploywatch.log";

/// Log level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl LogLevel {
    pub fn to_filter_string(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: {}", s)),
        }
    }
}

impl serde::Serialize for LogLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_filter_string())
    }
}

impl<'de> serde::Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Logging options
#[derive(Debug, Clone)]
pub struct LogOptions {
    /// Log level
    pub log_level: LogLevel,

    /// Log directory for file output
    pub log_dir: Option<PathBuf>,

    /// Enable JSON format
    pub json_format: bool,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            log_dir: None,
            json_format: false,
        }
    }
}

/// Initialize logging
///
/// Console logs go to stderr so stdout only carries the report.
pub fn init_logging(options: LogOptions) -> Result<(), WatchError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(options.log_level.to_filter_string()));

    let json_console = options
        .json_format
        .then(|| fmt::layer().json().with_writer(std::io::stderr));
    let plain_console = (!options.json_format).then(|| fmt::layer().with_writer(std::io::stderr));
    let file = options
        .log_dir
        .as_deref()
        .map(file_appender)
        .transpose()?
        .map(|appender| fmt::layer().with_ansi(false).with_writer(appender));

    tracing_subscriber::registry()
        .with(filter)
        .with(json_console)
        .with(plain_console)
        .with(file)
        .try_init()
        .map_err(|e| WatchError::ConfigError(e.to_string()))
}

/// Single, never-rotated log file under `dir`
fn file_appender(dir: &Path) -> Result<RollingFileAppender, WatchError> {
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(dir)
        .map_err(|e| WatchError::ConfigError(format!("cannot log to {}: {}", dir.display(), e)))
}
