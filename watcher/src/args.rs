//! Command line arguments

use std::collections::HashMap;
use std::path::PathBuf;

use crate::app::options::OutputMode;
use crate::cli::queries::DeploymentTarget;
use crate::errors::WatchError;
use crate::logs::LogLevel;

/// Flags that never take a value
const SWITCHES: [&str; 4] = ["version", "no-color", "no-outputs", "help"];

/// Parsed `--key=value`, `--key value`, `-g value` and `--flag` arguments
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    values: HashMap<String, String>,
}

fn canonical_key(key: &str) -> &str {
    match key {
        "g" => "resource-group",
        "n" => "name",
        "o" => "output",
        other => other,
    }
}

impl CliArgs {
    /// Parse arguments, excluding the program name
    pub fn parse<I>(args: I) -> Result<Self, WatchError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut values = HashMap::new();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            if !arg.starts_with('-') {
                return Err(WatchError::ConfigError(format!(
                    "Unexpected argument: {}",
                    arg
                )));
            }

            let trimmed = arg.trim_start_matches('-');
            if let Some((key, value)) = trimmed.split_once('=') {
                values.insert(canonical_key(key).to_string(), value.to_string());
                continue;
            }

            let key = canonical_key(trimmed);
            if SWITCHES.contains(&key) {
                values.insert(key.to_string(), "true".to_string());
                continue;
            }

            let value = args
                .next()
                .ok_or_else(|| WatchError::ConfigError(format!("Missing value for {}", arg)))?;
            values.insert(key.to_string(), value);
        }

        Ok(Self { values })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn flag(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// The deployment named by `--resource-group` and `--name`
    pub fn target(&self) -> Result<DeploymentTarget, WatchError> {
        let required = |key: &str| {
            self.get(key)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
                .ok_or_else(|| WatchError::ConfigError(format!("--{} is required", key)))
        };

        Ok(DeploymentTarget {
            resource_group: required("resource-group")?,
            deployment_name: required("name")?,
        })
    }

    pub fn output(&self) -> Result<Option<OutputMode>, WatchError> {
        self.get("output")
            .map(|value| value.parse().map_err(WatchError::ConfigError))
            .transpose()
    }

    pub fn log_level(&self) -> Result<Option<LogLevel>, WatchError> {
        self.get("log-level")
            .map(|value| value.parse().map_err(WatchError::ConfigError))
            .transpose()
    }

    pub fn settings_path(&self) -> Option<PathBuf> {
        self.get("settings").map(PathBuf::from)
    }
}

pub const USAGE: &str = "\
Usage: deploywatch --resource-group <group> --name <deployment> [options]

Options:
  -g, --resource-group <group>   Resource group of the deployment
  -n, --name <deployment>        Deployment name
  -o, --output <table|json>      Output mode (default: table)
      --no-color                 Do not color rows by state
      --no-outputs               Do not print deployment outputs
      --log-level <level>        trace, debug, info, warn or error
      --settings <path>          Settings file (default: ~/.deploywatch/settings.json)
      --version                  Print version information
      --help                     Print this help";
