//! Running cloud CLI commands

use async_trait::async_trait;
use serde_json::Value;
use tokio::process::Command;
use tracing::{debug, error};

use crate::cli::command::CliCommand;
use crate::errors::WatchError;

/// Something that can execute a [`CliCommand`] and hand back its stdout
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, command: &CliCommand) -> Result<String, WatchError>;
}

/// Runs commands as child processes
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner;

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, command: &CliCommand) -> Result<String, WatchError> {
        debug!("Running command: {}", command);

        let output = Command::new(&command.program)
            .args(&command.args)
            .output()
            .await
            .map_err(|e| {
                error!("Command could not be started: {}", command);
                WatchError::IoError(e)
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            error!("Command failed: {}", command);
            error!("Output: {}{}", stdout, stderr);
            return Err(WatchError::CommandFailed {
                command: command.to_string(),
                status: output.status.to_string(),
                output: format!("{}{}", stdout, stderr),
            });
        }

        debug!("Command {} ended with output: {}", command, stdout);
        Ok(stdout)
    }
}

/// Run a command and parse its stdout as JSON
pub async fn run_json<R>(runner: &R, command: &CliCommand) -> Result<Value, WatchError>
where
    R: CommandRunner + ?Sized,
{
    let output = runner.run(command).await?;
    if output.trim().is_empty() {
        return Err(WatchError::EmptyOutput(command.to_string()));
    }

    serde_json::from_str(&output).map_err(|e| {
        error!("Command {} returned output that is not JSON: {}", command, e);
        WatchError::JsonError(e)
    })
}
