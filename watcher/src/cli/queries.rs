//! Deployment queries against the cloud CLI

use tracing::debug;

use crate::cli::command::CliCommand;
use crate::cli::runner::{run_json, CommandRunner};
use crate::errors::WatchError;
use crate::models::{operations_from_json, BatchPolicy, Deployment, Operation};

/// Identifies the deployment being watched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentTarget {
    pub resource_group: String,
    pub deployment_name: String,
}

impl DeploymentTarget {
    fn scope_args(&self) -> [&str; 4] {
        [
            "-g",
            self.resource_group.as_str(),
            "-n",
            self.deployment_name.as_str(),
        ]
    }
}

/// `az deployment group show -g <group> -n <name>`
pub fn show_deployment_command(program: &str, target: &DeploymentTarget) -> CliCommand {
    let mut args = vec!["deployment", "group", "show"];
    args.extend(target.scope_args());
    CliCommand::json(program, args)
}

/// `az deployment operation group list -g <group> -n <name>`
pub fn list_operations_command(program: &str, target: &DeploymentTarget) -> CliCommand {
    let mut args = vec!["deployment", "operation", "group", "list"];
    args.extend(target.scope_args());
    CliCommand::json(program, args)
}

/// Fetch and build the watched deployment
pub async fn show_deployment<R>(
    runner: &R,
    program: &str,
    target: &DeploymentTarget,
) -> Result<Deployment, WatchError>
where
    R: CommandRunner + ?Sized,
{
    let raw = run_json(runner, &show_deployment_command(program, target)).await?;
    let deployment = Deployment::from_json(&raw)?;
    debug!(
        "Deployment {} is {}",
        deployment.name, deployment.provisioning_state
    );
    Ok(deployment)
}

/// Fetch and build the operations of the watched deployment, in list order
pub async fn list_operations<R>(
    runner: &R,
    program: &str,
    target: &DeploymentTarget,
    policy: BatchPolicy,
) -> Result<Vec<Operation>, WatchError>
where
    R: CommandRunner + ?Sized,
{
    let raw = run_json(runner, &list_operations_command(program, target)).await?;
    let operations = operations_from_json(&raw, policy)?;
    debug!("Fetched {} operations", operations.len());
    Ok(operations)
}
