//! A single watch cycle

use serde::Serialize;
use tracing::info;

use crate::app::options::{OutputMode, WatchOptions};
use crate::cli::queries::{list_operations, show_deployment};
use crate::cli::runner::CommandRunner;
use crate::errors::WatchError;
use crate::models::{sort_by_start_time, Deployment, Operation};
use crate::render::render_report;

/// Everything fetched in one cycle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WatchReport {
    pub deployment: Deployment,

    /// Sorted by start time, earliest first
    pub operations: Vec<Operation>,
}

/// Fetch the deployment and its operations once
pub async fn watch_once<R>(runner: &R, options: &WatchOptions) -> Result<WatchReport, WatchError>
where
    R: CommandRunner + ?Sized,
{
    let deployment = show_deployment(runner, &options.cli_program, &options.target).await?;
    let mut operations = list_operations(
        runner,
        &options.cli_program,
        &options.target,
        options.batch_policy,
    )
    .await?;
    sort_by_start_time(&mut operations);

    info!(
        "Deployment {} ({}) has {} operations",
        deployment.name,
        deployment.provisioning_state,
        operations.len()
    );

    Ok(WatchReport {
        deployment,
        operations,
    })
}

/// Render a report the way `options` asks for
pub fn render(report: &WatchReport, options: &WatchOptions) -> Result<String, WatchError> {
    match options.output {
        OutputMode::Table => Ok(render_report(report, options.render)),
        OutputMode::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}
