//! Watch configuration options

use crate::cli::queries::DeploymentTarget;
use crate::models::BatchPolicy;
use crate::render::RenderOptions;
use crate::storage::settings::Settings;

/// How results are written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Summary line and tables
    #[default]
    Table,

    /// The watch report as JSON
    Json,
}

impl std::str::FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputMode::Table),
            "json" => Ok(OutputMode::Json),
            _ => Err(format!("Invalid output mode: {}", s)),
        }
    }
}

/// Options for one watch cycle
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Deployment to watch
    pub target: DeploymentTarget,

    /// Cloud CLI executable
    pub cli_program: String,

    /// Handling of malformed operation entries
    pub batch_policy: BatchPolicy,

    /// Output mode
    pub output: OutputMode,

    /// Table rendering options
    pub render: RenderOptions,
}

impl WatchOptions {
    /// Options for `target` with everything else taken from settings
    pub fn from_settings(target: DeploymentTarget, settings: &Settings) -> Self {
        Self {
            target,
            cli_program: settings.cli_program.clone(),
            batch_policy: if settings.skip_malformed_operations {
                BatchPolicy::Skip
            } else {
                BatchPolicy::Abort
            },
            output: OutputMode::Table,
            render: RenderOptions {
                colorize: settings.color,
                show_outputs: settings.show_outputs,
            },
        }
    }
}
