//! Table output for a watch cycle

use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;

use crate::app::run::WatchReport;
use crate::models::{Deployment, DeploymentOutput, Operation};
use crate::render::{format_span, format_time, paint};

const OPERATION_HEADERS: [&str; 5] = [
    "State",
    "ResourceType",
    "ResourceName",
    "StartTime",
    "Duration",
];

/// Rendering switches
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Color rows by provisioning state
    pub colorize: bool,

    /// Print template outputs once the deployment has them
    pub show_outputs: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            colorize: true,
            show_outputs: true,
        }
    }
}

/// `Deployment: <name> (<state>) - start <time>, duration <span>`
pub fn render_summary(deployment: &Deployment, colorize: bool) -> String {
    format!(
        "Deployment: {} ({}) - start {}, duration {}",
        deployment.name,
        paint(&deployment.provisioning_state, &deployment.provisioning_state, colorize),
        format_time(&deployment.start_time),
        format_span(&deployment.duration),
    )
}

/// Operations table, one row per operation, in the given order
pub fn operations_table(operations: &[Operation], colorize: bool) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(OPERATION_HEADERS.to_vec());

    for operation in operations {
        let state = operation.provisioning_state.as_str();
        let cells = [
            state.to_string(),
            operation.resource_type().unwrap_or("").to_string(),
            operation.resource_name().unwrap_or("").to_string(),
            format_time(&operation.start_time),
            format_span(&operation.duration),
        ];
        table.add_row(
            cells
                .iter()
                .map(|cell| paint(cell, state, colorize))
                .collect::<Vec<_>>(),
        );
    }

    table
}

/// One block per operation that reported an error
pub fn render_errors(operations: &[Operation], colorize: bool) -> Option<String> {
    let blocks: Vec<String> = operations
        .iter()
        .filter_map(|operation| {
            let error = operation.error.as_ref()?;
            let target = operation.resource_name().unwrap_or(&operation.id);
            let heading = match &error.code {
                Some(code) => format!("{} ({})", target, code),
                None => target.to_string(),
            };
            Some(format!(
                "{}\n{}",
                paint(&heading, &operation.provisioning_state, colorize),
                indent(&error.message)
            ))
        })
        .collect();

    (!blocks.is_empty()).then(|| blocks.join("\n\n"))
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("  {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Outputs table, values shown as compact JSON unless they are plain strings
pub fn outputs_table(outputs: &[DeploymentOutput]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Name", "Type", "Value"]);

    for output in outputs {
        let value = match output.value.as_str() {
            Some(text) => text.to_string(),
            None => output.value.to_string(),
        };
        table.add_row(vec![output.name.clone(), output.output_type.clone(), value]);
    }

    table
}

/// Full text report for one watch cycle
pub fn render_report(report: &WatchReport, options: RenderOptions) -> String {
    let mut out = String::new();
    out.push_str(&render_summary(&report.deployment, options.colorize));
    out.push_str("\n\n");
    out.push_str(&format!(
        "{}\n",
        operations_table(&report.operations, options.colorize)
    ));

    if let Some(errors) = render_errors(&report.operations, options.colorize) {
        out.push_str("\nErrors\n\n");
        out.push_str(&errors);
        out.push('\n');
    }

    if options.show_outputs && !report.deployment.outputs.is_empty() {
        out.push_str("\nOutputs\n\n");
        out.push_str(&format!("{}\n", outputs_table(&report.deployment.outputs)));
    }

    out
}
