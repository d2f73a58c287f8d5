//! Watch cycle tests against a scripted cloud CLI

use std::sync::Mutex;

use async_trait::async_trait;
use deploywatch::app::options::{OutputMode, WatchOptions};
use deploywatch::app::run::{render, watch_once};
use deploywatch::cli::command::CliCommand;
use deploywatch::cli::queries::{
    list_operations_command, show_deployment_command, DeploymentTarget,
};
use deploywatch::cli::runner::{run_json, CommandRunner};
use deploywatch::errors::WatchError;
use deploywatch::models::BatchPolicy;
use deploywatch::render::RenderOptions;
use serde_json::{json, Value};

/// Answers `show` and `list` commands with canned output and records what ran
struct ScriptedRunner {
    deployment: String,
    operations: String,
    calls: Mutex<Vec<CliCommand>>,
}

impl ScriptedRunner {
    fn new(deployment: Value, operations: Value) -> Self {
        Self {
            deployment: deployment.to_string(),
            operations: operations.to_string(),
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn run(&self, command: &CliCommand) -> Result<String, WatchError> {
        self.calls.lock().unwrap().push(command.clone());
        if command.args.iter().any(|arg| arg == "show") {
            Ok(self.deployment.clone())
        } else if command.args.iter().any(|arg| arg == "list") {
            Ok(self.operations.clone())
        } else {
            Err(WatchError::CommandFailed {
                command: command.to_string(),
                status: "exit status: 2".to_string(),
                output: "unknown command".to_string(),
            })
        }
    }
}

/// Fails every command
struct FailingRunner;

#[async_trait]
impl CommandRunner for FailingRunner {
    async fn run(&self, command: &CliCommand) -> Result<String, WatchError> {
        Err(WatchError::CommandFailed {
            command: command.to_string(),
            status: "exit status: 3".to_string(),
            output: "ERROR: Deployment not found".to_string(),
        })
    }
}

fn target() -> DeploymentTarget {
    DeploymentTarget {
        resource_group: "rg".to_string(),
        deployment_name: "dep".to_string(),
    }
}

fn options(output: OutputMode) -> WatchOptions {
    WatchOptions {
        target: target(),
        cli_program: "az".to_string(),
        batch_policy: BatchPolicy::Abort,
        output,
        render: RenderOptions {
            colorize: false,
            show_outputs: true,
        },
    }
}

fn deployment() -> Value {
    json!({
        "id": "/subscriptions/sub/resourceGroups/rg/providers/Microsoft.Resources/deployments/dep",
        "name": "dep",
        "properties": {
            "provisioningState": "Failed",
            "timestamp": "2021-05-01T12:05:00.000000+00:00",
            "duration": "PT5M0S",
            "outputs": { "siteUrl": { "type": "String", "value": "https://app" } }
        }
    })
}

fn operations() -> Value {
    json!([
        {
            "operationId": "OP2",
            "properties": {
                "provisioningState": "Failed",
                "timestamp": "2021-05-01T12:05:00.000000+00:00",
                "duration": "PT30S",
                "targetResource": { "resourceType": "Microsoft.Web/sites", "resourceName": "app" },
                "statusMessage": {
                    "error": { "code": "Conflict", "message": "Site name is taken." }
                }
            }
        },
        {
            "operationId": "OP1",
            "properties": {
                "provisioningState": "Succeeded",
                "timestamp": "2021-05-01T12:01:00.000000+00:00",
                "additionalProperties": { "duration": "PT1M0S" },
                "targetResource": {
                    "resourceType": "Microsoft.Web/serverfarms",
                    "resourceName": "plan"
                },
                "statusMessage": null
            }
        }
    ])
}

#[test]
fn test_commands() {
    let show = show_deployment_command("az", &target());
    assert_eq!(
        show.to_string(),
        "az deployment group show -g rg -n dep --output json"
    );

    let list = list_operations_command("az", &target());
    assert_eq!(
        list.to_string(),
        "az deployment operation group list -g rg -n dep --output json"
    );
}

#[test]
fn test_watch_once_sorts_operations() {
    let runner = ScriptedRunner::new(deployment(), operations());
    let report = tokio_test::block_on(watch_once(&runner, &options(OutputMode::Table))).unwrap();

    assert_eq!(report.deployment.name, "dep");
    let ids: Vec<&str> = report.operations.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["OP1", "OP2"]);
    assert_eq!(runner.calls.lock().unwrap().len(), 2);
}

#[test]
fn test_table_report() {
    let runner = ScriptedRunner::new(deployment(), operations());
    let options = options(OutputMode::Table);
    let report = tokio_test::block_on(watch_once(&runner, &options)).unwrap();
    let text = render(&report, &options).unwrap();

    assert!(text.starts_with(
        "Deployment: dep (Failed) - start 2021-05-01 12:00:00, duration 0:05:00"
    ));
    for header in ["State", "ResourceType", "ResourceName", "StartTime", "Duration"] {
        assert!(text.contains(header), "missing header {header}");
    }
    assert!(text.contains("Microsoft.Web/serverfarms"));
    assert!(text.contains("app (Conflict)"));
    assert!(text.contains("  Site name is taken."));
    assert!(text.contains("https://app"));
    assert!(!text.contains('\u{1b}'));
}

#[test]
fn test_outputs_can_be_hidden() {
    let runner = ScriptedRunner::new(deployment(), operations());
    let mut options = options(OutputMode::Table);
    options.render.show_outputs = false;
    let report = tokio_test::block_on(watch_once(&runner, &options)).unwrap();
    assert!(!render(&report, &options).unwrap().contains("https://app"));
}

#[test]
fn test_json_report() {
    let runner = ScriptedRunner::new(deployment(), operations());
    let options = options(OutputMode::Json);
    let report = tokio_test::block_on(watch_once(&runner, &options)).unwrap();
    let rendered: Value = serde_json::from_str(&render(&report, &options).unwrap()).unwrap();

    assert_eq!(rendered["deployment"]["duration"], json!(300.0));
    assert_eq!(rendered["deployment"]["outputs"][0]["type"], json!("String"));
    assert_eq!(rendered["operations"][1]["error"]["code"], json!("Conflict"));
    assert_eq!(
        rendered["operations"][0]["target_resource"]["resource_name"],
        json!("plan")
    );
}

#[test]
fn test_command_failure_propagates() {
    let result = tokio_test::block_on(watch_once(&FailingRunner, &options(OutputMode::Table)));
    assert!(matches!(result, Err(WatchError::CommandFailed { .. })));
}

#[test]
fn test_empty_and_invalid_output() {
    let mut runner = ScriptedRunner::new(deployment(), json!([]));
    runner.deployment = "  \n".to_string();
    let command = show_deployment_command("az", &target());
    assert!(matches!(
        tokio_test::block_on(run_json(&runner, &command)),
        Err(WatchError::EmptyOutput(_))
    ));

    runner.deployment = "not json".to_string();
    assert!(matches!(
        tokio_test::block_on(run_json(&runner, &command)),
        Err(WatchError::JsonError(_))
    ));
}

#[test]
fn test_malformed_deployment_aborts_cycle() {
    let mut broken = deployment();
    broken["properties"]["timestamp"] = json!("2021-05-01T12:05:00Z");
    let runner = ScriptedRunner::new(broken, operations());
    let result = tokio_test::block_on(watch_once(&runner, &options(OutputMode::Table)));
    assert!(matches!(result, Err(WatchError::Format { .. })));
    assert_eq!(runner.calls.lock().unwrap().len(), 1);
}
