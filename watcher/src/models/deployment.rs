//! Deployment models

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::errors::WatchError;
use crate::models::timing::{serialize_seconds, Timing};
use crate::parse::JsonNode;

/// A deployment as reported by `az deployment group show`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Deployment {
    /// Full resource ID
    pub id: String,

    /// Deployment name
    pub name: String,

    /// Provisioning state, e.g. `Running`, `Succeeded`, `Failed`
    pub provisioning_state: String,

    pub start_time: DateTime<Utc>,

    pub end_time: DateTime<Utc>,

    #[serde(serialize_with = "serialize_seconds")]
    pub duration: Duration,

    /// Template outputs, in the order the payload lists them
    pub outputs: Vec<DeploymentOutput>,
}

/// A single template output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeploymentOutput {
    pub name: String,

    /// Type tag as reported, e.g. `String`, `Int`, `Object`
    #[serde(rename = "type")]
    pub output_type: String,

    /// Output value, left uninterpreted
    pub value: Value,
}

impl Deployment {
    /// Build a deployment from the payload of `az deployment group show`
    pub fn from_json(raw: &Value) -> Result<Self, WatchError> {
        let root = JsonNode::root(raw);
        let id = root.required_str("id")?;
        let name = root.required_str("name")?;
        let properties = root.required("properties")?;
        let provisioning_state = properties.required_str("provisioningState")?;
        let timing = Timing::from_properties(&properties)?;

        let outputs = match properties.get("outputs") {
            Some(outputs) => outputs_from_json(&outputs)?,
            None => Vec::new(),
        };

        Ok(Self {
            id: id.to_string(),
            name: name.to_string(),
            provisioning_state: provisioning_state.to_string(),
            start_time: timing.start_time,
            end_time: timing.end_time,
            duration: timing.duration,
            outputs,
        })
    }
}

fn outputs_from_json(outputs: &JsonNode<'_>) -> Result<Vec<DeploymentOutput>, WatchError> {
    let entries = outputs.as_object()?;

    entries
        .keys()
        .map(|key| -> Result<DeploymentOutput, WatchError> {
            let entry = outputs.required(key)?;
            Ok(DeploymentOutput {
                name: key.clone(),
                output_type: entry.required_str("type")?.to_string(),
                value: entry.value().get("value").cloned().unwrap_or(Value::Null),
            })
        })
        .collect()
}
