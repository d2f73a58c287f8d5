//! Deployment operation models

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::errors::WatchError;
use crate::models::status::{extract_error, OperationError};
use crate::models::timing::{serialize_seconds, Timing};
use crate::parse::JsonNode;

/// What a failing operation list entry does to the rest of the list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BatchPolicy {
    /// The first malformed operation fails the whole list
    #[default]
    Abort,

    /// Malformed operations are logged and dropped
    Skip,
}

/// Resource an operation acts upon
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetResource {
    pub resource_type: String,
    pub resource_name: String,
}

/// One step of a deployment, as reported by the operation list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Operation {
    /// Operation ID, unique within its deployment
    pub id: String,

    /// Provisioning state, e.g. `Running`, `Succeeded`, `Failed`
    pub provisioning_state: String,

    /// Target resource, absent for operations without one
    pub target_resource: Option<TargetResource>,

    /// Error extracted from the status message
    pub error: Option<OperationError>,

    pub start_time: DateTime<Utc>,

    pub end_time: DateTime<Utc>,

    #[serde(serialize_with = "serialize_seconds")]
    pub duration: Duration,
}

impl Operation {
    /// Build an operation from one entry of `az deployment operation group list`
    pub fn from_json(raw: &Value) -> Result<Self, WatchError> {
        let root = JsonNode::root(raw);
        let id = root.required_str("operationId")?;
        let properties = root.required("properties")?;
        let provisioning_state = properties.required_str("provisioningState")?;
        let timing = Timing::from_properties(&properties)?;

        let target_resource = match properties.get("targetResource") {
            Some(target) => Some(TargetResource {
                resource_type: target.required_str("resourceType")?.to_string(),
                resource_name: target.required_str("resourceName")?.to_string(),
            }),
            None => None,
        };

        let error = extract_error(properties.value().get("statusMessage"));

        Ok(Self {
            id: id.to_string(),
            provisioning_state: provisioning_state.to_string(),
            target_resource,
            error,
            start_time: timing.start_time,
            end_time: timing.end_time,
            duration: timing.duration,
        })
    }

    pub fn resource_type(&self) -> Option<&str> {
        self.target_resource
            .as_ref()
            .map(|target| target.resource_type.as_str())
    }

    pub fn resource_name(&self) -> Option<&str> {
        self.target_resource
            .as_ref()
            .map(|target| target.resource_name.as_str())
    }
}

/// Build every operation in a list payload
pub fn operations_from_json(
    raw: &Value,
    policy: BatchPolicy,
) -> Result<Vec<Operation>, WatchError> {
    let entries = raw
        .as_array()
        .ok_or_else(|| WatchError::invalid_field("operations", "expected a list"))?;

    let mut operations = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        match Operation::from_json(entry) {
            Ok(operation) => operations.push(operation),
            Err(e) if policy == BatchPolicy::Skip => {
                warn!("Skipping operation {}: {}", index, e);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(operations)
}

/// Order operations by start time, earliest first. Ties keep their list order.
pub fn sort_by_start_time(operations: &mut [Operation]) {
    operations.sort_by_key(|operation| operation.start_time);
}
