//! Domain records built from CLI payloads

pub mod deployment;
pub mod operation;
pub mod status;
mod timing;

pub use deployment::{Deployment, DeploymentOutput};
pub use operation::{
    operations_from_json, sort_by_start_time, BatchPolicy, Operation, TargetResource,
};
pub use status::{extract_error, OperationError, StatusMessageShape};
pub use timing::span_seconds;
