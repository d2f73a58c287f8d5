//! Start/end/duration reconciliation shared by deployments and operations

use chrono::{DateTime, Duration, Utc};
use serde::Serializer;

use crate::errors::WatchError;
use crate::parse::{parse_duration, parse_timestamp, JsonNode};

/// Time window of a deployment or operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Timing {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub duration: Duration,
}

impl Timing {
    /// Read `timestamp` and the duration from a `properties` object.
    ///
    /// The timestamp marks the end of the window; the start is derived by
    /// subtracting the duration.
    pub fn from_properties(properties: &JsonNode<'_>) -> Result<Self, WatchError> {
        let end_time = parse_timestamp(properties.required_str("timestamp")?)?;

        let duration_node = duration_source(properties)?;
        let duration = parse_duration(duration_node.as_str()?)?;

        let start_time = end_time
            .checked_sub_signed(duration)
            .ok_or_else(|| {
                WatchError::invalid_field(
                    duration_node.path(),
                    "duration exceeds the timestamp range",
                )
            })?;

        Ok(Self {
            start_time,
            end_time,
            duration,
        })
    }
}

/// `duration` when present, `additionalProperties.duration` otherwise
fn duration_source<'a>(properties: &JsonNode<'a>) -> Result<JsonNode<'a>, WatchError> {
    if let Some(duration) = properties.get("duration") {
        return Ok(duration);
    }

    match properties.get("additionalProperties") {
        Some(additional) => additional.required("duration"),
        None => Err(WatchError::MissingField(properties.child_path("duration"))),
    }
}

/// Serialize a span as fractional seconds
pub(crate) fn serialize_seconds<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(span_seconds(duration))
}

/// Fractional seconds in a span
pub fn span_seconds(duration: &Duration) -> f64 {
    duration.num_seconds() as f64 + f64::from(duration.subsec_nanos()) / 1e9
}
