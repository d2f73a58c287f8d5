//! Deployment API timestamps (`2021-05-01T12:00:00.000000+00:00`)

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;

use crate::errors::WatchError;

const UTC_OFFSET: &str = "+00:00";

static TIMESTAMP_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}\.[0-9]{6}\+00:00$")
        .expect("timestamp pattern is a valid regex")
});

/// Parse a UTC timestamp with microsecond precision and a literal `+00:00` offset.
///
/// Other offsets, `Z` suffixes and other fraction widths are rejected rather
/// than normalized.
pub fn parse_timestamp(text: &str) -> Result<DateTime<Utc>, WatchError> {
    if !TIMESTAMP_SHAPE.is_match(text) {
        return Err(WatchError::timestamp_format(text));
    }

    let local = text
        .strip_suffix(UTC_OFFSET)
        .ok_or_else(|| WatchError::timestamp_format(text))?;

    NaiveDateTime::parse_from_str(local, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|_| WatchError::timestamp_format(text))
}
