//! Parsers for the fixed formats found in CLI payloads

pub mod duration;
pub mod json;
pub mod timestamp;

pub use duration::{parse_duration, DurationForm};
pub use json::JsonNode;
pub use timestamp::parse_timestamp;
