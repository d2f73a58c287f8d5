//! Duration strings reported by the deployment API (`PT2M30.5S`)
//!
//! Only the three shapes the provider emits are accepted. This is not a
//! general ISO-8601 duration parser.

use std::sync::LazyLock;

use chrono::Duration;
use regex::{Captures, Regex};

use crate::errors::WatchError;

const NANOS_PER_SECOND: i64 = 1_000_000_000;
const MAX_FRACTION_DIGITS: usize = 9;

static SECONDS: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^PT(?P<seconds>[0-9]+(?:\.[0-9]+)?|\.[0-9]+)S$"));

static MINUTES_SECONDS: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^PT(?P<minutes>[0-9]+)M(?P<seconds>[0-9]+(?:\.[0-9]+)?|\.[0-9]+)S$")
});

static HOURS_MINUTES_SECONDS: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^PT(?P<hours>[0-9]+)H(?P<minutes>[0-9]+)M(?P<seconds>[0-9]+(?:\.[0-9]+)?|\.[0-9]+)S$")
});

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("duration pattern is a valid regex")
}

/// Accepted duration shapes, in the order they are tried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationForm {
    /// `PT<seconds>S`
    Seconds,
    /// `PT<minutes>M<seconds>S`
    MinutesSeconds,
    /// `PT<hours>H<minutes>M<seconds>S`
    HoursMinutesSeconds,
}

impl DurationForm {
    pub const ALL: [DurationForm; 3] = [
        DurationForm::Seconds,
        DurationForm::MinutesSeconds,
        DurationForm::HoursMinutesSeconds,
    ];

    fn pattern(self) -> &'static Regex {
        match self {
            DurationForm::Seconds => &SECONDS,
            DurationForm::MinutesSeconds => &MINUTES_SECONDS,
            DurationForm::HoursMinutesSeconds => &HOURS_MINUTES_SECONDS,
        }
    }

    /// Captures for `text`, only when the match covers the whole string
    fn captures(self, text: &str) -> Option<Captures<'_>> {
        let captures = self.pattern().captures(text)?;
        let whole = captures.get(0)?;
        (whole.start() == 0 && whole.end() == text.len()).then_some(captures)
    }

    /// Whether this form alone accepts `text`
    pub fn matches(self, text: &str) -> bool {
        self.captures(text).is_some()
    }

    /// Parse `text` using this form only.
    pub fn parse(self, text: &str) -> Result<Duration, WatchError> {
        let captures = self
            .captures(text)
            .ok_or_else(|| WatchError::duration_format(text))?;
        self.extract(&captures, text)
    }

    fn extract(self, captures: &Captures<'_>, text: &str) -> Result<Duration, WatchError> {
        let whole = |name: &str| -> Result<i64, WatchError> {
            captures
                .name(name)
                .map_or(Ok(0), |m| m.as_str().parse::<i64>())
                .map_err(|_| WatchError::duration_format(text))
        };

        let hours = whole("hours")?;
        let minutes = whole("minutes")?;
        let seconds = captures
            .name("seconds")
            .ok_or_else(|| WatchError::duration_format(text))?
            .as_str();
        let (seconds, nanos) =
            split_seconds(seconds).ok_or_else(|| WatchError::duration_format(text))?;

        let total = hours
            .checked_mul(3600)
            .and_then(|h| minutes.checked_mul(60).and_then(|m| h.checked_add(m)))
            .and_then(|hm| hm.checked_add(seconds))
            .ok_or_else(|| WatchError::duration_format(text))?;

        Duration::try_seconds(total)
            .and_then(|d| d.checked_add(&Duration::nanoseconds(nanos)))
            .ok_or_else(|| WatchError::duration_format(text))
    }
}

/// Split `12.345` into whole seconds and nanoseconds, without going through floats.
///
/// Digits past nanosecond precision are truncated.
fn split_seconds(text: &str) -> Option<(i64, i64)> {
    let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));
    let fraction = fraction.get(..MAX_FRACTION_DIGITS).unwrap_or(fraction);

    let whole = if whole.is_empty() { 0 } else { whole.parse::<i64>().ok()? };
    let nanos = if fraction.is_empty() {
        0
    } else {
        let scale = 10_i64.pow((MAX_FRACTION_DIGITS - fraction.len()) as u32);
        fraction.parse::<i64>().ok()? * scale
    };
    debug_assert!(nanos < NANOS_PER_SECOND);

    Some((whole, nanos))
}

/// Parse a provider duration string, trying each [`DurationForm`] in order.
pub fn parse_duration(text: &str) -> Result<Duration, WatchError> {
    for form in DurationForm::ALL {
        if let Some(captures) = form.captures(text) {
            return form.extract(&captures, text);
        }
    }
    Err(WatchError::duration_format(text))
}
