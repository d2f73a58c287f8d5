//! Duration and timestamp parser tests

use chrono::{Duration, TimeZone, Utc};
use deploywatch::errors::{FormatKind, WatchError};
use deploywatch::parse::{parse_duration, parse_timestamp, DurationForm};

fn seconds(secs: i64, millis: i64) -> Duration {
    Duration::seconds(secs) + Duration::milliseconds(millis)
}

#[test]
fn test_seconds_only() {
    assert_eq!(parse_duration("PT45.5S").unwrap(), seconds(45, 500));
    assert_eq!(parse_duration("PT7S").unwrap(), seconds(7, 0));
    assert_eq!(parse_duration("PT0S").unwrap(), Duration::zero());
    assert_eq!(
        parse_duration("PT1.5437298S").unwrap(),
        Duration::seconds(1) + Duration::nanoseconds(543_729_800)
    );
}

#[test]
fn test_minutes_and_seconds() {
    assert_eq!(parse_duration("PT2M30S").unwrap(), seconds(150, 0));
    assert_eq!(parse_duration("PT10M0.25S").unwrap(), seconds(600, 250));
}

#[test]
fn test_hours_minutes_and_seconds() {
    assert_eq!(parse_duration("PT1H2M3.5S").unwrap(), seconds(3723, 500));
    assert_eq!(parse_duration("PT0H0M1S").unwrap(), seconds(1, 0));
}

#[test]
fn test_forms_are_tried_in_order() {
    assert_eq!(
        DurationForm::ALL,
        [
            DurationForm::Seconds,
            DurationForm::MinutesSeconds,
            DurationForm::HoursMinutesSeconds,
        ]
    );

    let accepting: Vec<DurationForm> = DurationForm::ALL
        .into_iter()
        .filter(|form| form.matches("PT1H2M3S"))
        .collect();
    assert_eq!(accepting, vec![DurationForm::HoursMinutesSeconds]);
}

#[test]
fn test_hours_form_rejected_by_shorter_matchers() {
    assert!(DurationForm::Seconds.parse("PT1H2M3S").is_err());
    assert!(DurationForm::MinutesSeconds.parse("PT1H2M3S").is_err());
    assert_eq!(
        DurationForm::HoursMinutesSeconds.parse("PT1H2M3S").unwrap(),
        seconds(3723, 0)
    );
}

#[test]
fn test_unsupported_durations() {
    for text in [
        "",
        "PT",
        "PTS",
        "P1D",
        "PT1H",
        "PT1M",
        "PT1H30S",
        "PT-5S",
        "PT1.5M3S",
        "pt5s",
        " PT5S",
        "PT5S ",
    ] {
        match parse_duration(text) {
            Err(WatchError::Format { kind, value }) => {
                assert_eq!(kind, FormatKind::Duration);
                assert_eq!(value, text);
            }
            other => panic!("{text:?} gave {other:?}"),
        }
    }
}

#[test]
fn test_timestamp_is_utc() {
    let parsed = parse_timestamp("2021-05-01T12:00:00.000000+00:00").unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2021, 5, 1, 12, 0, 0).unwrap());
}

#[test]
fn test_timestamp_format_error() {
    match parse_timestamp("2021-05-01T12:00:00Z") {
        Err(WatchError::Format { kind, value }) => {
            assert_eq!(kind, FormatKind::Timestamp);
            assert_eq!(value, "2021-05-01T12:00:00Z");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}
