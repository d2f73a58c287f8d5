//! Terminal presentation of deployments and operations

pub mod table;

use chrono::{DateTime, Duration, Utc};
use colored::{Color, Colorize};

pub use table::{render_report, render_summary, RenderOptions};

/// Presentation color for a provisioning state, `None` meaning the default color
pub fn color_for_state(state: &str) -> Option<Color> {
    match state {
        "Succeeded" => Some(Color::BrightBlack),
        "Failed" => Some(Color::Red),
        "Running" => Some(Color::Green),
        _ => None,
    }
}

/// Paint `text` in the color of `state` when coloring is enabled
pub fn paint(text: &str, state: &str, colorize: bool) -> String {
    match color_for_state(state) {
        Some(color) if colorize => text.color(color).to_string(),
        _ => text.to_string(),
    }
}

/// Format a span as `H:MM:SS`, with microseconds when there are any
pub fn format_span(span: &Duration) -> String {
    let total = span.num_seconds();
    let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);
    let micros = span.subsec_nanos() / 1_000;

    if micros == 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}:{:02}.{:06}", hours, minutes, seconds, micros)
    }
}

pub fn format_time(time: &DateTime<Utc>) -> String {
    time.format("%Y-%m-%d %H:%M:%S").to_string()
}
