/// Time formatting utilities
///
/// Clock and session-age text for the topbar.

use chrono::{DateTime, Duration, TimeZone, Utc};
use std::fmt::Display;

/// Render the topbar clock. `format` must already be validated (see `ShellConfig::validate`).
pub fn format_clock<Tz>(time: &DateTime<Tz>, format: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.format(format).to_string()
}

/// Format a timestamp relative to `now` (e.g., "5 minutes ago", "2 hours ago")
pub fn format_relative_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now.signed_duration_since(timestamp);

    if diff < Duration::zero() {
        return "just now".to_string();
    }

    if diff.num_seconds() < 60 {
        "just now".to_string()
    } else if diff.num_minutes() < 60 {
        plural(diff.num_minutes(), "minute")
    } else if diff.num_hours() < 24 {
        plural(diff.num_hours(), "hour")
    } else {
        plural(diff.num_days(), "day")
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}
