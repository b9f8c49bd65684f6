//! Small display formatting helpers shared by the table views.

use chrono::{DateTime, Local, Utc};

/// Rough "how long ago" rendering for note timestamps: under an hour is
/// "Just now", under a day counts hours, under two days is "Yesterday",
/// anything older is the plain date. Unparseable input is returned as is.
pub fn format_relative(timestamp: &str) -> String {
    let parsed = match DateTime::parse_from_rfc3339(timestamp) {
        Ok(parsed) => parsed,
        Err(_) => return timestamp.to_string(),
    };
    let hours = Utc::now().signed_duration_since(parsed.with_timezone(&Utc)).num_hours();
    if hours < 1 {
        "Just now".to_string()
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else if hours < 48 {
        "Yesterday".to_string()
    } else {
        parsed.with_timezone(&Local).format("%Y-%m-%d").to_string()
    }
}

/// Progress toward a goal as a whole percentage, capped at 100.
pub fn progress_percent(count: i64, goal: i64) -> i64 {
    if goal <= 0 {
        return 100;
    }
    (count * 100 / goal).min(100)
}
