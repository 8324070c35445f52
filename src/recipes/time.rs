//! Human-readable timestamps.

use chrono::{DateTime, Utc};

/// "Just now", "5h ago" or "3d ago". Future timestamps read as "Just now".
pub fn format_time_ago(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = (now - created_at).num_hours();

    if hours < 1 {
        "Just now".to_string()
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else {
        format!("{}d ago", hours / 24)
    }
}

/// Month and year, e.g. "Oct 2026", for "joined" lines on profiles.
pub fn format_month_year(date: DateTime<Utc>) -> String {
    date.format("%b %Y").to_string()
}
