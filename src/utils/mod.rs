//! Presentation helpers for timestamps and card text.

use time::{
    format_description::well_known::Rfc3339, macros::format_description, OffsetDateTime,
    UtcOffset,
};

/// `2024-01-15T06:30:00.000Z`: UTC with millisecond precision.
pub fn iso_timestamp(at: OffsetDateTime) -> String {
    let utc = at.to_offset(UtcOffset::UTC);
    utc.format(format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
    ))
    .unwrap_or_else(|_| utc.to_string())
}

/// Parse an ISO-8601 timestamp as stored on a post.
pub fn parse_timestamp(value: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(value, &Rfc3339).ok()
}

/// Long-form date, e.g. `January 15, 2024`.
pub fn format_date(value: &str) -> Option<String> {
    let at = parse_timestamp(value)?;
    Some(format!("{} {}, {}", at.month(), at.day(), at.year()))
}

/// Coarse relative time between `value` and `now`.
pub fn time_ago(value: &str, now: OffsetDateTime) -> Option<String> {
    let elapsed = now - parse_timestamp(value)?;

    let days = elapsed.whole_days();
    let hours = elapsed.whole_hours();
    let minutes = elapsed.whole_minutes();

    let ago = if days > 0 {
        plural(days, "day")
    } else if hours > 0 {
        plural(hours, "hour")
    } else if minutes > 0 {
        plural(minutes, "minute")
    } else {
        "Just now".to_string()
    };
    Some(ago)
}

fn plural(count: i64, unit: &str) -> String {
    if count > 1 {
        format!("{count} {unit}s ago")
    } else {
        format!("{count} {unit} ago")
    }
}

/// Cut `text` to `max_chars` characters, appending `...` when shortened.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}...", text[..cut].trim()),
    }
}
