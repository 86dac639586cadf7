use chrono::{DateTime, Local, Utc};

/// Placeholder shown wherever a value has never been recorded.
pub const EMPTY_LABEL: &str = "—";

#[must_use]
pub fn format_local(value: DateTime<Utc>) -> String {
    value
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

#[must_use]
pub fn format_optional(value: Option<DateTime<Utc>>) -> String {
    value.map_or_else(|| EMPTY_LABEL.to_string(), format_local)
}
