use chrono::{DateTime, Utc};

#[must_use]
pub fn format_date(value: Option<DateTime<Utc>>) -> String {
    value.map_or_else(|| "Unknown".to_owned(), |at| at.format("%Y-%m-%d").to_string())
}
