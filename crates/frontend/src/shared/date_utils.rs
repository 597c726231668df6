/// Date formatting for tables and cards
///
/// Inputs are ISO strings; anything that does not parse is shown as is.
use chrono::{NaiveDate, NaiveDateTime};

/// Format an ISO date as "15 Mar 2025"
/// Example: "2025-03-15" or "2025-03-15T14:02:26Z" -> "15 Mar 2025"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d %b %Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Format an ISO datetime as "15 Mar 2025, 14:02"
/// Example: "2025-03-15T14:02:26.123Z" -> "15 Mar 2025, 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    let trimmed = datetime_str.trim_end_matches('Z');
    let trimmed = trimmed.split('.').next().unwrap_or(trimmed);
    match NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        Ok(dt) => dt.format("%d %b %Y, %H:%M").to_string(),
        Err(_) => datetime_str.to_string(),
    }
}
