use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// 儀表板標頭用的日期時間字串，例如 `Mon, Jan 01, 2024, 14:30 UTC`
///
/// `%Z` only has a name for UTC. Other zones render as a numeric offset
/// (`+05:30`, `-05:00`), never an abbreviation such as `EST`.
pub fn format_date_time<Tz>(date: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    date.format("%a, %b %d, %Y, %H:%M %Z").to_string()
}
