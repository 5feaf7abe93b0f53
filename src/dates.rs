use chrono::{Duration, Local, NaiveDate};

const DAY_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn today_string() -> String {
    format_day(today())
}

pub fn format_day(date: NaiveDate) -> String {
    date.format(DAY_FORMAT).to_string()
}

pub fn parse_day(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DAY_FORMAT).ok()
}

/// Moves `value` by `days` calendar days. An empty or unreadable value is
/// taken to mean `today`.
pub fn shift_day(value: &str, days: i64, today: NaiveDate) -> String {
    let base = parse_day(value).unwrap_or(today);
    format_day(base + Duration::days(days))
}

pub fn requested_day(value: &str, today: NaiveDate) -> String {
    let value = value.trim();
    if value.is_empty() {
        format_day(today)
    } else {
        value.to_string()
    }
}
