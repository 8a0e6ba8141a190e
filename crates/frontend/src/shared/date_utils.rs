/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{Datelike, NaiveDate};

/// Today's date in the browser's local time zone
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

/// Format ISO datetime string to MM/DD/YYYY HH:MM format
/// Example: "2024-03-15T14:02:26.123Z" -> "03/15/2024 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        if let Some((year, rest)) = date_part.split_once('-') {
            if let Some((month, day)) = rest.split_once('-') {
                let hhmm: String = time_part.chars().take(5).collect();
                return format!("{}/{}/{} {}", month, day, year, hhmm);
            }
        }
    }
    datetime_str.to_string()
}

/// Example: 2024-03-15 -> "Mar 15, 2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn format_optional_date(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_else(|| "-".to_string())
}

/// Value for `<input type="date">`
pub fn to_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

pub fn parse_input_value(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// "today", "tomorrow", "in 5 days", "3 days ago"
pub fn relative_days(days: i64) -> String {
    match days {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        -1 => "yesterday".to_string(),
        d if d > 1 => format!("in {} days", d),
        d => format!("{} days ago", -d),
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    date.weekday().number_from_monday() >= 6
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "03/15/2024 14:02");
        assert_eq!(format_datetime("2024-12-31T23:59:59Z"), "12/31/2024 23:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(d(2024, 3, 5)), "Mar 5, 2024");
        assert_eq!(format_optional_date(None), "-");
    }

    #[test]
    fn test_input_value() {
        assert_eq!(to_input_value(Some(d(2024, 1, 9))), "2024-01-09");
        assert_eq!(parse_input_value("2024-01-09"), Some(d(2024, 1, 9)));
        assert_eq!(parse_input_value(""), None);
    }

    #[test]
    fn test_relative_days() {
        assert_eq!(relative_days(0), "today");
        assert_eq!(relative_days(5), "in 5 days");
        assert_eq!(relative_days(-3), "3 days ago");
        assert!(is_weekend(d(2024, 3, 16)));
        assert!(!is_weekend(d(2024, 3, 15)));
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
    }
}
