//! Utilities for calendar dates
//!
//! All boundaries are computed from independent `NaiveDate` values, inclusive on both ends.

use chrono::{Datelike, Duration, Local, NaiveDate};

/// Today's date in the browser's local time zone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse "YYYY-MM-DD" (a trailing time part like "T14:02:26Z" is ignored)
pub fn parse_iso_date(date_str: &str) -> Option<NaiveDate> {
    let date_part = date_str.trim().split('T').next()?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Format date as "YYYY-MM-DD"
pub fn format_ymd(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format ISO date string to DD.MM.YYYY for display
/// Example: "2024-03-15" -> "15.03.2024"; unparseable input is returned unchanged
pub fn format_date(date_str: &str) -> String {
    match parse_iso_date(date_str) {
        Some(date) => date.format("%d.%m.%Y").to_string(),
        None => date_str.to_string(),
    }
}

/// First and last day of the month containing `date`
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = date.with_day(1).unwrap_or(date);
    let next_month_first = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    };
    let last = next_month_first
        .map(|d| d - Duration::days(1))
        .unwrap_or(date);
    (first, last)
}

/// Monday and Sunday of the week containing `date`
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let offset = date.weekday().num_days_from_monday() as i64;
    let monday = date - Duration::days(offset);
    let sunday = monday + Duration::days(6);
    (monday, sunday)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("2024-03-15"), Some(ymd(2024, 3, 15)));
        assert_eq!(parse_iso_date("2024-03-15T14:02:26Z"), Some(ymd(2024, 3, 15)));
        assert_eq!(parse_iso_date("2024-02-30"), None);
        assert_eq!(parse_iso_date("invalid"), None);
        assert_eq!(parse_iso_date(""), None);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_ymd(ymd(2024, 1, 5)), "2024-01-05");
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(month_bounds(ymd(2024, 2, 14)), (ymd(2024, 2, 1), ymd(2024, 2, 29)));
        assert_eq!(month_bounds(ymd(2023, 12, 31)), (ymd(2023, 12, 1), ymd(2023, 12, 31)));
        assert_eq!(month_bounds(ymd(2024, 4, 1)), (ymd(2024, 4, 1), ymd(2024, 4, 30)));
    }

    #[test]
    fn test_week_bounds_monday_start() {
        // 2024-05-15 is a Wednesday
        assert_eq!(week_bounds(ymd(2024, 5, 15)), (ymd(2024, 5, 13), ymd(2024, 5, 19)));
        // Sunday belongs to the week that started on the previous Monday
        assert_eq!(week_bounds(ymd(2024, 5, 19)), (ymd(2024, 5, 13), ymd(2024, 5, 19)));
        assert_eq!(week_bounds(ymd(2024, 5, 13)), (ymd(2024, 5, 13), ymd(2024, 5, 19)));
    }

    #[test]
    fn test_week_bounds_across_month_and_year() {
        // 2025-01-01 is a Wednesday
        assert_eq!(week_bounds(ymd(2025, 1, 1)), (ymd(2024, 12, 30), ymd(2025, 1, 5)));
    }
}
