//! Date/time string helpers
//!
//! The backend exchanges dates as `YYYY-MM-DD` and times as `HH:MM`
//! plain strings; these helpers keep that wire format while validating
//! through chrono.

use chrono::{Local, NaiveDate, NaiveTime};

/// Today's date in the backend's `YYYY-MM-DD` wire format.
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Whether `s` is a valid `YYYY-MM-DD` calendar date.
pub fn is_valid_date(s: &str) -> bool {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").is_ok()
}

/// Whether `s` is a valid `HH:MM` time of day.
pub fn is_valid_hhmm(s: &str) -> bool {
    NaiveTime::parse_from_str(s.trim(), "%H:%M").is_ok()
}
