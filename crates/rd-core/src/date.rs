//! Lenient date input.
//!
//! Referral logs are typed by hand or pasted from spreadsheets, so the
//! parser accepts the handful of shapes those sources produce. Relative
//! keywords resolve against an injected clock in UTC.

use chrono::{DateTime, Days, NaiveDate};
use thiserror::Error;

use crate::ports::ClockPort;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    #[error("empty date input")]
    Empty,
    #[error("unrecognized date: {0:?}")]
    Unrecognized(String),
}

const DAY_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d.%m.%Y",
    "%B %d, %Y",
    "%b %d, %Y",
];

pub fn parse_flexible_date(input: &str, clock: &dyn ClockPort) -> Result<NaiveDate, DateParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DateParseError::Empty);
    }

    let today = clock.now_utc().date_naive();
    match trimmed.to_ascii_lowercase().as_str() {
        "today" => return Ok(today),
        "yesterday" => {
            return today
                .checked_sub_days(Days::new(1))
                .ok_or_else(|| DateParseError::Unrecognized(trimmed.to_string()))
        }
        _ => {}
    }

    for format in DAY_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }

    // Month only: first day of the month.
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d") {
        return Ok(date);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.naive_utc().date());
    }

    Err(DateParseError::Unrecognized(trimmed.to_string()))
}

/// `Mar 5, 2024`
pub fn format_short(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
