//! Display Formatting
//!
//! Small date/time helpers for list headers and badges. Formatting falls
//! back to the raw wire string when parsing fails; nothing here is allowed
//! to panic on backend data.

use chrono::{Local, NaiveDate};

/// Current local date as `YYYY-MM-DD`, the key used for "today" filters and
/// date form defaults.
pub fn today_string() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// `"Sunday, August 30, 2026"` style header for session/log groups.
pub fn long_date(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%A, %B %-d, %Y").to_string())
        .unwrap_or_else(|_| date.to_string())
}

/// `"Aug 30, 2026"` style for deadlines and footers.
pub fn short_date(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|_| date.to_string())
}

/// Times arrive as `HH:MM` or `HH:MM:SS`; only hours and minutes are shown.
pub fn short_time(time: &str) -> &str {
    time.get(..5).unwrap_or(time)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_date_spells_out_the_weekday() {
        assert_eq!(long_date("2026-08-30"), "Sunday, August 30, 2026");
    }

    #[test]
    fn unparsable_dates_pass_through() {
        assert_eq!(long_date("soon"), "soon");
        assert_eq!(short_date(""), "");
    }

    #[test]
    fn short_time_drops_seconds() {
        assert_eq!(short_time("09:30:00"), "09:30");
        assert_eq!(short_time("09:30"), "09:30");
        assert_eq!(short_time("9:3"), "9:3");
    }
}
