//! Session Countdown
//!
//! Pure time-remaining computation for a session's end timestamp. The
//! display side (per-row 60s interval, cancellation) lives in
//! `components::countdown_badge`; everything here is a function of
//! (now, end timestamp) only.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Countdown state for one session row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    Remaining { hours: i64, minutes: i64 },
    /// Remaining time reached zero; no further update changes this.
    Expired,
    /// The timestamp failed to parse; terminal, no timer is scheduled.
    Invalid,
}

/// Accepts RFC 3339 or a naive `YYYY-MM-DDTHH:MM:SS` (read as UTC).
pub fn parse_end(end_iso: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(end_iso) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(end_iso, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}

impl Countdown {
    pub fn evaluate(now: DateTime<Utc>, end_iso: &str) -> Countdown {
        let Some(end) = parse_end(end_iso) else {
            return Countdown::Invalid;
        };
        let remaining_ms = (end - now).num_milliseconds();
        if remaining_ms <= 0 {
            return Countdown::Expired;
        }
        let total_minutes = remaining_ms / 60_000;
        Countdown::Remaining {
            hours: total_minutes / 60,
            minutes: total_minutes % 60,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Countdown::Remaining { hours, minutes } if *hours > 0 => {
                format!("{hours}h {minutes}m left")
            }
            Countdown::Remaining { minutes, .. } => format!("{minutes}m left"),
            Countdown::Expired => "Expired".to_string(),
            Countdown::Invalid => "Invalid time".to_string(),
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Countdown::Remaining { .. } => "bg-primary",
            Countdown::Expired => "bg-danger",
            Countdown::Invalid => "bg-warning",
        }
    }

    /// Terminal states never schedule another update.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Countdown::Expired | Countdown::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(iso: &str) -> DateTime<Utc> {
        parse_end(iso).unwrap()
    }

    #[test]
    fn ninety_minutes_ahead_reads_1h_30m() {
        let now = at("2026-08-30T10:00:00");
        let state = Countdown::evaluate(now, "2026-08-30T11:30:00");
        assert_eq!(
            state,
            Countdown::Remaining {
                hours: 1,
                minutes: 30
            }
        );
        assert_eq!(state.label(), "1h 30m left");
    }

    #[test]
    fn under_an_hour_omits_hours() {
        let now = at("2026-08-30T10:00:00");
        let state = Countdown::evaluate(now, "2026-08-30T10:45:30");
        assert_eq!(state.label(), "45m left");
    }

    #[test]
    fn past_end_is_expired() {
        let now = at("2026-08-30T12:00:00");
        let state = Countdown::evaluate(now, "2026-08-30T11:30:00");
        assert_eq!(state, Countdown::Expired);
        assert_eq!(state.label(), "Expired");
        assert!(state.is_terminal());
    }

    #[test]
    fn exactly_zero_remaining_is_expired() {
        let now = at("2026-08-30T11:30:00");
        assert_eq!(Countdown::evaluate(now, "2026-08-30T11:30:00"), Countdown::Expired);
    }

    #[test]
    fn garbage_timestamp_is_invalid_and_terminal() {
        let now = Utc.with_ymd_and_hms(2026, 8, 30, 10, 0, 0).unwrap();
        let state = Countdown::evaluate(now, "not a timestamp");
        assert_eq!(state, Countdown::Invalid);
        assert_eq!(state.label(), "Invalid time");
        assert!(state.is_terminal());
    }

    #[test]
    fn initial_render_is_deterministic_in_now() {
        let now = at("2026-08-30T10:00:00");
        let end = "2026-08-30T10:05:00";
        assert_eq!(
            Countdown::evaluate(now, end),
            Countdown::evaluate(now, end)
        );
    }

    #[test]
    fn rfc3339_offsets_are_normalized_to_utc() {
        let now = at("2026-08-30T10:00:00");
        // 12:00 at +02:00 is 10:00 UTC.
        assert_eq!(
            Countdown::evaluate(now, "2026-08-30T12:00:00+02:00"),
            Countdown::Expired
        );
    }
}
