//! Strings shown in the header for the current session.

use chrono::{DateTime, Duration, TimeZone};
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionHeader {
    /// Time since login, e.g. `2h 30m`.
    pub elapsed: String,
    /// Login time on a 12-hour clock, e.g. `09:05 AM`.
    pub login_time: String,
}

impl SessionHeader {
    /// Derive both strings. Nothing is cached: call it on every render.
    pub fn derive<Tz>(started_at: &DateTime<Tz>, now: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            elapsed: format_elapsed(now.naive_utc() - started_at.naive_utc()),
            login_time: format_login_time(started_at),
        }
    }
}

/// `{H}h {M}m` with floor division. Negative spans show as `0h 0m`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let minutes = elapsed.num_minutes().max(0);
    format!("{}h {}m", minutes / 60, minutes % 60)
}

pub fn format_login_time<Tz>(started_at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    started_at.format("%I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, h, m, s).unwrap()
    }

    #[test]
    fn elapsed_two_and_a_half_hours() {
        let header = SessionHeader::derive(&at(10, 0, 0), &at(12, 30, 0));
        assert_eq!(header.elapsed, "2h 30m");
    }

    #[test]
    fn elapsed_floors_partial_minutes() {
        let header = SessionHeader::derive(&at(10, 0, 0), &at(10, 59, 59));
        assert_eq!(header.elapsed, "0h 59m");
        let header = SessionHeader::derive(&at(10, 0, 0), &at(23, 0, 0));
        assert_eq!(header.elapsed, "13h 0m");
    }

    #[test]
    fn elapsed_before_start_is_zero() {
        let header = SessionHeader::derive(&at(12, 0, 0), &at(11, 0, 0));
        assert_eq!(header.elapsed, "0h 0m");
    }

    #[test]
    fn login_time_twelve_hour_clock() {
        assert_eq!(format_login_time(&at(9, 5, 0)), "09:05 AM");
        assert_eq!(format_login_time(&at(0, 15, 0)), "12:15 AM");
        assert_eq!(format_login_time(&at(13, 45, 0)), "01:45 PM");
    }

    #[test]
    fn login_time_uses_the_given_offset() {
        let tz = FixedOffset::east_opt(3 * 3600).unwrap();
        let started = at(6, 5, 0).with_timezone(&tz);
        let now = at(8, 10, 0).with_timezone(&tz);
        let header = SessionHeader::derive(&started, &now);
        assert_eq!(header.login_time, "09:05 AM");
        assert_eq!(header.elapsed, "2h 5m");
    }
}
