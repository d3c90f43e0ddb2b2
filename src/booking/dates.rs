//! Calendar dates for the booking window
//!
//! Proleptic Gregorian day arithmetic (days since 1970-01-01), enough for
//! the `<input type="date">` bounds and the "not in the past" rule.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::BOOKING_WINDOW_DAYS;

const MS_PER_DAY: f64 = 86_400_000.0;

/// A day on the calendar, ordered chronologically
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

impl CalendarDate {
    /// `None` unless the date exists
    pub fn new(year: i32, month: u8, day: u8) -> Option<Self> {
        if day == 0 || day > days_in_month(year, month) {
            return None;
        }
        Some(Self { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    /// Parse the `YYYY-MM-DD` form a date input submits
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if !s.is_ascii() || bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return None;
        }
        let digits = |range: std::ops::Range<usize>| -> Option<u32> {
            let part = &s[range];
            if part.bytes().all(|b| b.is_ascii_digit()) {
                part.parse().ok()
            } else {
                None
            }
        };
        let year = digits(0..4)? as i32;
        let month = digits(5..7)? as u8;
        let day = digits(8..10)? as u8;
        Self::new(year, month, day)
    }

    /// Days since 1970-01-01
    pub fn to_days(&self) -> i64 {
        let month = i64::from(self.month);
        let day = i64::from(self.day);
        let year = i64::from(self.year) - i64::from(month <= 2);
        let era = year.div_euclid(400);
        let yoe = year.rem_euclid(400);
        let mp = (month + 9) % 12; // March = 0
        let doy = (153 * mp + 2) / 5 + day - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
        era * 146_097 + doe - 719_468
    }

    /// Inverse of `to_days`
    pub fn from_days(days: i64) -> Self {
        let z = days + 719_468;
        let era = z.div_euclid(146_097);
        let doe = z.rem_euclid(146_097);
        let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
        let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
        let year = (yoe + era * 400 + i64::from(month <= 2)) as i32;
        Self { year, month, day }
    }

    pub fn add_days(self, days: i64) -> Self {
        Self::from_days(self.to_days() + days)
    }

    /// UTC calendar day of a Unix timestamp in milliseconds
    pub fn from_unix_millis(ms: f64) -> Self {
        Self::from_days((ms / MS_PER_DAY).floor() as i64)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Earliest and latest bookable days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingWindow {
    pub min: CalendarDate,
    pub max: CalendarDate,
}

impl BookingWindow {
    /// Today through today + `BOOKING_WINDOW_DAYS`
    pub fn starting(today: CalendarDate) -> Self {
        Self {
            min: today,
            max: today.add_days(BOOKING_WINDOW_DAYS),
        }
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.min <= date && date <= self.max
    }
}

/// ISO-8601 UTC timestamp with milliseconds, e.g. `2026-10-16T09:05:00.250Z`
pub fn iso_timestamp(unix_ms: f64) -> String {
    let total_ms = unix_ms.floor() as i64;
    let date = CalendarDate::from_days(total_ms.div_euclid(86_400_000));
    let ms_of_day = total_ms.rem_euclid(86_400_000);
    let hours = ms_of_day / 3_600_000;
    let minutes = ms_of_day / 60_000 % 60;
    let seconds = ms_of_day / 1000 % 60;
    let millis = ms_of_day % 1000;
    format!(
        "{}T{:02}:{:02}:{:02}.{:03}Z",
        date, hours, minutes, seconds, millis
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn test_epoch_round_trip() {
        assert_eq!(date(1970, 1, 1).to_days(), 0);
        assert_eq!(CalendarDate::from_days(0), date(1970, 1, 1));
        assert_eq!(date(2000, 3, 1).to_days(), 11_017);
        assert_eq!(CalendarDate::from_days(-1), date(1969, 12, 31));
    }

    #[test]
    fn test_parse() {
        assert_eq!(CalendarDate::parse("2026-10-16"), Some(date(2026, 10, 16)));
        assert_eq!(CalendarDate::parse("2024-02-29"), Some(date(2024, 2, 29)));
        assert_eq!(CalendarDate::parse("2023-02-29"), None);
        assert_eq!(CalendarDate::parse("2026-13-01"), None);
        assert_eq!(CalendarDate::parse("2026-1-01"), None);
        assert_eq!(CalendarDate::parse("2026/10/16"), None);
        assert_eq!(CalendarDate::parse("+026-10-16"), None);
        assert_eq!(CalendarDate::parse(""), None);
        assert_eq!(CalendarDate::parse("2026-1é-1"), None);
    }

    #[test]
    fn test_add_days_crosses_boundaries() {
        assert_eq!(date(2026, 10, 16).add_days(30), date(2026, 11, 15));
        assert_eq!(date(2026, 12, 15).add_days(30), date(2027, 1, 14));
        assert_eq!(date(2024, 2, 10).add_days(30), date(2024, 3, 11));
        assert_eq!(date(2023, 2, 10).add_days(30), date(2023, 3, 12));
    }

    #[test]
    fn test_ordering_is_chronological() {
        assert!(date(2026, 10, 15) < date(2026, 10, 16));
        assert!(date(2025, 12, 31) < date(2026, 1, 1));
        assert!(date(2026, 2, 1) > date(2026, 1, 31));
    }

    #[test]
    fn test_booking_window() {
        let window = BookingWindow::starting(date(2026, 10, 16));
        assert_eq!(window.min.to_string(), "2026-10-16");
        assert_eq!(window.max.to_string(), "2026-11-15");
        assert!(window.contains(date(2026, 11, 15)));
        assert!(!window.contains(date(2026, 11, 16)));
        assert!(!window.contains(date(2026, 10, 15)));
    }

    #[test]
    fn test_iso_timestamp() {
        assert_eq!(iso_timestamp(0.0), "1970-01-01T00:00:00.000Z");
        // 2026-10-16T09:05:00.250Z
        let ms = (date(2026, 10, 16).to_days() * 86_400_000 + 9 * 3_600_000 + 5 * 60_000 + 250) as f64;
        assert_eq!(iso_timestamp(ms), "2026-10-16T09:05:00.250Z");
        assert_eq!(CalendarDate::from_unix_millis(ms), date(2026, 10, 16));
    }
}
