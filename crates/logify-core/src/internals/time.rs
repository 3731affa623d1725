//! Date and time rendering plus an injectable clock

use chrono::{Datelike, Local, NaiveDateTime, Timelike};
use std::fmt::Debug;

/// Source of the current local time
pub trait Clock: Send + Sync + Debug {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in the process's local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at a given instant, for deterministic output
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Render a date as `YYYY<delimiter>MM<delimiter>DD`, zero padded.
///
/// The file sink uses an empty delimiter (`20240305`), timestamps use `-`.
pub fn format_date(delimiter: &str, at: &NaiveDateTime) -> String {
    format!(
        "{:04}{d}{:02}{d}{:02}",
        at.year(),
        at.month(),
        at.day(),
        d = delimiter
    )
}

/// Render a time of day as `HH:MM:SS`, zero padded.
pub fn format_time(at: &NaiveDateTime) -> String {
    format!("{:02}:{:02}:{:02}", at.hour(), at.minute(), at.second())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_format_date_zero_pads() {
        let t = at(2024, 3, 5, 0, 0, 0);
        assert_eq!(format_date("-", &t), "2024-03-05");
        assert_eq!(format_date("", &t), "20240305");
        assert_eq!(format_date("/", &t), "2024/03/05");
    }

    #[test]
    fn test_format_time_zero_pads() {
        assert_eq!(format_time(&at(2024, 1, 1, 7, 4, 9)), "07:04:09");
        assert_eq!(format_time(&at(2024, 1, 1, 23, 59, 59)), "23:59:59");
    }

    #[test]
    fn test_fixed_clock_is_stable() {
        let t = at(2024, 12, 31, 12, 0, 0);
        let clock = FixedClock(t);
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now(), t);
    }
}
