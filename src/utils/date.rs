//! UTC datetime utilities without timezone dependencies.
//!
//! Provides a lightweight `DateTimeUtc` struct and a system-clock reader,
//! used for the copyright-year derivation at config resolve time.
//!
//! # Examples
//!
//! ```ignore
//! let year = utc_now().year;
//! let dt = DateTimeUtc::from_unix_seconds(1_704_067_200);
//! assert_eq!((dt.year, dt.month, dt.day), (2024, 1, 1));
//! ```

use anyhow::{Result, bail};
use std::time::SystemTime;

/// UTC datetime without timezone complexity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

/// Read the system clock once and return the current UTC datetime.
///
/// A clock before the Unix epoch collapses to the epoch itself rather
/// than failing: the caller only needs a plausible year.
pub fn utc_now() -> DateTimeUtc {
    let secs = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    DateTimeUtc::from_unix_seconds(secs)
}

impl DateTimeUtc {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Convert seconds since the Unix epoch to a UTC civil datetime.
    #[allow(clippy::cast_possible_truncation)] // Time-of-day components fit u8
    pub fn from_unix_seconds(secs: u64) -> Self {
        let days = (secs / 86_400) as i64;
        let rem = secs % 86_400;
        let (year, month, day) = civil_from_days(days);
        Self {
            year,
            month,
            day,
            hour: (rem / 3_600) as u8,
            minute: ((rem / 60) % 60) as u8,
            second: (rem % 60) as u8,
        }
    }

    #[allow(clippy::trivially_copy_pass_by_ref)] // Method style is more idiomatic
    pub fn validate(&self) -> Result<()> {
        let Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        } = *self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }

        let max_days = Self::days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
        }
        if hour > 23 {
            bail!("hour is invalid: {hour}");
        }
        if minute > 59 {
            bail!("minute is invalid: {minute}");
        }
        if second > 59 {
            bail!("second is invalid: {second}");
        }

        Ok(())
    }

    #[inline]
    #[allow(clippy::manual_is_multiple_of)] // Manual impl for const fn
    const fn is_leap_year(year: u16) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    #[inline]
    const fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }
}

/// Days since 1970-01-01 to (year, month, day) in the proleptic Gregorian
/// calendar. Neri/Hinnant civil-from-days algorithm.
#[allow(clippy::cast_possible_truncation)] // Components validated by range
#[allow(clippy::cast_sign_loss)] // Year is positive for any post-epoch input
const fn civil_from_days(z: i64) -> (u16, u8, u8) {
    let z = z + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097); // [0, 146096]
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365; // [0, 399]
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let month = if mp < 10 { (mp + 3) as u8 } else { (mp - 9) as u8 };
    let mut year = yoe + era * 400;
    if month <= 2 {
        year += 1;
    }
    (year as u16, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_unix_seconds_epoch() {
        let dt = DateTimeUtc::from_unix_seconds(0);
        assert_eq!(dt, DateTimeUtc::new(1970, 1, 1, 0, 0, 0));
    }

    #[test]
    fn test_from_unix_seconds_known_dates() {
        // 2024-01-01T00:00:00Z
        let dt = DateTimeUtc::from_unix_seconds(1_704_067_200);
        assert_eq!((dt.year, dt.month, dt.day), (2024, 1, 1));

        // 2000-02-29T00:00:00Z (leap day)
        let dt = DateTimeUtc::from_unix_seconds(951_782_400);
        assert_eq!((dt.year, dt.month, dt.day), (2000, 2, 29));

        // End of a year: 2023-12-31T23:59:59Z
        let dt = DateTimeUtc::from_unix_seconds(1_704_067_199);
        assert_eq!((dt.year, dt.month, dt.day), (2023, 12, 31));
        assert_eq!((dt.hour, dt.minute, dt.second), (23, 59, 59));
    }

    #[test]
    fn test_from_unix_seconds_round_trips_validate() {
        for secs in [0u64, 86_399, 951_782_400, 1_704_067_200, 4_102_444_800] {
            assert!(DateTimeUtc::from_unix_seconds(secs).validate().is_ok());
        }
    }

    #[test]
    fn test_utc_now_is_plausible() {
        let dt = utc_now();
        assert!(dt.year >= 2024);
        assert!(dt.validate().is_ok());
    }

    #[test]
    fn test_validate_invalid_components() {
        assert!(DateTimeUtc::new(2024, 0, 15, 12, 0, 0).validate().is_err());
        assert!(DateTimeUtc::new(2024, 13, 15, 12, 0, 0).validate().is_err());
        assert!(DateTimeUtc::new(2024, 6, 31, 12, 0, 0).validate().is_err());
        assert!(DateTimeUtc::new(2024, 6, 15, 24, 0, 0).validate().is_err());
        assert!(DateTimeUtc::new(2024, 6, 15, 12, 60, 0).validate().is_err());
        assert!(DateTimeUtc::new(2024, 6, 15, 12, 30, 60).validate().is_err());
    }

    #[test]
    fn test_validate_leap_year() {
        assert!(DateTimeUtc::new(2024, 2, 29, 12, 0, 0).validate().is_ok());
        assert!(DateTimeUtc::new(2000, 2, 29, 12, 0, 0).validate().is_ok()); // divisible by 400
        assert!(DateTimeUtc::new(2023, 2, 29, 12, 0, 0).validate().is_err());
        assert!(DateTimeUtc::new(1900, 2, 29, 12, 0, 0).validate().is_err()); // divisible by 100 but not 400
    }
}
