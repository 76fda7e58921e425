//! Time-related calculations for sun positioning.
//!
//! The position algorithm counts days from the J2000.0 epoch with a short civil calendar
//! formula instead of a full Julian date conversion. The formula is exact only between
//! 1900-03-01 and 2100-02-28; outside that window results degrade silently.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::suboptimal_flops)]

use crate::math::floor;
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::{Datelike, TimeZone, Timelike};

/// Days per Julian century
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Offset that places day 0 of the civil day count at the J2000.0 epoch.
const J2000_DAY_OFFSET: f64 = 730_531.5;

/// First UTC date (year, month, day) for which the day count is exact.
pub const VALIDITY_WINDOW_START: (i32, u32, u32) = (1900, 3, 1);

/// Last UTC date (year, month, day) for which the day count is exact.
pub const VALIDITY_WINDOW_END: (i32, u32, u32) = (2100, 2, 28);

/// A UTC calendar date plus the hours elapsed since midnight.
///
/// This is the only notion of time the position algorithm needs. Build one from
/// components with [`UtcInstant::from_utc`] or, with the `chrono` feature, from any
/// timezone-aware `DateTime` with [`UtcInstant::from_datetime`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcInstant {
    year: i32,
    month: u32,
    day: u32,
    hours: f64,
}

impl UtcInstant {
    /// Creates an instant from UTC date/time components.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if any component is outside its range (month 1-12, day
    /// valid for the month, hour 0-23, minute 0-59, second 0-59.999).
    ///
    /// # Example
    /// ```
    /// # use entropedia_sun::time::UtcInstant;
    /// let instant = UtcInstant::from_utc(2024, 3, 20, 18, 30, 0.0).unwrap();
    /// assert_eq!(instant.hours_since_midnight(), 18.5);
    /// ```
    pub fn from_utc(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_datetime("month must be between 1 and 12"));
        }
        if day < 1 || day > days_in_month(year, month) {
            return Err(Error::invalid_datetime("day is out of range for month"));
        }
        if hour > 23 {
            return Err(Error::invalid_datetime("hour must be between 0 and 23"));
        }
        if minute > 59 {
            return Err(Error::invalid_datetime("minute must be between 0 and 59"));
        }
        if !(0.0..60.0).contains(&second) {
            return Err(Error::invalid_datetime(
                "second must be between 0 and 59.999...",
            ));
        }

        Ok(Self {
            year,
            month,
            day,
            hours: hours_from_components(hour, minute, second),
        })
    }

    /// Creates an instant from a timezone-aware chrono `DateTime`, converting it to UTC.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn from_datetime<Tz: TimeZone>(datetime: &chrono::DateTime<Tz>) -> Self {
        let utc = datetime.with_timezone(&chrono::Utc);
        Self {
            year: utc.year(),
            month: utc.month(),
            day: utc.day(),
            hours: hours_from_components(
                utc.hour(),
                utc.minute(),
                f64::from(utc.second()) + f64::from(utc.nanosecond()) / 1e9,
            ),
        }
    }

    /// Gets the UTC year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Gets the UTC month (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Gets the UTC day of month.
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Hours elapsed since UTC midnight, including fractions.
    #[must_use]
    pub const fn hours_since_midnight(&self) -> f64 {
        self.hours
    }

    /// Days from J2000.0 to UTC midnight of this date.
    ///
    /// `367*Y - ⌊7/4 * (Y + ⌊(M+9)/12⌋)⌋ + ⌊275*M/9⌋ + D - 730531.5`
    ///
    /// # Example
    /// ```
    /// # use entropedia_sun::time::UtcInstant;
    /// let instant = UtcInstant::from_utc(2000, 1, 1, 12, 0, 0.0).unwrap();
    /// assert_eq!(instant.days_since_j2000(), -0.5);
    /// ```
    #[must_use]
    pub fn days_since_j2000(&self) -> f64 {
        let y = f64::from(self.year);
        let m = f64::from(self.month);
        367.0 * y - floor(7.0 / 4.0 * (y + floor((m + 9.0) / 12.0))) + floor(275.0 * m / 9.0)
            + f64::from(self.day)
            - J2000_DAY_OFFSET
    }

    /// Fractional days from J2000.0 to this instant.
    #[must_use]
    pub fn julian_date(&self) -> f64 {
        self.days_since_j2000() + self.hours / 24.0
    }

    /// Julian centuries from J2000.0 to this instant.
    #[must_use]
    pub fn julian_centuries(&self) -> f64 {
        self.julian_date() / DAYS_PER_CENTURY
    }

    /// Checks whether the date lies within 1900-03-01 ..= 2100-02-28.
    ///
    /// Dates outside the window still produce positions, just increasingly wrong ones.
    #[must_use]
    pub fn is_within_validity_window(&self) -> bool {
        let date = (self.year, self.month, self.day);
        (VALIDITY_WINDOW_START..=VALIDITY_WINDOW_END).contains(&date)
    }
}

/// Zero-padded two-digit labels for hour and minute pickers.
///
/// Produces `amount` labels counting up from `offset`; values of 100 or more keep all
/// their digits.
///
/// # Example
/// ```
/// # use entropedia_sun::time::two_digit_labels;
/// assert_eq!(two_digit_labels(3, 0), ["00", "01", "02"]);
/// assert_eq!(two_digit_labels(2, 9), ["09", "10"]);
/// ```
#[cfg(feature = "std")]
#[must_use]
pub fn two_digit_labels(amount: u32, offset: u32) -> Vec<String> {
    (0..amount).map(|i| format!("{:02}", i + offset)).collect()
}

/// Julian centuries for a fractional J2000 day count.
pub(crate) fn centuries(days: f64) -> f64 {
    days / DAYS_PER_CENTURY
}

fn hours_from_components(hour: u32, minute: u32, second: f64) -> f64 {
    f64::from(hour) + f64::from(minute) / 60.0 + second / 3600.0
}

const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}
