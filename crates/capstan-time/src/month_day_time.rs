// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Month-Day-Time
//!
//! A yearly recurring instant. Construction validates every field; February
//! accepts day 29, which then only resolves in leap years.
//!
//! ## Resolution
//!
//! - [`MonthDayTime::at_year`] pins the instant to one year.
//! - [`MonthDayTime::next_after`] and [`MonthDayTime::previous_before`]
//!   find the closest occurrence strictly after or before a given
//!   date-time, skipping years in which February 29 does not exist.
//!
//! ## Text Form
//!
//! `Display` and `FromStr` use `--MM-DDTHH:MM:SS`, the ISO 8601 shape for a
//! date without year followed by a local time.

use crate::error::TimeError;
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Days per month, with February at its leap-year maximum.
const MAX_DAYS: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Longest gap between two consecutive February 29ths, in years
/// (e.g. 2096 to 2104).
const MAX_LEAP_GAP: i32 = 8;

/// A month, day and time of day without year or time zone.
///
/// Ordering is chronological within a year.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct MonthDayTime {
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
}

impl MonthDayTime {
    /// Creates a new `MonthDayTime`.
    ///
    /// # Errors
    ///
    /// - [`TimeError::InvalidMonth`] if `month` is outside `1..=12`.
    /// - [`TimeError::InvalidDay`] if `day` does not exist in `month`.
    /// - [`TimeError::InvalidTime`] if `hour > 23`, `minute > 59` or
    ///   `second > 59`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use capstan_time::{error::TimeError, month_day_time::MonthDayTime};
    /// assert!(MonthDayTime::new(2, 29, 12, 0, 0).is_ok());
    /// assert_eq!(
    ///     MonthDayTime::new(4, 31, 0, 0, 0),
    ///     Err(TimeError::InvalidDay { month: 4, day: 31 })
    /// );
    /// ```
    pub fn new(
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidMonth(month));
        }
        if day == 0 || day > MAX_DAYS[(month - 1) as usize] {
            return Err(TimeError::InvalidDay { month, day });
        }
        if hour > 23 || minute > 59 || second > 59 {
            return Err(TimeError::InvalidTime {
                hour,
                minute,
                second,
            });
        }
        Ok(Self {
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Takes month, day and time from `date_time`, dropping the year and
    /// any fraction of a second.
    pub fn from_date_time(date_time: &NaiveDateTime) -> Self {
        Self {
            month: date_time.month(),
            day: date_time.day(),
            hour: date_time.hour(),
            minute: date_time.minute(),
            // A leap second is reported as second 59 with an oversized fraction.
            second: date_time.second(),
        }
    }

    /// Returns the month, `1..=12`.
    #[inline]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Returns the day of the month, starting at 1.
    #[inline]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Returns the hour, `0..=23`.
    #[inline]
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    /// Returns the minute, `0..=59`.
    #[inline]
    pub const fn minute(&self) -> u32 {
        self.minute
    }

    /// Returns the second, `0..=59`.
    #[inline]
    pub const fn second(&self) -> u32 {
        self.second
    }

    /// Returns `true` for February 29.
    #[inline]
    pub const fn is_leap_day(&self) -> bool {
        self.month == 2 && self.day == 29
    }

    /// Returns `true` if `date_time` falls on this instant in any year,
    /// ignoring fractions of a second.
    #[inline]
    pub fn matches(&self, date_time: &NaiveDateTime) -> bool {
        Self::from_date_time(date_time) == *self
    }

    /// Resolves the instant in `year`.
    ///
    /// Returns `None` for February 29 in a non-leap year, or if `year` is
    /// outside the range `chrono` can represent.
    pub fn at_year(&self, year: i32) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)?.and_hms_opt(
            self.hour,
            self.minute,
            self.second,
        )
    }

    /// Returns the earliest occurrence strictly after `after`.
    ///
    /// Returns `None` only if that occurrence lies beyond the range
    /// `chrono` can represent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use capstan_time::month_day_time::MonthDayTime;
    /// # use chrono::{Datelike, NaiveDate};
    /// let leap_day = MonthDayTime::new(2, 29, 0, 0, 0).unwrap();
    /// let after = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
    /// assert_eq!(leap_day.next_after(&after).unwrap().year(), 2028);
    /// ```
    pub fn next_after(&self, after: &NaiveDateTime) -> Option<NaiveDateTime> {
        let first = after.year();
        let found = (first..=first.saturating_add(MAX_LEAP_GAP))
            .find_map(|year| self.at_year(year).filter(|candidate| candidate > after));
        if found.is_none() {
            log::debug!("{} has no occurrence representable after {}", self, after);
        }
        found
    }

    /// Returns the latest occurrence strictly before `before`.
    ///
    /// Returns `None` only if that occurrence lies beyond the range
    /// `chrono` can represent.
    pub fn previous_before(&self, before: &NaiveDateTime) -> Option<NaiveDateTime> {
        let last = before.year();
        let found = (last.saturating_sub(MAX_LEAP_GAP)..=last)
            .rev()
            .find_map(|year| self.at_year(year).filter(|candidate| candidate < before));
        if found.is_none() {
            log::debug!("{} has no occurrence representable before {}", self, before);
        }
        found
    }
}

impl From<&NaiveDateTime> for MonthDayTime {
    #[inline]
    fn from(date_time: &NaiveDateTime) -> Self {
        Self::from_date_time(date_time)
    }
}

impl Display for MonthDayTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "--{:02}-{:02}T{:02}:{:02}:{:02}",
            self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

impl FromStr for MonthDayTime {
    type Err = TimeError;

    /// Parses `--MM-DDTHH:MM:SS`. Every field takes exactly two digits.
    ///
    /// Malformed input yields [`TimeError::Parse`]; well-formed input with
    /// out-of-range fields yields the same error as [`MonthDayTime::new`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (month, day, hour, minute, second) =
            split_fields(s).ok_or_else(|| TimeError::Parse { input: s.to_owned() })?;
        Self::new(month, day, hour, minute, second)
    }
}

impl TryFrom<String> for MonthDayTime {
    type Error = TimeError;

    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthDayTime> for String {
    #[inline]
    fn from(value: MonthDayTime) -> Self {
        value.to_string()
    }
}

fn split_fields(s: &str) -> Option<(u32, u32, u32, u32, u32)> {
    let (date, time) = s.strip_prefix("--")?.split_once('T')?;
    let (month, day) = date.split_once('-')?;

    let mut clock = time.split(':');
    let hour = two_digits(clock.next()?)?;
    let minute = two_digits(clock.next()?)?;
    let second = two_digits(clock.next()?)?;
    if clock.next().is_some() {
        return None;
    }

    Some((two_digits(month)?, two_digits(day)?, hour, minute, second))
}

#[inline]
fn two_digits(field: &str) -> Option<u32> {
    match field.as_bytes() {
        [tens, ones] if tens.is_ascii_digit() && ones.is_ascii_digit() => {
            Some(u32::from(tens - b'0') * 10 + u32::from(ones - b'0'))
        }
        _ => None,
    }
}
