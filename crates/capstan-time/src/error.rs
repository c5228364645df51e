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

//! Error types returned when constructing or parsing a `MonthDayTime`.

use thiserror::Error;

/// Errors raised by [`crate::month_day_time::MonthDayTime`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum TimeError {
    /// The month is outside `1..=12`.
    #[error("month {0} is outside 1..=12")]
    InvalidMonth(u32),
    /// The day does not exist in the month (February allows 29).
    #[error("day {day} does not exist in month {month}")]
    InvalidDay {
        /// The validated month.
        month: u32,
        /// The offending day.
        day: u32,
    },
    /// One of hour, minute or second is out of range.
    #[error("{hour:02}:{minute:02}:{second:02} is not a valid time of day")]
    InvalidTime {
        /// Hour of the day.
        hour: u32,
        /// Minute of the hour.
        minute: u32,
        /// Second of the minute.
        second: u32,
    },
    /// The input does not have the form `--MM-DDTHH:MM:SS`.
    #[error("cannot parse {input:?} as --MM-DDTHH:MM:SS")]
    Parse {
        /// The rejected input.
        input: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_error_display() {
        assert_eq!(TimeError::InvalidMonth(13).to_string(), "month 13 is outside 1..=12");
        assert_eq!(
            TimeError::InvalidDay { month: 4, day: 31 }.to_string(),
            "day 31 does not exist in month 4"
        );
        assert_eq!(
            TimeError::InvalidTime {
                hour: 24,
                minute: 0,
                second: 5
            }
            .to_string(),
            "24:00:05 is not a valid time of day"
        );
        assert_eq!(
            TimeError::Parse {
                input: "x".to_owned()
            }
            .to_string(),
            "cannot parse \"x\" as --MM-DDTHH:MM:SS"
        );
    }
}
