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

//! # Capstan Time
//!
//! [`MonthDayTime`](month_day_time::MonthDayTime) is a wall-clock instant
//! that recurs every year: a month, a day of the month and a time of day,
//! without year or time zone. It resolves to concrete
//! [`chrono::NaiveDateTime`] values on demand.
//!
//! ```rust
//! use capstan_time::month_day_time::MonthDayTime;
//! use chrono::NaiveDate;
//!
//! let rollover: MonthDayTime = "--12-31T23:59:59".parse().unwrap();
//! let now = NaiveDate::from_ymd_opt(2025, 6, 1)
//!     .unwrap()
//!     .and_hms_opt(8, 0, 0)
//!     .unwrap();
//!
//! let next = rollover.next_after(&now).unwrap();
//! assert_eq!(next.to_string(), "2025-12-31 23:59:59");
//! ```
//!
//! ## Features
//!
//! - `serde`: serializes `MonthDayTime` as its `--MM-DDTHH:MM:SS` string.

pub mod error;
pub mod month_day_time;
