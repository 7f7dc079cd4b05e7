//! Observance period configuration and day arithmetic.
//!
//! A [`Period`] anchors every calculation to a configured start date and
//! length. It is threaded as an explicit value into the target calculator,
//! the task generator, and the progress aggregator rather than living as a
//! module-level constant, so all of them are testable with arbitrary starts.
//!
//! All arithmetic operates on calendar dates (`NaiveDate`) at midnight; no
//! time-of-day component participates. A device timezone change mid-period
//! can shift which calendar date "today" resolves to - this is a known
//! limitation and is not compensated for.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PERIOD_DAYS;

/// A fixed observance window: a start date plus a length in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    pub start_date: NaiveDate,
    pub length_days: u32,
}

impl Period {
    pub fn new(start_date: NaiveDate, length_days: u32) -> Self {
        Self {
            start_date,
            length_days,
        }
    }

    /// Standard 30-day observance starting on the given date.
    pub fn ramadan(start_date: NaiveDate) -> Self {
        Self::new(start_date, DEFAULT_PERIOD_DAYS)
    }

    /// Period-relative day number for a calendar date. Day 1 is the start
    /// date itself. Dates before the start yield values below 1 and dates
    /// past the end yield values above `length_days`; callers decide how to
    /// treat out-of-range results.
    pub fn day_number(&self, date: NaiveDate) -> i64 {
        (date - self.start_date).num_days() + 1
    }

    /// Inverse of [`day_number`](Self::day_number).
    pub fn date_for_day(&self, day: i64) -> NaiveDate {
        self.start_date + Duration::days(day - 1)
    }

    /// Days left in the period counting the given date itself; 0 once the
    /// period has ended.
    pub fn remaining_days(&self, date: NaiveDate) -> i64 {
        (self.length_days as i64 - self.day_number(date) + 1).max(0)
    }

    /// Whether the date falls on one of the period's days.
    pub fn contains(&self, date: NaiveDate) -> bool {
        let day = self.day_number(date);
        day >= 1 && day <= self.length_days as i64
    }

    /// The final day of the period.
    pub fn last_date(&self) -> NaiveDate {
        self.date_for_day(self.length_days as i64)
    }
}

/// Weekday index with the Sunday-is-0 convention used by weekly goals.
pub fn day_of_week(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}
