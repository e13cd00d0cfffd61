//! Normalized calendar days.
//!
//! A [`CalendarDate`] is a Gregorian year/month/day with no time of day, so
//! two values for the same day compare and hash equal no matter how they were
//! built. Day identifiers (`YYYY-MM-DD`) are the string form used to key
//! events.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, TimeZone, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Format of a day identifier, e.g. `2020-07-16`.
pub const DAY_ID_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Drops the time of day from a timestamp, keeping the day it falls on
    /// in its own timezone.
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self(dt.date_naive())
    }

    /// The current day in the local timezone.
    pub fn today() -> Self {
        Self::from_datetime(&Local::now())
    }

    /// Parses a day identifier.
    pub fn from_day_id(id: &str) -> Result<Self> {
        NaiveDate::parse_from_str(id.trim(), DAY_ID_FORMAT)
            .map(Self)
            .map_err(|_| Error::InvalidDayId(id.to_string()))
    }

    /// The identifier events for this day are keyed by.
    pub fn day_id(&self) -> String {
        self.0.format(DAY_ID_FORMAT).to_string()
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// The following day, or `None` past the end of the supported range.
    pub fn succ(&self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }

    pub fn first_of_month(&self) -> Self {
        // day 1 exists in every month
        Self(self.0 - Duration::days(self.0.day0() as i64))
    }

    pub fn last_of_month(&self) -> Self {
        let remaining = days_in_month(self.year(), self.month()) - self.day();
        Self(self.0 + Duration::days(remaining as i64))
    }

    /// Number of days between `first_weekday` and this day's weekday, i.e.
    /// the column this day occupies in a week row starting on `first_weekday`.
    pub fn weekday_offset(&self, first_weekday: Weekday) -> u32 {
        let day = self.weekday().num_days_from_monday();
        let start = first_weekday.num_days_from_monday();
        (day + 7 - start) % 7
    }

    /// "July 2020"
    pub fn month_title(&self) -> String {
        self.0.format("%B %Y").to_string()
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for CalendarDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_day_id(s)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DAY_ID_FORMAT))
    }
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    match NaiveDate::from_ymd_opt(next_year, next_month, 1) {
        Some(first_next) => (first_next - Duration::days(1)).day(),
        // only reachable at the very end of chrono's range
        None => 31,
    }
}
