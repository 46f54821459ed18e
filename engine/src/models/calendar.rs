//! Weekly class-density calendar with holiday overrides.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// ISO date format used for holiday entries and end dates.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a user-supplied `YYYY-MM-DD` date string.
pub fn parse_iso_date(input: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), ISO_DATE_FORMAT).map_err(|_| {
        EngineError::InvalidDate {
            input: input.to_string(),
        }
    })
}

/// Classes held on each weekday. Saturdays run a shortened day and Sundays
/// are off. Fixed institutional policy, not configurable.
pub fn classes_for_weekday(weekday: Weekday) -> u32 {
    match weekday {
        Weekday::Mon | Weekday::Tue | Weekday::Wed | Weekday::Thu | Weekday::Fri => 7,
        Weekday::Sat => 6,
        Weekday::Sun => 0,
    }
}

/// Set of holiday dates that zero out a day's class count.
///
/// Owned by the caller for the duration of one calculation; may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    dates: HashSet<NaiveDate>,
}

impl HolidaySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `YYYY-MM-DD` strings, failing on the first malformed one.
    pub fn from_strs<I, S>(dates: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = HashSet::new();
        for date in dates {
            set.insert(parse_iso_date(date.as_ref())?);
        }
        Ok(Self { dates: set })
    }

    pub fn insert(&mut self, date: NaiveDate) {
        self.dates.insert(date);
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl FromIterator<NaiveDate> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

/// Number of classes held on `date`: the weekday density, or 0 when the
/// date is a holiday.
pub fn classes_on_day(date: NaiveDate, holidays: &HolidaySet) -> u32 {
    if holidays.contains(date) {
        0
    } else {
        classes_for_weekday(date.weekday())
    }
}

/// A single future day and the number of classes it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub class_count: u32,
}
