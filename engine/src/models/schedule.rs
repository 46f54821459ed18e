//! Future class schedules generated from the weekly calendar.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::calendar::{classes_on_day, CalendarDay, HolidaySet};

/// Ordered sequence of future days, strictly increasing by date, starting
/// the day after the anchor date.
///
/// Built fresh for every calculation and discarded afterwards; never cached
/// or mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    days: Vec<CalendarDay>,
}

impl Schedule {
    /// Schedule covering the `days_ahead` days after `from`.
    pub fn upcoming(from: NaiveDate, days_ahead: u32, holidays: &HolidaySet) -> Self {
        let days = from
            .iter_days()
            .skip(1)
            .take(days_ahead as usize)
            .map(|date| CalendarDay {
                date,
                class_count: classes_on_day(date, holidays),
            })
            .collect();
        Self { days }
    }

    /// Schedule covering every day strictly after `from` through `end`
    /// inclusive. `end` must lie in the future relative to `from`.
    pub fn until(from: NaiveDate, end: NaiveDate, holidays: &HolidaySet) -> EngineResult<Self> {
        if end <= from {
            return Err(EngineError::InvalidRange { from, end });
        }
        let days = from
            .iter_days()
            .skip(1)
            .take_while(|date| *date <= end)
            .map(|date| CalendarDay {
                date,
                class_count: classes_on_day(date, holidays),
            })
            .collect();
        Ok(Self { days })
    }

    /// Assemble a schedule from precomputed days.
    pub fn from_days(days: Vec<CalendarDay>) -> Self {
        Self { days }
    }

    /// Total class capacity over the window.
    pub fn total_classes(&self) -> u32 {
        self.days.iter().map(|day| day.class_count).sum()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn days(&self) -> &[CalendarDay] {
        &self.days
    }

    pub fn iter(&self) -> impl Iterator<Item = &CalendarDay> {
        self.days.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2025-04-07 is a Monday.
    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 7).unwrap()
    }

    #[test]
    fn test_upcoming_starts_day_after_anchor() {
        let schedule = Schedule::upcoming(monday(), 3, &HolidaySet::new());
        assert_eq!(schedule.len(), 3);
        assert_eq!(
            schedule.days()[0].date,
            NaiveDate::from_ymd_opt(2025, 4, 8).unwrap()
        );
    }

    #[test]
    fn test_upcoming_dates_strictly_increasing() {
        let schedule = Schedule::upcoming(monday(), 30, &HolidaySet::new());
        for pair in schedule.days().windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }

    #[test]
    fn test_full_week_capacity() {
        // Tue..=Mon: five weekdays, one Saturday, one Sunday.
        let schedule = Schedule::upcoming(monday(), 7, &HolidaySet::new());
        assert_eq!(schedule.total_classes(), 5 * 7 + 6);
    }

    #[test]
    fn test_holiday_zeroes_day() {
        let holidays = HolidaySet::from_strs(["2025-04-08"]).unwrap();
        let schedule = Schedule::upcoming(monday(), 2, &holidays);
        assert_eq!(schedule.days()[0].class_count, 0);
        assert_eq!(schedule.days()[1].class_count, 7);
    }

    #[test]
    fn test_until_covers_through_end_inclusive() {
        let end = NaiveDate::from_ymd_opt(2025, 4, 14).unwrap();
        let schedule = Schedule::until(monday(), end, &HolidaySet::new()).unwrap();
        assert_eq!(schedule.len(), 7);
        assert_eq!(schedule.days().last().unwrap().date, end);
    }

    #[test]
    fn test_until_rejects_end_not_in_future() {
        let err = Schedule::until(monday(), monday(), &HolidaySet::new()).unwrap_err();
        assert!(matches!(err, EngineError::InvalidRange { .. }));

        let yesterday = NaiveDate::from_ymd_opt(2025, 4, 6).unwrap();
        let err = Schedule::until(monday(), yesterday, &HolidaySet::new()).unwrap_err();
        assert!(matches!(err, EngineError::InvalidRange { .. }));
    }

    #[test]
    fn test_until_single_day_window() {
        let tuesday = NaiveDate::from_ymd_opt(2025, 4, 8).unwrap();
        let schedule = Schedule::until(monday(), tuesday, &HolidaySet::new()).unwrap();
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule.total_classes(), 7);
    }

    #[test]
    fn test_zero_days_ahead_is_empty() {
        let schedule = Schedule::upcoming(monday(), 0, &HolidaySet::new());
        assert!(schedule.is_empty());
        assert_eq!(schedule.total_classes(), 0);
    }
}
