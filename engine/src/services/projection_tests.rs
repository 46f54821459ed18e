#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::api::Feasible;
    use crate::error::EngineError;
    use crate::models::calendar::HolidaySet;
    use crate::models::tally::AttendanceTally;
    use crate::services::projection::{project_future_attendance, SCENARIO_RATES};

    fn tally(present: u32, total: u32) -> AttendanceTally {
        AttendanceTally::new(present, total).unwrap()
    }

    // 2025-04-07 is a Monday.
    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 7).unwrap()
    }

    fn week_later() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 14).unwrap()
    }

    #[test]
    fn test_end_date_must_be_strictly_future() {
        let err = project_future_attendance(&tally(40, 50), monday(), monday(), &HolidaySet::new())
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidRange { .. }));

        let yesterday = NaiveDate::from_ymd_opt(2025, 4, 6).unwrap();
        let err = project_future_attendance(&tally(40, 50), monday(), yesterday, &HolidaySet::new())
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidRange { .. }));
    }

    #[test]
    fn test_scenario_order_fixed() {
        let report =
            project_future_attendance(&tally(40, 50), monday(), week_later(), &HolidaySet::new())
                .unwrap();
        let rates: Vec<u32> = report.scenarios.iter().map(|s| s.rate).collect();
        assert_eq!(rates, SCENARIO_RATES.to_vec());
    }

    #[test]
    fn test_projected_percentage_monotone_in_rate() {
        let report =
            project_future_attendance(&tally(40, 50), monday(), week_later(), &HolidaySet::new())
                .unwrap();
        // Rates descend along the vec, so percentages must not increase.
        for pair in report.scenarios.windows(2) {
            assert!(pair[0].projected_percentage >= pair[1].projected_percentage - 1e-9);
        }
    }

    #[test]
    fn test_full_attendance_consumes_whole_window() {
        // Apr 8..=14: five weekdays at 7, Saturday 6, Sunday 0.
        let report =
            project_future_attendance(&tally(40, 50), monday(), week_later(), &HolidaySet::new())
                .unwrap();
        assert_eq!(report.future_classes, 41);
        assert_eq!(report.projected_total_classes, 91);
        let full = &report.scenarios[0];
        assert_eq!(full.rate, 100);
        assert_eq!(full.classes_to_attend, 41);
        assert_eq!(full.days_to_attend, 6);
        assert_eq!(full.projected_total.present, 81);
        assert!((full.projected_percentage - 81.0 / 91.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_rate_scenario_attends_nothing() {
        let report =
            project_future_attendance(&tally(40, 50), monday(), week_later(), &HolidaySet::new())
                .unwrap();
        let zero = report.scenarios.last().unwrap();
        assert_eq!(zero.rate, 0);
        assert_eq!(zero.classes_to_attend, 0);
        assert_eq!(zero.days_to_attend, 0);
        assert_eq!(zero.projected_total.present, 40);
        assert!((zero.projected_percentage - 40.0 / 91.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_holidays_reduce_capacity() {
        let holidays = HolidaySet::from_strs(["2025-04-08"]).unwrap();
        let report =
            project_future_attendance(&tally(40, 50), monday(), week_later(), &holidays).unwrap();
        assert_eq!(report.future_classes, 34);
        assert_eq!(report.projected_total_classes, 84);
    }

    #[test]
    fn test_classes_needed_85_within_window() {
        // Eventual total 91; ceil(0.85 * 91) = 78, so 38 of the window's 41.
        let report =
            project_future_attendance(&tally(40, 50), monday(), week_later(), &HolidaySet::new())
                .unwrap();
        assert_eq!(report.classes_needed_85, Feasible::Count(38));
    }

    #[test]
    fn test_classes_needed_85_unreachable_in_short_window() {
        // One day ahead holds 7 classes; eventual total 57 needs 49 present.
        let tuesday = NaiveDate::from_ymd_opt(2025, 4, 8).unwrap();
        let report =
            project_future_attendance(&tally(40, 50), monday(), tuesday, &HolidaySet::new())
                .unwrap();
        assert_eq!(report.future_classes, 7);
        assert_eq!(report.classes_needed_85, Feasible::Unreachable);
    }

    #[test]
    fn test_zero_capacity_window() {
        // Saturday anchor, Sunday end: the window holds no classes.
        let saturday = NaiveDate::from_ymd_opt(2025, 4, 12).unwrap();
        let sunday = NaiveDate::from_ymd_opt(2025, 4, 13).unwrap();
        let report =
            project_future_attendance(&tally(90, 100), saturday, sunday, &HolidaySet::new())
                .unwrap();
        assert_eq!(report.future_classes, 0);
        assert_eq!(report.classes_needed_85, Feasible::Count(0));
        for scenario in &report.scenarios {
            assert_eq!(scenario.classes_to_attend, 0);
            assert_eq!(scenario.days_to_attend, 0);
            assert!((scenario.projected_percentage - 90.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_zero_denominator_yields_zero_percentage() {
        let saturday = NaiveDate::from_ymd_opt(2025, 4, 12).unwrap();
        let sunday = NaiveDate::from_ymd_opt(2025, 4, 13).unwrap();
        let report =
            project_future_attendance(&tally(0, 0), saturday, sunday, &HolidaySet::new()).unwrap();
        assert_eq!(report.projected_total_classes, 0);
        for scenario in &report.scenarios {
            assert_eq!(scenario.projected_percentage, 0.0);
        }
    }

    #[test]
    fn test_rate_rows_within_window_capacity() {
        let report =
            project_future_attendance(&tally(40, 50), monday(), week_later(), &HolidaySet::new())
                .unwrap();
        for scenario in &report.scenarios {
            assert!(scenario.classes_to_attend <= report.future_classes);
            assert!(scenario.projected_total.present <= scenario.projected_total.total);
        }
    }
}
