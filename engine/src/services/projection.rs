//! End-of-term attendance projection at fixed future-attendance rates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::Feasible;
use crate::error::EngineResult;
use crate::models::calendar::HolidaySet;
use crate::models::schedule::Schedule;
use crate::models::tally::AttendanceTally;
use crate::services::day_mapper::days_absorbing;

/// Hypothetical future attendance rates, in display order. The descending
/// run with the zero row last is what the rendering layer expects.
pub const SCENARIO_RATES: [u32; 7] = [100, 95, 90, 85, 75, 50, 0];

/// Overall percentage the projector's convenience figure targets.
const CONVENIENCE_TARGET_PCT: f64 = 85.0;

/// One hypothetical-rate row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionScenario {
    pub rate: u32,
    pub classes_to_attend: u32,
    pub days_to_attend: u32,
    pub projected_total: AttendanceTally,
    pub projected_percentage: f64,
}

/// Projection of the tally through an explicit end date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionReport {
    pub current: AttendanceTally,
    pub current_percentage: f64,
    /// Classes held between tomorrow and the end date.
    pub future_classes: u32,
    pub projected_total_classes: u32,
    /// Minimum of the window's classes to attend for an 85% overall figure
    /// at the end date; unreachable when even full attendance falls short.
    pub classes_needed_85: Feasible,
    pub scenarios: Vec<ProjectionScenario>,
}

/// Minimum classes attended within a window holding `future_classes` such
/// that the percentage at the eventual total meets `target_pct`.
fn classes_needed_by_end(
    tally: &AttendanceTally,
    future_classes: u32,
    target_pct: f64,
) -> Feasible {
    let target = target_pct.min(100.0);
    if target <= 0.0 {
        return Feasible::Count(0);
    }
    let eventual_total = tally.total + future_classes;
    let required = (target / 100.0 * eventual_total as f64).ceil() - tally.present as f64;
    if required <= 0.0 {
        return Feasible::Count(0);
    }
    let needed = required as u32;
    if needed > future_classes {
        return Feasible::Unreachable;
    }
    Feasible::Count(needed)
}

/// Project attendance through `end`, one scenario row per rate in
/// [`SCENARIO_RATES`].
///
/// Fails with `InvalidRange` when `end` is not strictly after `from`. Every
/// rate is satisfiable against the generated window by construction, so the
/// rows themselves never carry an unreachable marker.
pub fn project_future_attendance(
    tally: &AttendanceTally,
    from: NaiveDate,
    end: NaiveDate,
    holidays: &HolidaySet,
) -> EngineResult<ProjectionReport> {
    let schedule = Schedule::until(from, end, holidays)?;
    let future_classes = schedule.total_classes();
    let projected_total_classes = tally.total + future_classes;
    let classes_needed_85 = classes_needed_by_end(tally, future_classes, CONVENIENCE_TARGET_PCT);

    let mut scenarios = Vec::with_capacity(SCENARIO_RATES.len());
    for rate in SCENARIO_RATES {
        let classes_to_attend = (future_classes as f64 * rate as f64 / 100.0).floor() as u32;
        let days_to_attend = days_absorbing(classes_to_attend, &schedule);
        let projected_total = AttendanceTally {
            present: tally.present + classes_to_attend,
            total: projected_total_classes,
        };
        scenarios.push(ProjectionScenario {
            rate,
            classes_to_attend,
            days_to_attend,
            projected_percentage: projected_total.percentage(),
            projected_total,
        });
    }

    Ok(ProjectionReport {
        current: *tally,
        current_percentage: tally.percentage(),
        future_classes,
        projected_total_classes,
        classes_needed_85,
        scenarios,
    })
}
