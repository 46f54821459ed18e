//! Closed-form attendance threshold arithmetic.
//!
//! The raw solvers work from the tally alone; the orchestration functions
//! combine them with a generated schedule window to express the answer in
//! calendar days.

use serde::{Deserialize, Serialize};

use crate::api::{Allowance, Feasible};
use crate::models::schedule::Schedule;
use crate::models::tally::AttendanceTally;
use crate::services::day_mapper::{self, days_absorbing};

/// Targets this close to 100% have no finite closed-form solution.
const TARGET_CEILING_EPSILON: f64 = 1e-9;

/// Minimum additional consecutive classes to reach `target_pct`.
///
/// Solves for the smallest `x >= 0` with
/// `(present + x) / (total + x) >= target / 100`. Pure arithmetic; the
/// calendar is not consulted.
pub fn classes_needed_raw(tally: &AttendanceTally, target_pct: f64) -> Feasible {
    let target = target_pct.min(100.0);
    if target <= 0.0 {
        return Feasible::Count(0);
    }
    if tally.percentage() >= target {
        return Feasible::Count(0);
    }
    let denominator = 100.0 - target;
    if denominator <= TARGET_CEILING_EPSILON {
        // present < total here, so 100% can never be recovered.
        return Feasible::Unreachable;
    }
    let numerator = target * tally.total as f64 - 100.0 * tally.present as f64;
    if numerator <= 0.0 {
        // Rounding edge: still below target, so at least one class is needed.
        return Feasible::Count(1);
    }
    Feasible::Count((numerator / denominator).ceil() as u32)
}

/// Maximum classes that can be missed while holding `target_pct`, assuming
/// every one of them counts as an absence.
pub fn max_absences_allowed(tally: &AttendanceTally, target_pct: f64) -> Allowance {
    let target = target_pct.min(100.0);
    if target <= 0.0 {
        return Allowance::Unlimited;
    }
    if tally.percentage() < target {
        return Allowance::Count(0);
    }
    let slack = (tally.present as f64 * 100.0 / target - tally.total as f64).floor();
    Allowance::Count(slack.max(0.0) as u32)
}

/// Outcome of a classes-needed query against a concrete window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdReport {
    pub classes_needed: Feasible,
    pub days_needed: Feasible,
    /// Percentage after attending the needed classes and no others, at the
    /// window's eventual total. Unchanged from current when nothing is
    /// needed or the target is unreachable.
    pub projected_percentage: f64,
}

/// Classes and unique days needed to reach `target_pct` within `schedule`.
///
/// A window too small to absorb the raw class count makes the target
/// unreachable within it, for the day count and the class count both.
pub fn classes_needed_for_target(
    tally: &AttendanceTally,
    schedule: &Schedule,
    target_pct: f64,
) -> ThresholdReport {
    let current = tally.percentage();
    match classes_needed_raw(tally, target_pct) {
        Feasible::Unreachable => ThresholdReport {
            classes_needed: Feasible::Unreachable,
            days_needed: Feasible::Unreachable,
            projected_percentage: current,
        },
        Feasible::Count(0) => ThresholdReport {
            classes_needed: Feasible::Count(0),
            days_needed: Feasible::Count(0),
            projected_percentage: current,
        },
        Feasible::Count(needed) => {
            let mapping = day_mapper::map_to_days(Feasible::Count(needed), schedule);
            if !mapping.reachable {
                return ThresholdReport {
                    classes_needed: Feasible::Unreachable,
                    days_needed: Feasible::Unreachable,
                    projected_percentage: current,
                };
            }
            let projected_total = tally.total + schedule.total_classes();
            let projected_percentage = if projected_total == 0 {
                0.0
            } else {
                (tally.present + needed) as f64 / projected_total as f64 * 100.0
            };
            ThresholdReport {
                classes_needed: Feasible::Count(needed),
                days_needed: mapping.days,
                projected_percentage,
            }
        }
    }
}

/// How far the current tally can slip before dropping below a target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeaveAllowance {
    pub current_percentage: f64,
    pub target_percentage: f64,
    pub max_absences: Allowance,
    /// Unique calendar days the window can absorb for those absences. When
    /// the allowance exceeds the window's capacity this saturates at the
    /// window's class-bearing days.
    pub estimated_leave_days: Allowance,
    pub can_maintain_target: bool,
}

/// How many future classes can be skipped while staying at or above
/// `target_pct`, and roughly how many calendar days of leave that covers.
pub fn leave_allowance(
    tally: &AttendanceTally,
    schedule: &Schedule,
    target_pct: f64,
) -> LeaveAllowance {
    let target = target_pct.min(100.0);
    let current = tally.percentage();
    if target <= 0.0 {
        return LeaveAllowance {
            current_percentage: current,
            target_percentage: target,
            max_absences: Allowance::Unlimited,
            estimated_leave_days: Allowance::Unlimited,
            can_maintain_target: true,
        };
    }
    if current < target {
        return LeaveAllowance {
            current_percentage: current,
            target_percentage: target,
            max_absences: Allowance::Count(0),
            estimated_leave_days: Allowance::Count(0),
            can_maintain_target: false,
        };
    }
    let max_absences = max_absences_allowed(tally, target);
    let estimated_leave_days = match max_absences {
        Allowance::Unlimited => Allowance::Unlimited,
        Allowance::Count(0) => Allowance::Count(0),
        Allowance::Count(count) => Allowance::Count(days_absorbing(count, schedule)),
    };
    LeaveAllowance {
        current_percentage: current,
        target_percentage: target,
        max_absences,
        estimated_leave_days,
        can_maintain_target: true,
    }
}
