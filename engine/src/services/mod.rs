//! Computation layer of the attendance engine.
//!
//! Every function here is a synchronous pure function of its inputs: the
//! tally, a target percentage, and a schedule window generated for the
//! call. Nothing is cached between calls.

pub mod day_mapper;

pub mod projection;

pub mod thresholds;

#[cfg(test)]
mod projection_tests;

pub use day_mapper::{days_absorbing, map_to_days, DayMapping};
pub use projection::{project_future_attendance, ProjectionReport, ProjectionScenario, SCENARIO_RATES};
pub use thresholds::{
    classes_needed_for_target, classes_needed_raw, leave_allowance, max_absences_allowed,
    LeaveAllowance, ThresholdReport,
};
