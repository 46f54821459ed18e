//! Greedy conversion from abstract class counts to unique calendar days.

use serde::{Deserialize, Serialize};

use crate::api::Feasible;
use crate::models::schedule::Schedule;

/// Day count and feasibility verdict for a class-count query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayMapping {
    pub days: Feasible,
    pub reachable: bool,
}

/// Walk `schedule` earliest-day-first, consuming up to `target` classes.
/// Returns the classes consumed and the unique days touched.
fn consume(target: u32, schedule: &Schedule) -> (u32, u32) {
    let mut consumed = 0u32;
    let mut days_used = 0u32;
    for day in schedule.iter() {
        if consumed >= target {
            break;
        }
        if day.class_count == 0 {
            continue;
        }
        consumed += day.class_count.min(target - consumed);
        days_used += 1;
    }
    (consumed, days_used)
}

/// Map an abstract class count onto the window.
///
/// Classes land on the earliest available days, and a day counts once no
/// matter how many of its classes are consumed. Days holding no classes
/// pass without contributing. Exhausting the window before the count is met
/// means the target is not reachable within it.
pub fn map_to_days(classes: Feasible, schedule: &Schedule) -> DayMapping {
    let target = match classes {
        Feasible::Unreachable => {
            return DayMapping {
                days: Feasible::Unreachable,
                reachable: false,
            }
        }
        Feasible::Count(0) => {
            return DayMapping {
                days: Feasible::Count(0),
                reachable: true,
            }
        }
        Feasible::Count(count) => count,
    };
    let (consumed, days_used) = consume(target, schedule);
    if consumed < target {
        return DayMapping {
            days: Feasible::Unreachable,
            reachable: false,
        };
    }
    DayMapping {
        days: Feasible::Count(days_used),
        reachable: true,
    }
}

/// Same walk, saturating: how many unique days the window can dedicate to
/// `classes`, even when its capacity cannot absorb all of them.
pub fn days_absorbing(classes: u32, schedule: &Schedule) -> u32 {
    consume(classes, schedule).1
}
