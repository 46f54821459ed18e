//! Public result surface for the attendance engine.
//!
//! This file consolidates the record types handed to the rendering layer.
//! All types serialize to JSON with serde.

pub use crate::models::calendar::CalendarDay;
pub use crate::models::schedule::Schedule;
pub use crate::models::tally::AttendanceTally;
pub use crate::parsing::attendance_json::{AttendanceSummary, SubjectRecord};
pub use crate::parsing::sessions::{SessionRecord, SessionStatus};
pub use crate::services::day_mapper::DayMapping;
pub use crate::services::projection::{ProjectionReport, ProjectionScenario};
pub use crate::services::thresholds::{LeaveAllowance, ThresholdReport};

use std::cmp::Ordering;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A class or day count that may have no finite value within the projection
/// window.
///
/// Serializes as the plain count, or the string `"unreachable"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feasible {
    Count(u32),
    Unreachable,
}

impl Feasible {
    /// The finite count, if there is one.
    pub fn count(self) -> Option<u32> {
        match self {
            Feasible::Count(count) => Some(count),
            Feasible::Unreachable => None,
        }
    }

    pub fn is_unreachable(self) -> bool {
        matches!(self, Feasible::Unreachable)
    }
}

// `Unreachable` compares greater than every finite count.
impl Ord for Feasible {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Feasible::Count(a), Feasible::Count(b)) => a.cmp(b),
            (Feasible::Count(_), Feasible::Unreachable) => Ordering::Less,
            (Feasible::Unreachable, Feasible::Count(_)) => Ordering::Greater,
            (Feasible::Unreachable, Feasible::Unreachable) => Ordering::Equal,
        }
    }
}

impl PartialOrd for Feasible {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for Feasible {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Feasible::Count(count) => serializer.serialize_u32(*count),
            Feasible::Unreachable => serializer.serialize_str("unreachable"),
        }
    }
}

impl<'de> Deserialize<'de> for Feasible {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum CountOrSentinel {
            Count(u32),
            Sentinel(String),
        }

        match CountOrSentinel::deserialize(deserializer)? {
            CountOrSentinel::Count(count) => Ok(Feasible::Count(count)),
            CountOrSentinel::Sentinel(s) if s == "unreachable" => Ok(Feasible::Unreachable),
            CountOrSentinel::Sentinel(s) => {
                Err(D::Error::custom(format!("unexpected count value '{s}'")))
            }
        }
    }
}

/// An absence or leave-day budget that may be unlimited.
///
/// Serializes as the plain count, or the string `"unlimited"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Allowance {
    Count(u32),
    Unlimited,
}

impl Allowance {
    /// The finite count, if there is one.
    pub fn count(self) -> Option<u32> {
        match self {
            Allowance::Count(count) => Some(count),
            Allowance::Unlimited => None,
        }
    }

    pub fn is_unlimited(self) -> bool {
        matches!(self, Allowance::Unlimited)
    }
}

impl Serialize for Allowance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Allowance::Count(count) => serializer.serialize_u32(*count),
            Allowance::Unlimited => serializer.serialize_str("unlimited"),
        }
    }
}

impl<'de> Deserialize<'de> for Allowance {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum CountOrSentinel {
            Count(u32),
            Sentinel(String),
        }

        match CountOrSentinel::deserialize(deserializer)? {
            CountOrSentinel::Count(count) => Ok(Allowance::Count(count)),
            CountOrSentinel::Sentinel(s) if s == "unlimited" => Ok(Allowance::Unlimited),
            CountOrSentinel::Sentinel(s) => {
                Err(D::Error::custom(format!("unexpected count value '{s}'")))
            }
        }
    }
}
