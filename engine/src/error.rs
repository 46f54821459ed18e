//! Typed errors for the attendance engine.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors produced by the engine's own operations.
///
/// Unreachable targets are not errors; they are ordinary values
/// ([`crate::api::Feasible::Unreachable`]) that callers branch on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A date string did not parse as `YYYY-MM-DD`.
    #[error("invalid date '{input}': expected YYYY-MM-DD")]
    InvalidDate { input: String },

    /// The requested end date is not strictly after the anchor date.
    #[error("end date {end} must be after {from}")]
    InvalidRange { from: NaiveDate, end: NaiveDate },

    /// A tally claiming more attended classes than classes held.
    #[error("invalid tally: {present} present out of {total} classes")]
    InvalidTally { present: u32, total: u32 },

    /// Configuration file could not be read or parsed.
    #[error("configuration error: {0}")]
    Configuration(String),
}
