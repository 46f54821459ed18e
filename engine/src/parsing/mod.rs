//! Parsers for portal attendance data formats.
//!
//! - [`attendance_json`]: the attendance JSON payload saved from the portal
//! - [`sessions`]: the packed per-subject session history string

pub mod attendance_json;
pub mod sessions;


pub use attendance_json::{
    parse_attendance_summary, parse_attendance_summary_file, AttendanceSummary, SubjectRecord,
};
pub use sessions::{parse_sessions, SessionRecord, SessionStatus};
