//! Parser for the portal's packed session-history strings.
//!
//! Each subject carries a `studentAttendanceData` blob: records separated
//! by `;`, fields by `^^^`, in the order date, start time, end time,
//! status, session tag, and a trailing marker.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const FIELD_SEPARATOR: &str = "^^^";
const RECORD_SEPARATOR: char = ';';
const SESSION_DATE_FORMAT: &str = "%b %d, %Y";

/// Attendance status of one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    Present,
    Absent,
    /// Anything else the portal reports (leave codes and the like), kept
    /// verbatim.
    Other(String),
}

impl SessionStatus {
    fn from_portal(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "present" => SessionStatus::Present,
            "absent" => SessionStatus::Absent,
            _ => SessionStatus::Other(raw.trim().to_string()),
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, SessionStatus::Present)
    }
}

/// One dated class session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub session: String,
    pub status: SessionStatus,
}

/// Parse a packed session blob, newest first.
///
/// Malformed records are skipped with a warning; the portal history
/// regularly contains truncated trailing entries.
pub fn parse_sessions(blob: &str) -> Vec<SessionRecord> {
    let mut records = Vec::new();
    for entry in blob.split(RECORD_SEPARATOR) {
        if entry.is_empty() {
            continue;
        }
        let fields: Vec<&str> = entry.split(FIELD_SEPARATOR).collect();
        if fields.len() < 6 {
            log::warn!("skipping malformed session entry '{entry}'");
            continue;
        }
        let date = match NaiveDate::parse_from_str(fields[0].trim(), SESSION_DATE_FORMAT) {
            Ok(date) => date,
            Err(err) => {
                log::warn!("skipping session with unparseable date '{}': {err}", fields[0]);
                continue;
            }
        };
        records.push(SessionRecord {
            date,
            start_time: fields[1].trim().to_string(),
            end_time: fields[2].trim().to_string(),
            session: fields[4].trim().to_string(),
            status: SessionStatus::from_portal(fields[3]),
        });
    }
    records.sort_by(|a, b| b.date.cmp(&a.date));
    records
}
