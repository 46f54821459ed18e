//! Parser for the attendance JSON payload saved from the portal.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::tally::AttendanceTally;

/// Custom deserializer that accepts either a number or a numeric string for
/// the portal's count fields.
fn deserialize_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrInt {
        Int(u32),
        String(String),
    }

    match StringOrInt::deserialize(deserializer)? {
        StringOrInt::Int(i) => Ok(i),
        StringOrInt::String(s) => s.trim().parse::<u32>().map_err(D::Error::custom),
    }
}

/// Raw JSON structure for one subject entry.
#[derive(Debug, Deserialize)]
struct RawSubject {
    #[serde(rename = "subjectCode", default)]
    subject_code: String,
    #[serde(rename = "subject", default)]
    subject: String,
    #[serde(rename = "presentCount", default, deserialize_with = "deserialize_count")]
    present_count: u32,
    #[serde(rename = "absentCount", default, deserialize_with = "deserialize_count")]
    absent_count: u32,
}

/// One subject's attendance as shown in the portal summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectRecord {
    pub code: String,
    pub name: String,
    pub tally: AttendanceTally,
}

/// Parsed portal payload: per-subject records plus the overall tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    pub subjects: Vec<SubjectRecord>,
    pub overall: AttendanceTally,
    /// SHA-256 of the raw payload, for change detection between downloads.
    pub checksum: String,
}

/// Parse the attendance payload JSON.
///
/// The payload is an array of subject entries. Entries that fail to
/// deserialize are skipped with a warning rather than failing the whole
/// payload; the portal occasionally emits partial records.
pub fn parse_attendance_summary(payload: &str) -> Result<AttendanceSummary> {
    let entries: Vec<serde_json::Value> =
        serde_json::from_str(payload).context("attendance payload is not a JSON array")?;

    let mut subjects = Vec::with_capacity(entries.len());
    let mut present_sum = 0u32;
    let mut total_sum = 0u32;
    for (index, entry) in entries.into_iter().enumerate() {
        let raw: RawSubject = match serde_path_to_error::deserialize(entry) {
            Ok(raw) => raw,
            Err(err) => {
                log::warn!("skipping malformed subject entry {index}: {err}");
                continue;
            }
        };
        let tally = AttendanceTally::from_counts(raw.present_count, raw.absent_count);
        present_sum += tally.present;
        total_sum += tally.total;
        subjects.push(SubjectRecord {
            code: raw.subject_code,
            name: raw.subject,
            tally,
        });
    }

    Ok(AttendanceSummary {
        subjects,
        overall: AttendanceTally {
            present: present_sum,
            total: total_sum,
        },
        checksum: payload_checksum(payload),
    })
}

/// Read and parse a payload saved to disk.
pub fn parse_attendance_summary_file(path: &Path) -> Result<AttendanceSummary> {
    let payload = fs::read_to_string(path)
        .with_context(|| format!("failed to read attendance payload {}", path.display()))?;
    parse_attendance_summary(&payload)
}

fn payload_checksum(payload: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(payload.as_bytes());
    hex::encode(hasher.finalize())
}
