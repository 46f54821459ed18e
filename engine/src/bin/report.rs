//! Attendance Report Binary
//!
//! Reads a saved attendance payload, runs the projection engine, and prints
//! a single JSON report to stdout for the rendering layer to format.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin ats-report -- attendance.json
//!
//! # With a config file, an explicit target and an end-of-term projection
//! cargo run --bin ats-report -- attendance.json \
//!     --config tracker.toml --target 85 --end 2025-12-20
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::Local;
use serde_json::json;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use ats_rust::config::TrackerConfig;
use ats_rust::models::calendar::parse_iso_date;
use ats_rust::models::schedule::Schedule;
use ats_rust::parsing::parse_attendance_summary_file;
use ats_rust::services::{classes_needed_for_target, leave_allowance, project_future_attendance};

struct Args {
    payload: PathBuf,
    config: Option<PathBuf>,
    target: Option<f64>,
    days: Option<u32>,
    end: Option<String>,
}

const USAGE: &str =
    "usage: ats-report <attendance.json> [--config <file>] [--target <pct>] [--days <n>] [--end <YYYY-MM-DD>]";

fn parse_args() -> Result<Args> {
    let mut args = env::args().skip(1);
    let mut payload = None;
    let mut config = None;
    let mut target = None;
    let mut days = None;
    let mut end = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                config = Some(PathBuf::from(args.next().context("--config needs a path")?));
            }
            "--target" => {
                target = Some(
                    args.next()
                        .context("--target needs a value")?
                        .parse::<f64>()
                        .context("--target must be a number")?,
                );
            }
            "--days" => {
                days = Some(
                    args.next()
                        .context("--days needs a value")?
                        .parse::<u32>()
                        .context("--days must be a non-negative integer")?,
                );
            }
            "--end" => {
                end = Some(args.next().context("--end needs a YYYY-MM-DD date")?);
            }
            other if payload.is_none() && !other.starts_with("--") => {
                payload = Some(PathBuf::from(other));
            }
            other => bail!("unexpected argument '{other}'\n{USAGE}"),
        }
    }
    Ok(Args {
        payload: payload.context(USAGE)?,
        config,
        target,
        days,
        end,
    })
}

fn main() -> Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    let args = parse_args()?;

    let config = match &args.config {
        Some(path) => TrackerConfig::from_file(path)?,
        None => TrackerConfig::default(),
    };
    let holidays = config.holiday_set()?;
    let target = args.target.unwrap_or(config.projection.default_target);
    let horizon = args.days.unwrap_or(config.projection.horizon_days);

    let summary = parse_attendance_summary_file(&args.payload)?;
    info!(
        subjects = summary.subjects.len(),
        overall = %summary.overall,
        "parsed attendance payload"
    );

    let today = Local::now().date_naive();
    let schedule = Schedule::upcoming(today, horizon, &holidays);
    let threshold = classes_needed_for_target(&summary.overall, &schedule, target);
    let leave = leave_allowance(&summary.overall, &schedule, target);

    let projection = match &args.end {
        Some(end) => {
            let end_date = parse_iso_date(end)?;
            Some(project_future_attendance(
                &summary.overall,
                today,
                end_date,
                &holidays,
            )?)
        }
        None => None,
    };

    let report = json!({
        "summary": summary,
        "target_percentage": target,
        "horizon_days": horizon,
        "threshold": threshold,
        "leave_allowance": leave,
        "projection": projection,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
