//! # ATS Rust Engine
//!
//! Attendance projection and target-feasibility engine.
//!
//! This crate is the computational core of the ATS attendance tracker:
//! given a present/total class tally scraped from the college portal and a
//! model of the institution's weekly class calendar, it answers the three
//! questions the tracker keeps asking: how many more classes must be
//! attended to reach a target percentage, how many classes can be skipped
//! while staying above it, and what the percentage will be by a given date
//! under various future attendance rates.
//!
//! ## Features
//!
//! - **Payload Parsing**: Convert the portal's attendance JSON payload and
//!   packed session-history strings into typed records
//! - **Calendar Model**: Weekly class-density table with holiday overrides
//! - **Threshold Solving**: Closed-form classes-needed and leave-allowance
//!   arithmetic with explicit unreachable/unlimited sentinels
//! - **Projection**: Day-accurate scenarios for a fixed set of hypothetical
//!   future attendance rates
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Consolidated result-record surface for the rendering layer
//! - [`models`]: Tally, calendar and schedule data types
//! - [`services`]: Threshold solver, day mapper and scenario projector
//! - [`parsing`]: Portal payload and session-history parsers
//! - [`config`]: TOML configuration (projection defaults and holiday list)
//!
//! All core operations are synchronous pure functions of their inputs;
//! every calculation builds its own schedule window and discards it.

pub mod api;

pub mod config;
pub mod error;

pub mod models;

pub mod parsing;

pub mod services;
