//! # snapcheck-core
//!
//! Core types for the snapcheck visual verification runner.
//!
//! snapcheck captures screenshots of a small, fixed set of pages from an
//! application under development so a human can eyeball them. This crate
//! holds the pieces that do not touch a browser:
//!
//! - The unified [`SnapError`] type and [`Result`] alias
//! - The verification plan (which routes, which output files)
//! - Runner configuration with defaults matching the local dev setup

mod config;
mod error;
mod plan;

pub use config::RunnerConfig;
pub use error::{Result, SnapError};
pub use plan::{CaptureReport, CaptureSpec, VerificationPlan};
