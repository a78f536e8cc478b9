//! Browser automation and screenshot capture for snapcheck
//!
//! This crate drives a headless Chrome/Chromium browser over the Chrome
//! DevTools Protocol (CDP) to capture screenshots of pages from an
//! application under development.
//!
//! # Features
//!
//! - **Browser Management**: Launch and control a headless Chrome browser
//! - **Network-Idle Waiting**: Resource-timing based quiescence detection
//! - **Screenshot Capture**: Full-page PNG capture, persisted with overwrite
//! - **Verification Runner**: Sequential navigate / wait / capture over a plan
//!
//! # Example
//!
//! ```no_run
//! use snapcheck_browser::runner::run_verification;
//! use snapcheck_core::{RunnerConfig, VerificationPlan};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // The dev server must already be listening on the base address
//!     let config = RunnerConfig::default();
//!     let plan = VerificationPlan::builtin();
//!
//!     let reports = run_verification(&plan, &config).await?;
//!
//!     for report in &reports {
//!         println!("{} -> {}", report.route, report.output.display());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Requirements
//!
//! - Chrome or Chromium browser installed
//! - A web server already serving the routes in the plan
//!
//! # Architecture
//!
//! The crate is organized into modules:
//!
//! - [`browser`]: Browser lifecycle and session management
//! - [`screenshot`]: Full-page capture and persistence
//! - [`runner`]: The sequential verification runner
//! - [`error`]: Error types for browser operations

pub mod browser;
pub mod error;
pub mod runner;
pub mod screenshot;

// Re-export commonly used types
pub use browser::BrowserSession;
pub use error::{Result, SnapError};
pub use runner::{run_verification, verify_page_loaded};
pub use screenshot::{capture_full_page, persist_screenshot};
