//! Browser automation error types - re-exports the unified SnapError from snapcheck-core
//!
//! All browser errors use the unified SnapError type:
//! - Browser(String) - launch and tab failures
//! - Navigation(String) - navigation failures
//! - PageNotLoaded(String) - idle-wait timeouts and error pages
//! - Screenshot(String) - CDP capture failures
//! - Io(std::io::Error) - screenshot persistence failures
//!
//! Error messages should be descriptive and include context about the operation that failed.

pub use snapcheck_core::{Result, SnapError};
