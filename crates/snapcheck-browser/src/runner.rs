//! Sequential verification runner
//!
//! Drives the navigate / wait / capture sequence against the application
//! under verification. One browser and one tab serve every route; the first
//! failure aborts the remaining captures and propagates to the caller.

use crate::browser::BrowserSession;
use crate::error::Result;
use crate::screenshot::{capture_full_page, persist_screenshot};
use snapcheck_core::{CaptureReport, RunnerConfig, SnapError, VerificationPlan};
use tracing::{debug, info};

/// Run every capture in the plan, in order
///
/// For each (route, output) pair: navigate, wait for the network-idle
/// condition, verify the page loaded cleanly, then write a full-page PNG.
/// Each URL is visited before its screenshot path is written, so a failing
/// route leaves no file behind for itself or anything after it.
///
/// # Example
/// ```no_run
/// use snapcheck_browser::runner::run_verification;
/// use snapcheck_core::{RunnerConfig, VerificationPlan};
///
/// #[tokio::main]
/// async fn main() {
///     let reports = run_verification(&VerificationPlan::builtin(), &RunnerConfig::default())
///         .await
///         .unwrap();
///     assert_eq!(reports.len(), 3);
/// }
/// ```
pub async fn run_verification(
    plan: &VerificationPlan,
    config: &RunnerConfig,
) -> Result<Vec<CaptureReport>> {
    info!(
        "Starting verification run: {} route(s) against {}",
        plan.len(),
        config.base_url
    );

    let session = BrowserSession::launch(config).await?;
    let mut reports = Vec::with_capacity(plan.len());

    for spec in &plan.specs {
        let url = spec.url(&config.base_url);
        let output = config.out_dir.join(&spec.output);

        session.navigate(&url).await?;
        session
            .wait_for_network_idle(config.idle_window(), config.idle_timeout())
            .await?;

        if !verify_page_loaded(&session).await? {
            return Err(SnapError::PageNotLoaded(format!(
                "{} did not load cleanly",
                url
            )));
        }

        let data = capture_full_page(&session).await?;
        persist_screenshot(&output, &data)?;

        reports.push(CaptureReport {
            route: spec.route.clone(),
            output,
            size_bytes: data.len() as u64,
        });
    }

    session.close().await?;

    info!("Verification run complete ({} screenshots)", reports.len());
    Ok(reports)
}

/// Verify the current page loaded successfully
///
/// Rejects Chrome's internal error pages (unreachable server, DNS failure)
/// and titles that indicate an application error page, so a broken route
/// fails the run instead of producing a screenshot of an error screen.
pub async fn verify_page_loaded(session: &BrowserSession) -> Result<bool> {
    debug!("Verifying page loaded successfully");

    let url = session.get_url().await?;
    if is_error_location(&url) {
        return Ok(false);
    }

    let title = session.get_title().await?;
    if is_error_title(&title) {
        return Ok(false);
    }

    Ok(true)
}

/// Chrome swaps the location to a chrome-error:// URL when navigation
/// never reached the server
fn is_error_location(url: &str) -> bool {
    url.starts_with("chrome-error://")
}

fn is_error_title(title: &str) -> bool {
    let error_indicators = ["404", "Error", "Not Found", "403", "500"];
    error_indicators.iter().any(|&e| title.contains(e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_location_classification() {
        assert!(is_error_location("chrome-error://chromewebdata/"));
        assert!(!is_error_location("http://localhost:3000/tools/calculators/wizard"));
        assert!(!is_error_location("https://example.com"));
    }

    #[test]
    fn test_error_title_classification() {
        assert!(is_error_title("404: This page could not be found"));
        assert!(is_error_title("Application Error"));
        assert!(is_error_title("500 Internal Server Error"));
        assert!(!is_error_title("Calculator Wizard"));
        assert!(!is_error_title("Break-Even Calculator"));
    }
}
