//! Browser lifecycle management using Chrome DevTools Protocol

use crate::error::Result;
use headless_chrome::{Browser, LaunchOptions, Tab};
use snapcheck_core::{RunnerConfig, SnapError};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Active browser session with Chrome DevTools Protocol
///
/// One browser process and one tab serve an entire verification run. The
/// browser process is released when the session is dropped, on success and
/// error paths alike.
pub struct BrowserSession {
    /// Underlying browser instance (kept alive for tab lifetime)
    #[allow(dead_code)]
    browser: Browser,
    /// Single tab used for every navigation
    tab: Arc<Tab>,
}

impl BrowserSession {
    /// Launch a new headless browser instance
    ///
    /// # Example
    /// ```no_run
    /// use snapcheck_browser::browser::BrowserSession;
    /// use snapcheck_core::RunnerConfig;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let config = RunnerConfig::default();
    ///     let session = BrowserSession::launch(&config).await.unwrap();
    ///     session.navigate("http://localhost:3000").await.unwrap();
    /// }
    /// ```
    pub async fn launch(config: &RunnerConfig) -> Result<Self> {
        info!(
            "Launching browser (headless, size: {}x{})",
            config.window_width, config.window_height
        );

        let launch_options = LaunchOptions::default_builder()
            .headless(true)
            .window_size(Some((config.window_width, config.window_height)))
            .build()
            .map_err(|e| SnapError::Browser(format!("Failed to build launch options: {}", e)))?;

        let browser = Browser::new(launch_options)
            .map_err(|e| SnapError::Browser(format!("Failed to launch browser: {}", e)))?;

        let tab = browser
            .new_tab()
            .map_err(|e| SnapError::Browser(format!("Failed to create tab: {}", e)))?;

        tab.set_default_timeout(config.nav_timeout());

        info!("Browser launched successfully");

        Ok(Self { browser, tab })
    }

    /// Navigate to a URL and block until navigation completes
    ///
    /// # Arguments
    /// * `url` - URL to navigate to
    pub async fn navigate(&self, url: &str) -> Result<()> {
        debug!("Navigating to {}", url);

        self.tab
            .navigate_to(url)
            .map_err(|e| SnapError::Navigation(format!("Failed to navigate to {}: {}", url, e)))?;

        self.tab
            .wait_until_navigated()
            .map_err(|e| SnapError::Navigation(format!("Navigation timeout for {}: {}", url, e)))?;

        info!("Successfully navigated to {}", url);
        Ok(())
    }

    /// Block until the page reports no new network activity for `window`
    ///
    /// Network-idle is approximated by polling the page's resource-timing
    /// entry count: the page is idle once `document.readyState` is complete
    /// and the count has been stable for the full window. Exceeding
    /// `timeout` is an error.
    pub async fn wait_for_network_idle(&self, window: Duration, timeout: Duration) -> Result<()> {
        debug!(
            "Waiting for network idle (window: {:?}, timeout: {:?})",
            window, timeout
        );

        let started = Instant::now();
        let poll_interval = Duration::from_millis(100);
        let mut last_count = self.resource_count().await?;
        let mut quiet_since = Instant::now();

        loop {
            tokio::time::sleep(poll_interval).await;

            let count = self.resource_count().await?;
            if count != last_count {
                last_count = count;
                quiet_since = Instant::now();
            }

            let ready = self
                .evaluate_script("document.readyState")
                .await?
                .as_str()
                .map(|s| s == "complete")
                .unwrap_or(false);

            if ready && quiet_since.elapsed() >= window {
                debug!(
                    "Network idle after {:?} ({} resources loaded)",
                    started.elapsed(),
                    count
                );
                return Ok(());
            }

            if started.elapsed() >= timeout {
                return Err(SnapError::PageNotLoaded(format!(
                    "network did not go idle within {:?}",
                    timeout
                )));
            }
        }
    }

    /// Execute JavaScript in the page context
    ///
    /// # Arguments
    /// * `script` - JavaScript code to execute
    ///
    /// # Returns
    /// JSON result from JavaScript execution
    pub async fn evaluate_script(&self, script: &str) -> Result<serde_json::Value> {
        debug!("Evaluating JavaScript: {}", script);

        let result = self
            .tab
            .evaluate(script, false)
            .map_err(|e| SnapError::Browser(format!("JavaScript evaluation failed: {}", e)))?;

        Ok(result.value.unwrap_or(serde_json::Value::Null))
    }

    /// Get the current page title
    pub async fn get_title(&self) -> Result<String> {
        let result = self.evaluate_script("document.title").await?;
        Ok(result.as_str().unwrap_or("").to_string())
    }

    /// Get the current URL
    pub async fn get_url(&self) -> Result<String> {
        let result = self.evaluate_script("window.location.href").await?;
        Ok(result.as_str().unwrap_or("").to_string())
    }

    /// Number of resource-timing entries the page has recorded
    async fn resource_count(&self) -> Result<u64> {
        let result = self
            .evaluate_script("window.performance.getEntriesByType('resource').length")
            .await?;
        Ok(result.as_u64().unwrap_or(0))
    }

    /// Get reference to the active tab
    pub fn tab(&self) -> &Arc<Tab> {
        &self.tab
    }

    /// Close the browser session
    pub async fn close(self) -> Result<()> {
        info!("Closing browser session");
        // Browser is dropped and cleaned up automatically
        Ok(())
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        debug!("BrowserSession dropped, browser will be cleaned up");
    }
}
