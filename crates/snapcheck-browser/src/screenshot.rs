//! Screenshot capture using Chrome DevTools Protocol

use crate::browser::BrowserSession;
use crate::error::Result;
use headless_chrome::protocol::cdp::Page::CaptureScreenshotFormatOption;
use snapcheck_core::SnapError;
use std::path::Path;
use tracing::{debug, info};

/// Capture a full-page PNG of the current page
///
/// # Arguments
/// * `session` - Active browser session, already navigated
///
/// # Returns
/// Raw PNG bytes
pub async fn capture_full_page(session: &BrowserSession) -> Result<Vec<u8>> {
    debug!("Capturing full page screenshot");

    let data = session
        .tab()
        .capture_screenshot(CaptureScreenshotFormatOption::Png, None, None, true)
        .map_err(|e| SnapError::Screenshot(format!("CDP capture failed: {}", e)))?;

    Ok(data)
}

/// Persist screenshot bytes to a file
///
/// The parent directory is created if absent. An existing file at the path
/// is truncated, so re-runs overwrite earlier captures.
pub fn persist_screenshot(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(path, data)?;

    info!("Screenshot saved: {} ({} bytes)", path.display(), data.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persist_writes_non_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.png");

        persist_screenshot(&path, b"\x89PNG\r\n\x1a\n").unwrap();

        let written = std::fs::read(&path).unwrap();
        assert!(!written.is_empty());
        assert_eq!(written, b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_persist_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.png");

        persist_screenshot(&path, b"first capture with longer content").unwrap();
        persist_screenshot(&path, b"second").unwrap();

        // Truncated, not appended
        let written = std::fs::read(&path).unwrap();
        assert_eq!(written, b"second");
    }

    #[test]
    fn test_persist_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("verification").join("page.png");

        persist_screenshot(&path, b"data").unwrap();

        assert!(path.exists());
    }
}
