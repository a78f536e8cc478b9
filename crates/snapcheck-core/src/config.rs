//! Runner configuration
//!
//! Defaults reproduce the zero-configuration verification run: the dev
//! server on localhost:3000, screenshots under `verification/`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for a verification run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Base address of the application under verification
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Directory screenshot files are written to
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// Browser viewport width
    #[serde(default = "default_window_width")]
    pub window_width: u32,

    /// Browser viewport height
    #[serde(default = "default_window_height")]
    pub window_height: u32,

    /// Navigation timeout in seconds
    #[serde(default = "default_nav_timeout_secs")]
    pub nav_timeout_secs: u64,

    /// Trailing window with no new network activity before a page counts as idle
    #[serde(default = "default_idle_window_ms")]
    pub idle_window_ms: u64,

    /// Upper bound on waiting for the idle condition, in seconds
    #[serde(default = "default_idle_timeout_secs")]
    pub idle_timeout_secs: u64,
}

// Default value providers
fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("verification")
}

fn default_window_width() -> u32 {
    1280
}

fn default_window_height() -> u32 {
    720
}

fn default_nav_timeout_secs() -> u64 {
    30
}

fn default_idle_window_ms() -> u64 {
    500
}

fn default_idle_timeout_secs() -> u64 {
    10
}

impl RunnerConfig {
    /// Quiescence window as a [`Duration`]
    pub fn idle_window(&self) -> Duration {
        Duration::from_millis(self.idle_window_ms)
    }

    /// Idle-wait upper bound as a [`Duration`]
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }

    /// Navigation timeout as a [`Duration`]
    pub fn nav_timeout(&self) -> Duration {
        Duration::from_secs(self.nav_timeout_secs)
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            out_dir: default_out_dir(),
            window_width: default_window_width(),
            window_height: default_window_height(),
            nav_timeout_secs: default_nav_timeout_secs(),
            idle_window_ms: default_idle_window_ms(),
            idle_timeout_secs: default_idle_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RunnerConfig::default();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.out_dir, PathBuf::from("verification"));
        assert_eq!(config.window_width, 1280);
        assert_eq!(config.window_height, 720);
        assert_eq!(config.nav_timeout_secs, 30);
        assert_eq!(config.idle_window_ms, 500);
        assert_eq!(config.idle_timeout_secs, 10);
    }

    #[test]
    fn test_duration_accessors() {
        let config = RunnerConfig::default();
        assert_eq!(config.idle_window(), Duration::from_millis(500));
        assert_eq!(config.idle_timeout(), Duration::from_secs(10));
        assert_eq!(config.nav_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_custom_config() {
        let config = RunnerConfig {
            base_url: "http://localhost:8080".to_string(),
            idle_window_ms: 250,
            ..RunnerConfig::default()
        };
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.idle_window(), Duration::from_millis(250));
        assert_eq!(config.out_dir, PathBuf::from("verification"));
    }
}
