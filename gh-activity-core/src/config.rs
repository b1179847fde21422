//! Activity feed configuration
//!
//! ## Configuration Sources (in precedence order)
//!
//! 1. CLI flags (`--api-url`, `--timeout`), applied by the caller
//! 2. Environment: `GH_ACTIVITY_API_URL`, `GH_ACTIVITY_TIMEOUT_SECONDS`
//! 3. Built-in defaults

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

/// Default GitHub REST API root
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// Environment variable overriding the API root
pub const API_URL_ENV: &str = "GH_ACTIVITY_API_URL";

/// Environment variable overriding the request timeout
pub const TIMEOUT_ENV: &str = "GH_ACTIVITY_TIMEOUT_SECONDS";

/// Requests shorter than this are clamped up
pub const MIN_TIMEOUT_SECONDS: u64 = 5;

/// Settings for fetching a user's event feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityConfig {
    /// API root, e.g. `https://api.github.com`
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Sent as `User-Agent`; GitHub rejects requests without one
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("gh-activity/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for ActivityConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            timeout_seconds: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl ActivityConfig {
    /// Defaults with environment overrides applied
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults with overrides pulled from `lookup`
    ///
    /// Split out from [`ActivityConfig::from_env`] so tests don't have to
    /// mutate the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(API_URL_ENV).filter(|u| !u.trim().is_empty()) {
            config.api_base_url = url.trim().to_string();
        }

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(seconds) => config.timeout_seconds = seconds,
                Err(_) => warn!("Ignoring {}={:?}: not a number of seconds", TIMEOUT_ENV, raw),
            }
        }

        config
    }

    /// Timeout to actually use, never below [`MIN_TIMEOUT_SECONDS`]
    pub fn effective_timeout(&self) -> Duration {
        if self.timeout_seconds < MIN_TIMEOUT_SECONDS {
            warn!(
                "Configured timeout_seconds={} is too low; using minimum of {} seconds",
                self.timeout_seconds, MIN_TIMEOUT_SECONDS
            );
            Duration::from_secs(MIN_TIMEOUT_SECONDS)
        } else {
            Duration::from_secs(self.timeout_seconds)
        }
    }

    /// `<base>/users/<username>/events`
    pub fn events_url(&self, username: &str) -> String {
        format!(
            "{}/users/{}/events",
            self.api_base_url.trim_end_matches('/'),
            username
        )
    }
}
