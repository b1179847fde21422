//! GitHub REST backend
//!
//! `GET /users/{username}/events` and nothing else: no auth, no paging.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;

use super::{validate_username, ActivitySource, FetchOutcome};
use crate::config::ActivityConfig;
use crate::error::FetchError;

/// Media type GitHub recommends for REST calls
const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// GitHub events API source
pub struct GitHubSource {
    client: reqwest::Client,
    config: ActivityConfig,
}

impl GitHubSource {
    /// Build a source with its own HTTP client
    pub fn new(config: ActivityConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.effective_timeout())
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl ActivitySource for GitHubSource {
    async fn fetch_events(&self, username: &str) -> Result<FetchOutcome, FetchError> {
        let username = validate_username(username)?;
        let url = self.config.events_url(username);
        debug!("Fetching activity for {} from {}", username, url);

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, GITHUB_ACCEPT)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        match status {
            StatusCode::OK => {}
            StatusCode::NOT_FOUND => {
                debug!("User {} not found", username);
                return Ok(FetchOutcome::UserNotFound);
            }
            other => {
                debug!("Activity feed returned HTTP {} for {}", other, url);
                return Ok(FetchOutcome::UnexpectedStatus(other.as_u16()));
            }
        }

        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        match serde_json::from_str::<Value>(&body)? {
            Value::Array(events) => {
                debug!("Fetched {} events for {}", events.len(), username);
                Ok(FetchOutcome::Events(events))
            }
            _ => Err(FetchError::NotAnArray),
        }
    }

    fn name(&self) -> &'static str {
        "github"
    }
}
