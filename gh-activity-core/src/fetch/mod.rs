//! Activity sources - where raw event records come from
//!
//! The renderer never touches the network. A source hands it an already
//! parsed list of records, or tells the caller why it could not:
//! - [`FetchOutcome::UserNotFound`] and [`FetchOutcome::UnexpectedStatus`]
//!   are answers from the server
//! - [`FetchError`] covers everything that went wrong on the way

pub mod github;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::FetchError;

pub use github::GitHubSource;

/// What the feed said
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// 200 with a JSON array body
    Events(Vec<Value>),
    /// 404
    UserNotFound,
    /// Any other status
    UnexpectedStatus(u16),
}

/// Trait for event feed backends
#[async_trait]
pub trait ActivitySource: Send + Sync {
    /// Fetch the public events of `username`
    async fn fetch_events(&self, username: &str) -> Result<FetchOutcome, FetchError>;

    /// Source identifier for logging
    fn name(&self) -> &'static str;
}

/// Reject anything outside GitHub's username alphabet
///
/// Usernames are ASCII letters, digits and `-`. Enforcing that keeps the
/// name a single path segment: no `/`, query, fragment, escapes, or dot
/// segments that the URL parser would collapse (`..` would hit `/events`).
pub fn validate_username(username: &str) -> Result<&str, FetchError> {
    let trimmed = username.trim();
    let allowed = |c: char| c.is_ascii_alphanumeric() || c == '-';
    if trimmed.is_empty() || !trimmed.chars().all(allowed) {
        return Err(FetchError::InvalidUsername(username.to_string()));
    }
    Ok(trimmed)
}

/// Canned source for tests
#[cfg(test)]
pub struct MockSource {
    pub outcome: FetchOutcome,
}

#[cfg(test)]
#[async_trait]
impl ActivitySource for MockSource {
    async fn fetch_events(&self, username: &str) -> Result<FetchOutcome, FetchError> {
        validate_username(username)?;
        Ok(self.outcome.clone())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
