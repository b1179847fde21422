//! User-facing messages
//!
//! Kept apart from `main` so the exact wording is tested in one place.

use gh_activity_core::RenderError;

/// Printed to stdout when the API answers 404
pub const USER_NOT_FOUND: &str = "User not found. Please check the username.";

/// Any non-200, non-404 status
pub fn unexpected_status(status: u16) -> String {
    format!("Error: {status}")
}

/// Network, decode or client setup failure
pub fn fetch_failed(error: &anyhow::Error) -> String {
    format!("Error fetching GitHub activity: {error:#}")
}

/// One event that could not be rendered
pub fn malformed_event(index: usize, error: &RenderError) -> String {
    format!("Skipping malformed event #{index}: {error}")
}

/// The feed was an empty array
pub fn no_activity(username: &str) -> String {
    format!("No recent activity found for {username}.")
}
