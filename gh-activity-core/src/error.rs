//! Error types for the activity core

use thiserror::Error;

/// A single event could not be rendered
///
/// Scoped to one record: the renderer reports it for that event and moves on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A field the formatter needs is absent
    #[error("missing field `{path}`")]
    MissingField { path: String },

    /// A field is present but has the wrong shape
    #[error("field `{path}` has the wrong type, expected {expected}")]
    InvalidField {
        path: String,
        expected: &'static str,
    },
}

impl RenderError {
    pub(crate) fn missing(path: impl Into<String>) -> Self {
        RenderError::MissingField { path: path.into() }
    }

    pub(crate) fn invalid(path: impl Into<String>, expected: &'static str) -> Self {
        RenderError::InvalidField {
            path: path.into(),
            expected,
        }
    }

    /// Dotted path of the offending field
    pub fn path(&self) -> &str {
        match self {
            RenderError::MissingField { path } | RenderError::InvalidField { path, .. } => path,
        }
    }
}

/// Failure talking to the activity feed
#[derive(Error, Debug)]
pub enum FetchError {
    /// Username would not form a valid events URL
    #[error("invalid username '{0}'")]
    InvalidUsername(String),

    /// HTTP client could not be constructed
    #[error("failed to create HTTP client")]
    Client(#[source] reqwest::Error),

    /// Request failed before a response arrived, or the body could not be read
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Body was not valid JSON
    #[error("failed to parse activity feed")]
    Decode(#[from] serde_json::Error),

    /// Body was JSON but not an array of events
    #[error("activity feed is not a JSON array")]
    NotAnArray,
}
