//! gh-activity core library exports

pub mod config;
pub mod error;
pub mod events;
pub mod fetch;
pub mod render;

pub use config::ActivityConfig;
pub use error::{FetchError, RenderError};
pub use events::{display_label, ActivityEvent, EventKind};
pub use fetch::{ActivitySource, FetchOutcome, GitHubSource};
pub use render::{ActivityRenderer, RenderReport, RenderedLine};
