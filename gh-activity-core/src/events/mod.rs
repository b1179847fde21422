//! Activity event types
//!
//! - [`EventKind`]: the closed registry of wire kinds
//! - [`ActivityEvent`]: a borrowed, field-checked view of one feed record

pub mod kind;
pub mod view;

pub use kind::{display_label, EventKind};
pub use view::ActivityEvent;
