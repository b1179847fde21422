//! Event kind registry
//!
//! Maps the wire-format `type` string of a feed event onto a closed set of
//! kinds. Unrecognized strings resolve to [`EventKind::Unknown`].

use std::fmt;

/// Suffix carried by every wire kind on the GitHub events API
const EVENT_SUFFIX: &str = "Event";

/// Known event kinds plus a catch-all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Commits pushed to a branch
    Push,

    /// Issue opened, closed, reopened, ...
    Issues,

    /// Repository starred
    Watch,

    /// Repository forked
    Fork,

    /// Branch, tag or repository created
    Create,

    /// Anything the registry does not know about
    Unknown,
}

impl EventKind {
    /// Every kind with a dedicated formatter, in registry order
    pub const KNOWN: [EventKind; 5] = [
        EventKind::Push,
        EventKind::Issues,
        EventKind::Watch,
        EventKind::Fork,
        EventKind::Create,
    ];

    /// The exact string used on the wire
    pub fn wire_name(&self) -> &'static str {
        match self {
            EventKind::Push => "PushEvent",
            EventKind::Issues => "IssuesEvent",
            EventKind::Watch => "WatchEvent",
            EventKind::Fork => "ForkEvent",
            EventKind::Create => "CreateEvent",
            EventKind::Unknown => "Unknown",
        }
    }

    /// Human label: the wire name without its `Event` suffix
    pub fn display_label(&self) -> &'static str {
        display_label(self.wire_name())
    }

    /// Case-insensitive lookup. Total: never fails.
    pub fn classify(wire: &str) -> EventKind {
        Self::KNOWN
            .into_iter()
            .find(|kind| kind.wire_name().eq_ignore_ascii_case(wire))
            .unwrap_or(EventKind::Unknown)
    }

    /// Like [`EventKind::classify`], treating an absent string as unknown
    pub fn classify_opt(wire: Option<&str>) -> EventKind {
        wire.map(Self::classify).unwrap_or(EventKind::Unknown)
    }

    /// Byte-exact lookup used for dispatch
    ///
    /// Returns `None` for anything that is not spelled exactly like one of
    /// the known wire names, including `"Unknown"` itself.
    pub fn from_wire_exact(wire: &str) -> Option<EventKind> {
        Self::KNOWN
            .into_iter()
            .find(|kind| kind.wire_name() == wire)
    }
}

/// Strip exactly one trailing `Event` from a wire kind string
///
/// Strings without the suffix come back unchanged, so applying this to an
/// already-stripped label is a no-op.
pub fn display_label(wire: &str) -> &str {
    wire.strip_suffix(EVENT_SUFFIX).unwrap_or(wire)
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

impl std::str::FromStr for EventKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(EventKind::classify(s))
    }
}
