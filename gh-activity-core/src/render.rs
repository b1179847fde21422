//! Activity renderer
//!
//! Turns raw feed records into one-line summaries. Each record is classified
//! by its exact wire `type`, handed to that kind's formatter, and rendered
//! independently of every other record. Output order always matches input
//! order, and a malformed record yields an error in its own slot only.

use serde_json::Value;
use tracing::{debug, trace};

use crate::error::RenderError;
use crate::events::{display_label, ActivityEvent, EventKind};

/// One rendered summary line
pub type RenderedLine = String;

/// Pure formatting function for a single kind
type Formatter = fn(&ActivityEvent<'_>) -> Result<RenderedLine, RenderError>;

/// Lines that rendered, plus the records that did not
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenderReport {
    /// Successfully rendered lines, in input order
    pub lines: Vec<RenderedLine>,
    /// `(input index, error)` for each record that failed
    pub failures: Vec<(usize, RenderError)>,
}

impl RenderReport {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.failures.is_empty()
    }
}

/// The ActivityRenderer - a pure translator from feed records to text
pub struct ActivityRenderer;

impl ActivityRenderer {
    /// Render every record, one result per input, in input order
    pub fn render(events: &[Value]) -> Vec<Result<RenderedLine, RenderError>> {
        events
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                let result = Self::render_event(raw);
                match &result {
                    Ok(line) => trace!(index, line = %line, "Rendered event"),
                    Err(e) => debug!(index, error = %e, "Failed to render event"),
                }
                result
            })
            .collect()
    }

    /// Render and split into printable lines and per-record failures
    pub fn render_lines(events: &[Value]) -> RenderReport {
        let mut report = RenderReport::default();
        for (index, result) in Self::render(events).into_iter().enumerate() {
            match result {
                Ok(line) => report.lines.push(line),
                Err(e) => report.failures.push((index, e)),
            }
        }
        report
    }

    /// Render a single record
    pub fn render_event(raw: &Value) -> Result<RenderedLine, RenderError> {
        let event = ActivityEvent::new(raw)?;
        let wire = event.wire_type()?;

        // Dispatch is byte-exact; near-misses like "pushevent" take the fallback
        match EventKind::from_wire_exact(wire) {
            Some(kind) => formatter_for(kind)(&event),
            None => format_fallback(&event, wire),
        }
    }
}

/// Fixed mapping from kind to formatter
///
/// `Unknown` never comes out of the exact lookup, but maps to the fallback
/// with its own label for completeness.
fn formatter_for(kind: EventKind) -> Formatter {
    match kind {
        EventKind::Push => format_push,
        EventKind::Issues => format_issues,
        EventKind::Watch => format_watch,
        EventKind::Fork => format_fork,
        EventKind::Create => format_create,
        EventKind::Unknown => format_unknown,
    }
}

fn format_push(event: &ActivityEvent<'_>) -> Result<RenderedLine, RenderError> {
    let commits = event.payload_array("commits")?;
    let repo = event.repo_name()?;
    Ok(format!("Pushed {} commit(s) to {}", commits.len(), repo))
}

fn format_issues(event: &ActivityEvent<'_>) -> Result<RenderedLine, RenderError> {
    let action = event.payload_str("action")?;
    let repo = event.repo_name()?;
    let action = capitalize_first(action)
        .ok_or_else(|| RenderError::invalid("payload.action", "non-empty string"))?;
    Ok(format!("{action} an issue in {repo}"))
}

fn format_watch(event: &ActivityEvent<'_>) -> Result<RenderedLine, RenderError> {
    Ok(format!("Starred {}", event.repo_name()?))
}

fn format_fork(event: &ActivityEvent<'_>) -> Result<RenderedLine, RenderError> {
    Ok(format!("Forked {}", event.repo_name()?))
}

fn format_create(event: &ActivityEvent<'_>) -> Result<RenderedLine, RenderError> {
    let ref_type = event.payload_str("ref_type")?;
    let repo = event.repo_name()?;
    Ok(format!("Created {ref_type} in {repo}"))
}

fn format_unknown(event: &ActivityEvent<'_>) -> Result<RenderedLine, RenderError> {
    format_fallback(event, EventKind::Unknown.wire_name())
}

fn format_fallback(event: &ActivityEvent<'_>, wire: &str) -> Result<RenderedLine, RenderError> {
    Ok(format!("{} in {}", display_label(wire), event.repo_name()?))
}

/// Upper-case the first character, leave the rest alone
///
/// `None` for an empty string.
fn capitalize_first(word: &str) -> Option<String> {
    let mut chars = word.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().chain(chars).collect())
}
