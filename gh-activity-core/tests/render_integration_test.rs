//! End-to-end rendering of realistic feed records
//!
//! Fixtures are trimmed copies of what `GET /users/{user}/events` returns;
//! extra fields are left in to make sure formatters ignore them.

use gh_activity_core::{ActivityRenderer, EventKind, RenderError};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn event(kind: &str, payload: Value) -> Value {
    json!({
        "id": "1234567890",
        "type": kind,
        "actor": {"id": 1, "login": "octocat"},
        "repo": {"id": 42, "name": "octo/repo", "url": "https://api.github.com/repos/octo/repo"},
        "payload": payload,
        "public": true,
        "created_at": "2024-01-01T00:00:00Z"
    })
}

fn render_one(raw: Value) -> Result<String, RenderError> {
    ActivityRenderer::render_event(&raw)
}

// ============================================================================
// Per-kind scenarios
// ============================================================================

#[test]
fn test_push_counts_commits() {
    let raw = event(
        "PushEvent",
        json!({"commits": [{"sha": "a"}, {"sha": "b"}, {"sha": "c"}], "size": 99}),
    );
    assert_eq!(render_one(raw).unwrap(), "Pushed 3 commit(s) to octo/repo");
}

#[test]
fn test_push_with_empty_commits() {
    let raw = event("PushEvent", json!({"commits": []}));
    assert_eq!(render_one(raw).unwrap(), "Pushed 0 commit(s) to octo/repo");
}

#[test]
fn test_push_without_commits_is_not_zero() {
    let raw = event("PushEvent", json!({"size": 3}));
    assert_eq!(
        render_one(raw),
        Err(RenderError::MissingField {
            path: "payload.commits".to_string()
        })
    );
}

#[test]
fn test_issues_capitalizes_action() {
    let raw = event("IssuesEvent", json!({"action": "closed"}));
    assert_eq!(render_one(raw).unwrap(), "Closed an issue in octo/repo");

    let raw = event("IssuesEvent", json!({"action": "reopened"}));
    assert_eq!(render_one(raw).unwrap(), "Reopened an issue in octo/repo");

    let raw = event("IssuesEvent", json!({"action": "unLabeled"}));
    assert_eq!(render_one(raw).unwrap(), "UnLabeled an issue in octo/repo");
}

#[test]
fn test_watch_fork_create() {
    assert_eq!(
        render_one(json!({"type": "WatchEvent", "repo": {"name": "octo/repo"}})).unwrap(),
        "Starred octo/repo"
    );
    assert_eq!(
        render_one(event("ForkEvent", json!({"forkee": {"full_name": "me/repo"}}))).unwrap(),
        "Forked octo/repo"
    );
    assert_eq!(
        render_one(event("CreateEvent", json!({"ref_type": "branch", "ref": "main"}))).unwrap(),
        "Created branch in octo/repo"
    );
}

#[test]
fn test_create_with_non_string_ref_type() {
    let raw = event("CreateEvent", json!({"ref_type": 3}));
    assert_eq!(
        render_one(raw),
        Err(RenderError::InvalidField {
            path: "payload.ref_type".to_string(),
            expected: "string"
        })
    );
}

// ============================================================================
// Fallback
// ============================================================================

#[test]
fn test_unrecognized_kind_uses_fallback() {
    let raw = json!({"type": "GollumEvent", "repo": {"name": "octo/repo"}});
    assert_eq!(render_one(raw).unwrap(), "Gollum in octo/repo");

    let raw = event("PullRequestReviewCommentEvent", json!({}));
    assert_eq!(
        render_one(raw).unwrap(),
        "PullRequestReviewComment in octo/repo"
    );
}

#[test]
fn test_fallback_without_suffix_keeps_type() {
    let raw = json!({"type": "Sponsorship", "repo": {"name": "octo/repo"}});
    assert_eq!(render_one(raw).unwrap(), "Sponsorship in octo/repo");
}

#[test]
fn test_dispatch_is_case_sensitive() {
    // Classifies as Push, but renders via the fallback
    let raw = json!({"type": "pushevent", "repo": {"name": "octo/repo"}});
    assert_eq!(EventKind::classify("pushevent"), EventKind::Push);
    assert_eq!(render_one(raw).unwrap(), "pushevent in octo/repo");

    let raw = json!({"type": "WATCHEvent", "repo": {"name": "octo/repo"}});
    assert_eq!(render_one(raw).unwrap(), "WATCH in octo/repo");
}

#[test]
fn test_fallback_still_needs_repo_name() {
    let raw = json!({"type": "GollumEvent", "repo": {"id": 1}});
    assert_eq!(
        render_one(raw),
        Err(RenderError::MissingField {
            path: "repo.name".to_string()
        })
    );
}

// ============================================================================
// Sequence properties
// ============================================================================

#[test]
fn test_empty_input() {
    assert!(ActivityRenderer::render(&[]).is_empty());
}

#[test]
fn test_order_and_length_preserved() {
    let events = vec![
        event("CreateEvent", json!({"ref_type": "repository"})),
        event("WatchEvent", json!({"action": "started"})),
        event("PushEvent", json!({"commits": [{}]})),
        event("MemberEvent", json!({})),
        event("IssuesEvent", json!({"action": "opened"})),
    ];

    let rendered: Vec<String> = ActivityRenderer::render(&events)
        .into_iter()
        .map(Result::unwrap)
        .collect();

    assert_eq!(
        rendered,
        vec![
            "Created repository in octo/repo",
            "Starred octo/repo",
            "Pushed 1 commit(s) to octo/repo",
            "Member in octo/repo",
            "Opened an issue in octo/repo",
        ]
    );
}

#[test]
fn test_malformed_event_is_contained() {
    let events = vec![
        event("ForkEvent", json!({})),
        json!({"type": "PushEvent", "payload": {"commits": []}}),
        json!("not an event"),
        event("WatchEvent", json!({})),
    ];

    let results = ActivityRenderer::render(&events);

    assert_eq!(results.len(), 4);
    assert_eq!(results[0].as_deref(), Ok("Forked octo/repo"));
    assert_eq!(results[1].as_ref().unwrap_err().path(), "repo.name");
    assert_eq!(results[2].as_ref().unwrap_err().path(), "$");
    assert_eq!(results[3].as_deref(), Ok("Starred octo/repo"));
}

#[test]
fn test_renderer_is_reusable() {
    let events = vec![event("ForkEvent", json!({}))];
    let first = ActivityRenderer::render(&events);
    let second = ActivityRenderer::render(&events);
    assert_eq!(first, second);
}
