//! Read-only view over a raw feed record
//!
//! The feed is loosely typed, so records stay as [`serde_json::Value`] and
//! formatters pull out only the fields they need. Every accessor reports a
//! missing or mistyped field as a [`RenderError`] instead of defaulting.

use serde_json::Value;

use crate::error::RenderError;

/// Borrowed view of one activity event
#[derive(Debug, Clone, Copy)]
pub struct ActivityEvent<'a> {
    raw: &'a Value,
}

impl<'a> ActivityEvent<'a> {
    /// Wrap a record; fails if the record is not a JSON object
    pub fn new(raw: &'a Value) -> Result<Self, RenderError> {
        if raw.is_object() {
            Ok(Self { raw })
        } else {
            Err(RenderError::invalid("$", "object"))
        }
    }

    /// The wire `type` string, exactly as received
    pub fn wire_type(&self) -> Result<&'a str, RenderError> {
        string_at(self.raw, &["type"])
    }

    /// `repo.name`
    pub fn repo_name(&self) -> Result<&'a str, RenderError> {
        string_at(self.raw, &["repo", "name"])
    }

    /// `payload.<field>` as a string
    pub fn payload_str(&self, field: &str) -> Result<&'a str, RenderError> {
        string_at(self.raw, &["payload", field])
    }

    /// `payload.<field>` as an array
    pub fn payload_array(&self, field: &str) -> Result<&'a [Value], RenderError> {
        let path = ["payload", field];
        lookup(self.raw, &path)?
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| RenderError::invalid(path.join("."), "array"))
    }
}

fn string_at<'a>(root: &'a Value, path: &[&str]) -> Result<&'a str, RenderError> {
    lookup(root, path)?
        .as_str()
        .ok_or_else(|| RenderError::invalid(path.join("."), "string"))
}

/// Walk `path` through nested objects
///
/// `null` counts as missing, which is how the API marks absent optionals.
/// A missing key anywhere along the way reports the full requested path.
fn lookup<'a>(root: &'a Value, path: &[&str]) -> Result<&'a Value, RenderError> {
    let mut current = root;
    for (depth, key) in path.iter().enumerate() {
        let object = current
            .as_object()
            .ok_or_else(|| RenderError::invalid(path[..depth].join("."), "object"))?;
        current = match object.get(*key) {
            Some(Value::Null) | None => return Err(RenderError::missing(path.join("."))),
            Some(value) => value,
        };
    }
    Ok(current)
}
