//! Module: path
//! Responsibility: dotted field paths and lenient resolution to text.
//! Does not own: match semantics, ordering policy, or index lookup.

use crate::{traits::FieldValues, value::Value};
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// FieldPath
///
/// Ordered field-name segments addressing a nested record field.
/// Surface syntax is a dot-separated string: `spec.containers.image`.
///

#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    #[must_use]
    pub fn parse(path: &str) -> Self {
        if path.is_empty() {
            return Self(Vec::new());
        }

        Self(path.split('.').map(str::to_owned).collect())
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

impl From<String> for FieldPath {
    fn from(path: String) -> Self {
        Self::parse(&path)
    }
}

impl From<FieldPath> for String {
    fn from(path: FieldPath) -> Self {
        path.to_string()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

/// Resolve `path` against `record`, yielding the terminal value's text form.
///
/// Resolution is a lenient probe: an empty path, a missing field, a type
/// mismatch, or an unconvertible terminal all yield the empty string, never
/// an error. The matcher treats the empty string as "no match".
#[must_use]
pub fn resolve(path: &FieldPath, record: &dyn FieldValues) -> String {
    resolve_segments(path.segments(), record)
}

fn resolve_segments(segments: &[String], record: &dyn FieldValues) -> String {
    let Some((head, rest)) = segments.split_first() else {
        return String::new();
    };
    let Some(value) = record.get_value(head) else {
        return String::new();
    };

    if rest.is_empty() {
        terminal_text(&value)
    } else {
        descend(rest, &value)
    }
}

// A list is probed with the same remaining path element by element; the
// first non-empty resolution wins.
fn descend(segments: &[String], value: &Value<'_>) -> String {
    match value {
        Value::Record(record) => resolve_segments(segments, *record),
        Value::List(items) => items
            .iter()
            .map(|item| descend(segments, item))
            .find(|text| !text.is_empty())
            .unwrap_or_default(),
        _ => String::new(),
    }
}

// Terminal conversion. Map entries serialize as concatenated `key=value`
// pairs in ascending key order.
fn terminal_text(value: &Value<'_>) -> String {
    match value {
        Value::Int(n) => n.to_string(),
        Value::Uint(n) => n.to_string(),
        Value::Text(text) => (*text).to_string(),
        Value::Map(map) => {
            let mut out = String::new();
            for (key, entry) in map.iter() {
                out.push_str(key);
                out.push('=');
                out.push_str(entry);
            }
            out
        }
        Value::Bool(_) | Value::List(_) | Value::Record(_) => String::new(),
    }
}

///
/// TESTS
///
