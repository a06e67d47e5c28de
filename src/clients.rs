//! Client-list normalization.
//!
//! The `--clientsList` argument arrives as one free-form string, and shells
//! routinely strip the quote characters out of a JSON array before the
//! process ever sees it. Instead of demanding strict JSON, three parsing
//! strategies are tried in order, first match wins:
//!
//! 1. strict JSON array (`["client1", "client2"]`)
//! 2. bracketed pseudo-list (`[client1, client2]`, quotes already eaten)
//! 3. single bare value (`client1`)
//!
//! Whatever strategy matched, the resolved sequence must end up as a
//! non-empty list of non-empty trimmed strings.

use serde_json::Value;
use thiserror::Error;

/// Human-readable guidance attached to every normalization failure.
pub const SUPPORTED_FORMATS: &str =
    "a JSON array of strings, a bracketed comma-separated list, or a single bare value";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error(
        "clients list {raw:?} resolved to an empty list; expected {}",
        SUPPORTED_FORMATS
    )]
    Empty { raw: String },

    #[error(
        "clients list {raw:?} has a non-string element at index {index}; expected {}",
        SUPPORTED_FORMATS
    )]
    NonStringElement { raw: String, index: usize },

    #[error(
        "clients list {raw:?} has an empty element at index {index}; expected {}",
        SUPPORTED_FORMATS
    )]
    EmptyElement { raw: String, index: usize },
}

/// Resolve a raw `--clientsList` value into an ordered, validated list of
/// client identifiers. Order is preserved; duplicates are allowed.
pub fn normalize_clients(raw: &str) -> Result<Vec<String>, NormalizeError> {
    if let Some(values) = parse_json_array(raw) {
        return validate_json_elements(raw, &values);
    }

    let items = match parse_bracketed(raw) {
        Some(items) => items,
        None => parse_bare(raw),
    };

    if items.is_empty() {
        return Err(NormalizeError::Empty {
            raw: raw.to_string(),
        });
    }
    Ok(items)
}

/// Strategy 1: strict JSON. Matches only when the input parses to an array;
/// any other JSON value falls through to the later strategies.
fn parse_json_array(raw: &str) -> Option<Vec<Value>> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(values)) => Some(values),
        _ => None,
    }
}

/// Strategy 2: bracketed pseudo-list. The shell has usually eaten the quotes
/// by the time we see `[client1, client2]`, so split the bracket interior on
/// commas and strip one leftover quote layer per item. Items that trim to
/// nothing are dropped.
///
/// Known limitation: a client identifier that itself contains a comma cannot
/// be expressed through this path, since the split is a naive comma split.
fn parse_bracketed(raw: &str) -> Option<Vec<String>> {
    let trimmed = raw.trim();
    let inner = trimmed.strip_prefix('[')?.strip_suffix(']')?;
    if inner.trim().is_empty() {
        return Some(Vec::new());
    }
    Some(
        inner
            .split(',')
            .map(|item| strip_quotes(item.trim()).trim().to_string())
            .filter(|item| !item.is_empty())
            .collect(),
    )
}

/// Strategy 3: single bare value.
fn parse_bare(raw: &str) -> Vec<String> {
    let value = strip_quotes(raw.trim()).trim();
    if value.is_empty() {
        Vec::new()
    } else {
        vec![value.to_string()]
    }
}

/// On the strict-JSON path nothing is dropped: every element must already be
/// a string that trims to something non-empty.
fn validate_json_elements(raw: &str, values: &[Value]) -> Result<Vec<String>, NormalizeError> {
    let mut clients = Vec::with_capacity(values.len());
    for (index, value) in values.iter().enumerate() {
        let text = value.as_str().ok_or_else(|| NormalizeError::NonStringElement {
            raw: raw.to_string(),
            index,
        })?;
        let text = text.trim();
        if text.is_empty() {
            return Err(NormalizeError::EmptyElement {
                raw: raw.to_string(),
                index,
            });
        }
        clients.push(text.to_string());
    }
    if clients.is_empty() {
        return Err(NormalizeError::Empty {
            raw: raw.to_string(),
        });
    }
    Ok(clients)
}

/// Strip one layer of matching surrounding single or double quotes.
fn strip_quotes(s: &str) -> &str {
    if s.len() >= 2 {
        let bytes = s.as_bytes();
        let (first, last) = (bytes[0], bytes[s.len() - 1]);
        if (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'') {
            return &s[1..s.len() - 1];
        }
    }
    s
}
