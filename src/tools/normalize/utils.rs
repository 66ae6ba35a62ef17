use crate::tools::scrape::DocumentMetadata;
use crate::tools::types::Metadata;
use serde_json::Value;
use std::borrow::Cow;

pub(super) fn typed_to_map(typed: &DocumentMetadata) -> Metadata {
    match serde_json::to_value(typed) {
        Ok(Value::Object(map)) => map,
        Ok(_) => Metadata::new(),
        Err(e) => {
            tracing::debug!(error = %e, "typed metadata did not serialize");
            Metadata::new()
        }
    }
}

/// Best-effort conversion of an arbitrary value into a mapping.
///
/// Objects are copied; arrays of `[key, value]` pairs are collected. Anything
/// else (or an array holding a non-pair) gives an empty mapping.
pub(super) fn value_to_map(value: &Value) -> Metadata {
    match value {
        Value::Object(map) => map.clone(),
        Value::Array(items) => {
            let pairs: Option<Metadata> = items.iter().map(pair_entry).collect();
            pairs.unwrap_or_else(|| {
                tracing::debug!("metadata array is not a list of pairs");
                Metadata::new()
            })
        }
        _ => {
            tracing::debug!("metadata is not a mapping");
            Metadata::new()
        }
    }
}

fn pair_entry(item: &Value) -> Option<(String, Value)> {
    match item.as_array()?.as_slice() {
        [Value::String(key), value] => Some((key.clone(), value.clone())),
        _ => None,
    }
}

/// Text form of a value: strings as-is, everything else as JSON.
pub fn value_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}

pub(super) fn is_blank(value: &Value) -> bool {
    value.is_null() || value_text(value).trim().is_empty()
}
