//! Normalize Tools
//!
//! Turns a possibly partial scrape result into predictable values: a clean
//! metadata mapping, bounded text previews, bounded list previews and
//! lookups that tolerate field renames.

pub mod types;
mod utils;

pub use types::*;
use utils::*;
pub use utils::value_text;

use crate::tools::scrape::RawMetadata;
use crate::tools::types::Metadata;
use serde_json::Value;

/// Placeholder shown for absent or empty text.
pub const NO_CONTENT: &str = "(no content)";
/// Appended to previews that were cut short.
pub const TRUNCATION_MARKER: &str = "...";
pub const DEFAULT_PREVIEW_LEN: usize = 500;

/// Spellings of the raw HTML field, in lookup order.
pub const RAW_HTML_KEYS: &[&str] = &["rawHtml", "raw_html"];
/// Spellings of the credits field, in lookup order.
pub const CREDITS_KEYS: &[&str] = &["creditsUsed", "credits_used"];

/// Normalize raw metadata into a flat mapping.
///
/// Never fails: input that cannot be read as a mapping yields an empty one.
/// The result holds no `null` values and no values whose text is blank.
pub fn normalize_metadata(raw: Option<RawMetadata<'_>>) -> Metadata {
    let Some(raw) = raw else {
        return Metadata::new();
    };

    let map = match raw {
        RawMetadata::Typed(typed) => typed_to_map(typed),
        RawMetadata::Mapping(map) => map
            .iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect(),
        RawMetadata::Other(value) => value_to_map(value),
    };

    map.into_iter()
        .filter(|(_, v)| !is_blank(v))
        .collect()
}

/// Bounded text preview.
///
/// Absent or empty text gives [`NO_CONTENT`]. Text longer than `max_len`
/// characters is cut to `max_len` characters followed by
/// [`TRUNCATION_MARKER`].
pub fn safe_preview(text: Option<&str>, max_len: usize) -> String {
    let text = match text {
        Some(t) if !t.is_empty() => t,
        _ => return NO_CONTENT.to_string(),
    };

    match text.char_indices().nth(max_len) {
        Some((cut, _)) => format!("{}{}", &text[..cut], TRUNCATION_MARKER),
        None => text.to_string(),
    }
}

/// First `limit` items plus how many were left out.
pub fn preview_sequence<T>(items: Option<&[T]>, limit: usize) -> SequencePreview<'_, T> {
    match items {
        Some(items) if !items.is_empty() => {
            let shown = &items[..items.len().min(limit)];
            SequencePreview {
                items: shown,
                remaining: items.len() - shown.len(),
                present: true,
            }
        }
        _ => SequencePreview::empty(),
    }
}

/// Value under the first candidate key that holds a non-null value.
pub fn find_field<'a>(map: &'a Metadata, candidates: &[&str]) -> Option<&'a Value> {
    candidates
        .iter()
        .find_map(|key| map.get(*key).filter(|v| !v.is_null()))
}

/// Like [`find_field`], falling back to `default` when no candidate matches.
pub fn resolve_field(map: &Metadata, candidates: &[&str], default: Value) -> Value {
    find_field(map, candidates).cloned().unwrap_or(default)
}

/// First `max_chars` characters of `text`, without any marker.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => &text[..cut],
        None => text,
    }
}
