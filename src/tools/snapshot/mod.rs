//! Snapshot Tools

pub mod types;

pub use types::*;

use crate::error::Result;
use crate::tools::normalize::{normalize_metadata, resolve_field, truncate_chars, CREDITS_KEYS};
use crate::tools::scrape::ScrapeSource;
use crate::tools::types::Metadata;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// html and rawHtml are cut to this many characters in the snapshot.
pub const SNAPSHOT_TEXT_LIMIT: usize = 5000;
/// Stored as `creditsUsed` when the API did not report credits.
pub const CREDITS_NOT_AVAILABLE: &str = "N/A";

/// Credits reported in the metadata, under either spelling.
pub fn credits_used(metadata: &Metadata) -> Value {
    resolve_field(
        metadata,
        CREDITS_KEYS,
        Value::String(CREDITS_NOT_AVAILABLE.to_string()),
    )
}

impl OutputSnapshot {
    /// Build the snapshot for `url` from any scrape result.
    pub fn build<S: ScrapeSource + ?Sized>(url: &str, source: &S) -> Self {
        let metadata = normalize_metadata(source.metadata());
        let credits_used = credits_used(&metadata);

        Self {
            url: url.to_string(),
            markdown: source.markdown().map(str::to_string),
            html: bounded(source.html()),
            raw_html: bounded(source.raw_html()),
            links: source.links().map(|l| l.into_owned()).unwrap_or_default(),
            images: source.images().map(|i| i.into_owned()).unwrap_or_default(),
            credits_used,
            metadata,
        }
    }
}

fn bounded(text: Option<&str>) -> Option<String> {
    match text {
        Some(t) if !t.is_empty() => Some(truncate_chars(t, SNAPSHOT_TEXT_LIMIT).to_string()),
        _ => None,
    }
}

/// Write the snapshot as pretty JSON, replacing any existing file.
///
/// Non-ASCII text is written as-is.
pub fn write_snapshot(path: &Path, snapshot: &OutputSnapshot) -> Result<()> {
    let mut json = serde_json::to_string_pretty(snapshot)?;
    json.push('\n');
    fs::write(path, &json)?;
    tracing::info!(path = %path.display(), bytes = json.len(), "snapshot written");
    Ok(())
}
