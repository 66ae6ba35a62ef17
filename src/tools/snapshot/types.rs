use crate::tools::types::Metadata;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What gets persisted for one scrape run.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OutputSnapshot {
    pub url: String,
    pub metadata: Metadata,
    /// Full markdown, never truncated.
    pub markdown: Option<String>,
    /// First [`super::SNAPSHOT_TEXT_LIMIT`] characters.
    pub html: Option<String>,
    /// First [`super::SNAPSHOT_TEXT_LIMIT`] characters.
    pub raw_html: Option<String>,
    #[serde(default)]
    pub links: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    /// Reported credits, or the literal `"N/A"`.
    pub credits_used: Value,
}
