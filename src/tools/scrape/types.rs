use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Content format requested from the scrape API.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Format {
    Markdown,
    Html,
    RawHtml,
    Links,
    Images,
}

impl Format {
    /// Every format, in the order they are requested by default.
    pub const ALL: [Format; 5] = [
        Format::Markdown,
        Format::Html,
        Format::RawHtml,
        Format::Links,
        Format::Images,
    ];

    /// Wire name of the format.
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Markdown => "markdown",
            Format::Html => "html",
            Format::RawHtml => "rawHtml",
            Format::Links => "links",
            Format::Images => "images",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "markdown" | "md" => Ok(Format::Markdown),
            "html" => Ok(Format::Html),
            "rawhtml" => Ok(Format::RawHtml),
            "links" => Ok(Format::Links),
            "images" => Ok(Format::Images),
            _ => Err(format!(
                "unknown format {s:?} (expected one of: markdown, html, rawHtml, links, images)"
            )),
        }
    }
}

/// Typed page metadata as returned by the v2 API.
///
/// Serializing skips unset fields, so `serde_json::to_value` yields only the
/// keys the API actually filled in. Keys this struct does not name survive
/// through `extra`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    #[serde(
        default,
        rename = "sourceURL",
        skip_serializing_if = "Option::is_none"
    )]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scrape_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits_used: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Typed scrape document (the `data` object of a scrape response).
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub markdown: Option<String>,
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default, alias = "raw_html")]
    pub raw_html: Option<String>,
    #[serde(default)]
    pub links: Option<Vec<String>>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub metadata: Option<DocumentMetadata>,
}

/// One scrape result, in whichever shape the API response could be read as.
#[derive(Debug, Clone, PartialEq)]
pub enum ScrapeResult {
    Document(Document),
    Mapping(Map<String, Value>),
}

/// Metadata as found on a scrape result, before normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawMetadata<'a> {
    /// Typed metadata that serializes itself.
    Typed(&'a DocumentMetadata),
    /// Plain key-value mapping.
    Mapping(&'a Map<String, Value>),
    /// Anything else; converted on a best-effort basis.
    Other(&'a Value),
}

#[derive(Serialize, Debug)]
pub(crate) struct ScrapeRequest<'a> {
    pub url: &'a str,
    pub formats: &'a [Format],
}

#[derive(Deserialize, Debug)]
pub(crate) struct ScrapeResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
}
