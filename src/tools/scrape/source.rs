use super::types::{Document, RawMetadata, ScrapeResult};
use crate::tools::normalize::{find_field, RAW_HTML_KEYS};
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Read access to the fields of a scrape result, whatever its shape.
///
/// Every accessor returns `None` when the field is absent or unusable;
/// callers never need to know which upstream representation they hold.
pub trait ScrapeSource {
    fn markdown(&self) -> Option<&str>;
    fn html(&self) -> Option<&str>;
    fn raw_html(&self) -> Option<&str>;
    fn links(&self) -> Option<Cow<'_, [String]>>;
    fn images(&self) -> Option<Cow<'_, [String]>>;
    fn metadata(&self) -> Option<RawMetadata<'_>>;
}

impl ScrapeSource for Document {
    fn markdown(&self) -> Option<&str> {
        self.markdown.as_deref()
    }

    fn html(&self) -> Option<&str> {
        self.html.as_deref()
    }

    fn raw_html(&self) -> Option<&str> {
        self.raw_html.as_deref()
    }

    fn links(&self) -> Option<Cow<'_, [String]>> {
        self.links.as_deref().map(Cow::Borrowed)
    }

    fn images(&self) -> Option<Cow<'_, [String]>> {
        self.images.as_deref().map(Cow::Borrowed)
    }

    fn metadata(&self) -> Option<RawMetadata<'_>> {
        self.metadata.as_ref().map(RawMetadata::Typed)
    }
}

impl ScrapeSource for Map<String, Value> {
    fn markdown(&self) -> Option<&str> {
        self.get("markdown").and_then(Value::as_str)
    }

    fn html(&self) -> Option<&str> {
        self.get("html").and_then(Value::as_str)
    }

    fn raw_html(&self) -> Option<&str> {
        find_field(self, RAW_HTML_KEYS).and_then(Value::as_str)
    }

    fn links(&self) -> Option<Cow<'_, [String]>> {
        string_list(self.get("links"))
    }

    fn images(&self) -> Option<Cow<'_, [String]>> {
        string_list(self.get("images"))
    }

    fn metadata(&self) -> Option<RawMetadata<'_>> {
        match self.get("metadata")? {
            Value::Null => None,
            Value::Object(map) => Some(RawMetadata::Mapping(map)),
            other => Some(RawMetadata::Other(other)),
        }
    }
}

impl ScrapeSource for ScrapeResult {
    fn markdown(&self) -> Option<&str> {
        match self {
            ScrapeResult::Document(d) => d.markdown(),
            ScrapeResult::Mapping(m) => m.markdown(),
        }
    }

    fn html(&self) -> Option<&str> {
        match self {
            ScrapeResult::Document(d) => d.html(),
            ScrapeResult::Mapping(m) => m.html(),
        }
    }

    fn raw_html(&self) -> Option<&str> {
        match self {
            ScrapeResult::Document(d) => d.raw_html(),
            ScrapeResult::Mapping(m) => m.raw_html(),
        }
    }

    fn links(&self) -> Option<Cow<'_, [String]>> {
        match self {
            ScrapeResult::Document(d) => d.links(),
            ScrapeResult::Mapping(m) => m.links(),
        }
    }

    fn images(&self) -> Option<Cow<'_, [String]>> {
        match self {
            ScrapeResult::Document(d) => d.images(),
            ScrapeResult::Mapping(m) => m.images(),
        }
    }

    fn metadata(&self) -> Option<RawMetadata<'_>> {
        match self {
            ScrapeResult::Document(d) => d.metadata(),
            ScrapeResult::Mapping(m) => m.metadata(),
        }
    }
}

impl ScrapeResult {
    /// Read the `data` object of a scrape response.
    ///
    /// Tries the typed [`Document`] first and falls back to the plain mapping
    /// when the payload does not fit it. Non-object payloads become an empty
    /// mapping.
    pub fn from_value(data: Value) -> Self {
        match data {
            Value::Object(map) => {
                match serde_json::from_value::<Document>(Value::Object(map.clone())) {
                    Ok(doc) => ScrapeResult::Document(doc),
                    Err(e) => {
                        tracing::debug!(error = %e, "document did not match typed shape, using mapping");
                        ScrapeResult::Mapping(map)
                    }
                }
            }
            other => {
                tracing::warn!(kind = value_kind(&other), "scrape data is not an object");
                ScrapeResult::Mapping(Map::new())
            }
        }
    }
}

/// Only string entries are kept; anything else in the list is skipped.
fn string_list(value: Option<&Value>) -> Option<Cow<'_, [String]>> {
    let items = value?.as_array()?;
    Some(Cow::Owned(
        items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
    ))
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
