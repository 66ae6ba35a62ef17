use super::types::{Format, ScrapeRequest, ScrapeResponse, ScrapeResult};
use super::Scraper;
use crate::config::Config;
use crate::error::{Result, SnapshotError};
use async_trait::async_trait;
use reqwest::{header, Client};
use url::Url;

const SCRAPE_PATH: &str = "v2/scrape";
const ERROR_BODY_MAX_CHARS: usize = 300;

/// Thin client for the Firecrawl scrape endpoint.
pub struct FirecrawlClient {
    http: Client,
    endpoint: Url,
    api_key: String,
}

impl FirecrawlClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            endpoint: scrape_endpoint(&config.api_url)?,
            api_key: config.api_key.clone(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl Scraper for FirecrawlClient {
    async fn scrape(&self, url: &str, formats: &[Format]) -> Result<ScrapeResult> {
        tracing::info!(%url, endpoint = %self.endpoint, ?formats, "scrape request");

        let response = self
            .http
            .post(self.endpoint.clone())
            .header(header::AUTHORIZATION, format!("Bearer {}", self.api_key))
            .json(&ScrapeRequest { url, formats })
            .send()
            .await?;

        let status = response.status();
        tracing::info!(status = status.as_u16(), "scrape response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SnapshotError::api(status.as_u16(), error_message(&body, status)));
        }

        let parsed: ScrapeResponse = response.json().await?;
        if parsed.success == Some(false) {
            let message = parsed.error.unwrap_or_else(|| "scrape was not successful".into());
            return Err(SnapshotError::api(status.as_u16(), message));
        }

        match parsed.data {
            Some(data) if !data.is_null() => Ok(ScrapeResult::from_value(data)),
            _ => Err(SnapshotError::api(
                status.as_u16(),
                "response contained no data",
            )),
        }
    }
}

/// Join the scrape path onto the configured base URL, keeping any base path.
pub(crate) fn scrape_endpoint(base: &Url) -> Result<Url> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base.join(SCRAPE_PATH)?)
}

/// Prefer the API's own `error` field; otherwise a bounded slice of the body.
pub(crate) fn error_message(body: &str, status: reqwest::StatusCode) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(msg) = value.get("error").and_then(|e| e.as_str()) {
            return msg.to_string();
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string();
    }
    trimmed.chars().take(ERROR_BODY_MAX_CHARS).collect()
}
