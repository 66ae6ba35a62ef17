//! Runtime configuration, read once from the environment at startup.

use crate::error::{Result, SnapshotError};
use std::time::Duration;
use url::Url;

pub const API_KEY_VAR: &str = "FIRECRAWL_API_KEY";
pub const API_URL_VAR: &str = "FIRECRAWL_API_URL";
pub const TIMEOUT_VAR: &str = "FIRECRAWL_TIMEOUT_MS";

pub const DEFAULT_API_URL: &str = "https://api.firecrawl.dev";
const DEFAULT_TIMEOUT_MS: u64 = 60_000;

/// Settings handed to [`crate::tools::scrape::FirecrawlClient::new`].
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub api_url: Url,
    pub timeout: Duration,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url.as_str())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    /// Load `.env` (if present) and then read the process environment.
    pub fn from_env() -> Result<Self> {
        // A missing .env is fine; the variables may come from the shell.
        if let Err(e) = dotenv::dotenv() {
            tracing::debug!(error = %e, "no .env file loaded");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                SnapshotError::config(format!(
                    "{API_KEY_VAR} not found in environment or .env. Add your API key from firecrawl.dev"
                ))
            })?;

        let raw_url = lookup(API_URL_VAR)
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = Url::parse(&raw_url)
            .map_err(|e| SnapshotError::config(format!("{API_URL_VAR}={raw_url}: {e}")))?;

        let timeout_ms = match lookup(TIMEOUT_VAR).map(|t| t.trim().to_string()) {
            None => DEFAULT_TIMEOUT_MS,
            Some(t) if t.is_empty() => DEFAULT_TIMEOUT_MS,
            Some(t) => match t.parse::<u64>() {
                Ok(ms) if ms > 0 => ms,
                _ => {
                    return Err(SnapshotError::config(format!(
                        "{TIMEOUT_VAR} must be a positive number of milliseconds, got {t:?}"
                    )))
                }
            },
        };

        Ok(Self {
            api_key,
            api_url,
            timeout: Duration::from_millis(timeout_ms),
        })
    }
}
