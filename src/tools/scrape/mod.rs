//! Scrape Tools
//!
//! Talks to the Firecrawl scrape API and exposes the result through
//! [`ScrapeSource`], so the rest of the crate never depends on which shape
//! the response came back in.

mod client;
mod source;
mod tests;

pub mod types;

pub use client::FirecrawlClient;
pub use source::ScrapeSource;
pub use types::*;

use crate::error::Result;
use async_trait::async_trait;

/// Anything that can scrape one URL in the requested formats.
///
/// # Examples
/// ```no_run
/// use firecrawl_snapshot::config::Config;
/// use firecrawl_snapshot::tools::scrape::{FirecrawlClient, Format, ScrapeSource, Scraper};
///
/// # async fn example() -> firecrawl_snapshot::Result<()> {
/// let client = FirecrawlClient::new(&Config::from_env()?)?;
/// let result = client.scrape("https://example.com", &Format::ALL).await?;
/// println!("{:?}", result.markdown());
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait Scraper: Send + Sync {
    async fn scrape(&self, url: &str, formats: &[Format]) -> Result<ScrapeResult>;
}
