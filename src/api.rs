use crate::error::{Result, SnapshotError};
use crate::tools::report::render_report;
use crate::tools::scrape::{Format, Scraper};
use crate::tools::snapshot::{write_snapshot, OutputSnapshot};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;
use url::Url;

pub const DEFAULT_TARGET_URL: &str = "https://labenditaec.com/";
pub const DEFAULT_OUTPUT_FILE: &str = "scrape_output.json";

/// One snapshot run: what to scrape, in which formats, and where to save it.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotRequest {
    pub url: String,
    pub formats: Vec<Format>,
    pub output: PathBuf,
}

impl SnapshotRequest {
    /// Every format, saved to [`DEFAULT_OUTPUT_FILE`].
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            formats: Format::ALL.to_vec(),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_formats(mut self, formats: Vec<Format>) -> Self {
        if !formats.is_empty() {
            self.formats = formats;
        }
        self
    }
}

impl Default for SnapshotRequest {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_URL)
    }
}

/// Only absolute http(s) URLs are sent to the scrape API.
pub fn validate_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| SnapshotError::InvalidUrl(format!("{raw}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(SnapshotError::InvalidUrl(format!(
            "{raw}: unsupported scheme {other:?}"
        ))),
    }
}

/// Scrape, report, save.
///
/// The report is written to `out` before the snapshot file, so a failed
/// write still leaves the report behind. Scrape errors stop the run before
/// anything is written.
pub async fn run<S, W>(scraper: &S, request: &SnapshotRequest, out: &mut W) -> Result<OutputSnapshot>
where
    S: Scraper + ?Sized,
    W: Write + ?Sized,
{
    validate_url(&request.url)?;
    let started = Instant::now();

    let result = scraper.scrape(&request.url, &request.formats).await?;
    let snapshot = OutputSnapshot::build(&request.url, &result);
    tracing::debug!(
        metadata_keys = snapshot.metadata.len(),
        links = snapshot.links.len(),
        images = snapshot.images.len(),
        "snapshot built"
    );

    render_report(out, &result, &snapshot)?;
    write_snapshot(&request.output, &snapshot)?;
    writeln!(out, "\nFull output saved to: {}", request.output.display())?;

    tracing::info!(
        url = %request.url,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "snapshot complete"
    );
    Ok(snapshot)
}
