use crate::api::{self, SnapshotRequest, DEFAULT_OUTPUT_FILE, DEFAULT_TARGET_URL};
use crate::config::Config;
use crate::tools::scrape::{FirecrawlClient, Format};
use anyhow::Context;
use clap::{ArgAction, Parser};
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "firecrawl-snapshot",
    version,
    about = "Scrape one page in every format, print a report, save a JSON snapshot"
)]
pub struct Cli {
    /// URL to scrape
    #[arg(default_value = DEFAULT_TARGET_URL)]
    url: String,
    /// Snapshot file (overwritten if it exists)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,
    /// Format to request; repeat for several (default: all)
    #[arg(short = 'f', long = "format", value_name = "FORMAT")]
    formats: Vec<Format>,
    /// More logging on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

pub fn run() {
    let cli = Cli::parse();
    if let Err(e) = crate::services::init_logging(cli.verbose) {
        eprintln!("Warning: {e}");
    }

    if let Err(e) = run_with_args(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

// Exposed function for delegation from other front-ends

pub fn run_with_args(cli: Cli) -> anyhow::Result<()> {
    // The credential is checked before any network activity.
    let config = Config::from_env()?;
    let client = FirecrawlClient::new(&config).context("failed to build scrape client")?;

    let request = SnapshotRequest::new(cli.url)
        .with_output(cli.output)
        .with_formats(cli.formats);

    let runtime = tokio::runtime::Runtime::new().context("failed to create async runtime")?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    runtime
        .block_on(api::run(&client, &request, &mut out))
        .with_context(|| format!("snapshot of {} failed", request.url))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["firecrawl-snapshot"]).unwrap();
        assert_eq!(cli.url, DEFAULT_TARGET_URL);
        assert_eq!(cli.output, PathBuf::from(DEFAULT_OUTPUT_FILE));
        assert!(cli.formats.is_empty());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn explicit_args() {
        let cli = Cli::try_parse_from([
            "firecrawl-snapshot",
            "https://example.com",
            "-o",
            "out/page.json",
            "-f",
            "markdown",
            "--format",
            "rawHtml",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.url, "https://example.com");
        assert_eq!(cli.output, PathBuf::from("out/page.json"));
        assert_eq!(cli.formats, vec![Format::Markdown, Format::RawHtml]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn unknown_format_rejected() {
        assert!(Cli::try_parse_from(["firecrawl-snapshot", "-f", "pdf"]).is_err());
    }
}
