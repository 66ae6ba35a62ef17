//! Report Tools
//!
//! Human-readable console summary of one scrape. Previews are bounded; the
//! full values live in the snapshot.


use crate::tools::normalize::{preview_sequence, safe_preview, value_text, DEFAULT_PREVIEW_LEN};
use crate::tools::scrape::ScrapeSource;
use crate::tools::snapshot::OutputSnapshot;
use std::io::{self, Write};

pub const MARKDOWN_PREVIEW_LEN: usize = 800;
pub const LINKS_DISPLAY_CAP: usize = 20;
pub const IMAGES_DISPLAY_CAP: usize = 15;

const RULE_WIDTH: usize = 60;

/// Write the report for `source` (content previews) and `snapshot`
/// (normalized metadata, credits).
pub fn render_report<W, S>(out: &mut W, source: &S, snapshot: &OutputSnapshot) -> io::Result<()>
where
    W: Write + ?Sized,
    S: ScrapeSource + ?Sized,
{
    let rule = "=".repeat(RULE_WIDTH);

    if snapshot.metadata.is_empty() {
        writeln!(out, "Metadata: (none)")?;
    } else {
        writeln!(out, "{rule}\nMETADATA\n{rule}")?;
        for (key, value) in &snapshot.metadata {
            writeln!(out, "  {key}: {}", value_text(value))?;
        }
    }

    writeln!(out, "\n{rule}\nCONTENT\n{rule}")?;

    writeln!(out, "\n--- Markdown (first {MARKDOWN_PREVIEW_LEN} chars) ---")?;
    writeln!(out, "{}", safe_preview(source.markdown(), MARKDOWN_PREVIEW_LEN))?;

    writeln!(out, "\n--- HTML (first {DEFAULT_PREVIEW_LEN} chars) ---")?;
    writeln!(out, "{}", safe_preview(source.html(), DEFAULT_PREVIEW_LEN))?;

    writeln!(out, "\n--- Raw HTML (first {DEFAULT_PREVIEW_LEN} chars) ---")?;
    writeln!(out, "{}", safe_preview(source.raw_html(), DEFAULT_PREVIEW_LEN))?;

    let links = source.links();
    write_list(out, "Links", links.as_deref(), LINKS_DISPLAY_CAP)?;
    let images = source.images();
    write_list(out, "Images", images.as_deref(), IMAGES_DISPLAY_CAP)?;

    writeln!(out, "\n{rule}")?;
    writeln!(out, "Credits used: {}", value_text(&snapshot.credits_used))?;
    writeln!(out, "{rule}")?;
    Ok(())
}

fn write_list<W: Write + ?Sized>(
    out: &mut W,
    label: &str,
    items: Option<&[String]>,
    cap: usize,
) -> io::Result<()> {
    let preview = preview_sequence(items, cap);
    if !preview.present {
        return writeln!(out, "\n--- {label}: (none) ---");
    }

    writeln!(out, "\n--- {label} ({} found) ---", preview.total())?;
    for (i, item) in preview.items.iter().enumerate() {
        writeln!(out, "  {}. {item}", i + 1)?;
    }
    if preview.remaining > 0 {
        writeln!(out, "  ... and {} more", preview.remaining)?;
    }
    Ok(())
}
