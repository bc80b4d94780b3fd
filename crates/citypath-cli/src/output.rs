//! Output formatting for search summaries.

use anyhow::{Context, Result};
use clap::ValueEnum;

use citypath_lib::SearchSummary;

/// Console rendering selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable trace and route.
    #[default]
    Text,
    /// Pretty-printed JSON document.
    Json,
}

/// Render a summary in the requested format, newline terminated.
pub fn render_summary(summary: &SearchSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(summary.render_text()),
        OutputFormat::Json => {
            let mut json = summary
                .render_json()
                .context("failed to serialise search summary")?;
            json.push('\n');
            Ok(json)
        }
    }
}
