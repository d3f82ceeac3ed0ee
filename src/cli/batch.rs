use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use rayon::prelude::*;
use thread_summary::config::SummaryConfig;
use thread_summary::text::TemplateCatalog;
use thread_summary::ThreadMetadata;

use super::{format_record, load_catalog, OutputFormat};

/// Summarize JSON records read line by line from stdin. Malformed lines are
/// reported on stderr and skipped; output order follows input order.
pub fn run(format: Option<OutputFormat>, cfg: &SummaryConfig) -> Result<()> {
    let catalog = load_catalog(cfg)?;
    let format = format.unwrap_or(OutputFormat::Markup(cfg.format));

    let stdin = std::io::stdin();
    let lines: Vec<String> = stdin
        .lock()
        .lines()
        .collect::<std::io::Result<_>>()
        .context("Failed to read stdin")?;

    let (out, skipped) = process_lines(&lines, &catalog, format);
    for (line, error) in &skipped {
        tracing::warn!(line = *line, error = %error, "Skipping record");
    }

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    for line in &out {
        writeln!(handle, "{}", line).context("Failed to write stdout")?;
    }
    tracing::info!(records = out.len(), skipped = skipped.len(), "Batch complete");
    Ok(())
}

/// Rendered lines in input order, plus `(line number, error)` for each
/// skipped line. Blank lines are neither rendered nor skipped.
pub fn process_lines(
    lines: &[String],
    catalog: &TemplateCatalog,
    format: OutputFormat,
) -> (Vec<String>, Vec<(usize, String)>) {
    let results: Vec<Option<Result<String, String>>> = lines
        .par_iter()
        .map(|raw| {
            if raw.trim().is_empty() {
                return None;
            }
            let rendered = serde_json::from_str::<ThreadMetadata>(raw)
                .context("Invalid record")
                .and_then(|meta| format_record(&meta, catalog, format));
            Some(rendered.map_err(|e| format!("{:#}", e)))
        })
        .collect();

    let mut out = Vec::with_capacity(results.len());
    let mut skipped = Vec::new();
    for (i, result) in results.into_iter().enumerate() {
        match result {
            Some(Ok(line)) => out.push(line),
            Some(Err(e)) => skipped.push((i + 1, e)),
            None => {}
        }
    }
    (out, skipped)
}
