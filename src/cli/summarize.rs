use anyhow::Result;
use thread_summary::config::SummaryConfig;

use super::{format_record, load_catalog, OutputFormat, RecordArgs};

pub fn run(record: &RecordArgs, format: Option<OutputFormat>, cfg: &SummaryConfig) -> Result<()> {
    let meta = record.to_metadata()?;
    let catalog = load_catalog(cfg)?;
    let format = format.unwrap_or(OutputFormat::Markup(cfg.format));

    println!("{}", format_record(&meta, &catalog, format)?);
    Ok(())
}
