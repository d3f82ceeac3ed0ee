use anyhow::Result;
use thread_summary::config::SummaryConfig;

use super::load_catalog;

pub fn run(cfg: &SummaryConfig) -> Result<()> {
    let catalog = load_catalog(cfg)?;

    println!("{:<28}  {}", "KEY", "TEMPLATE");
    println!("{}", "-".repeat(72));
    for (key, text) in catalog.entries() {
        let marker = if cfg.templates.contains_key(key.as_str()) { "*" } else { " " };
        println!("{:<28}{} {}", key.as_str(), marker, text);
    }
    println!("\n* = overridden in config");

    Ok(())
}
