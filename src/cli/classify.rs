use anyhow::Result;
use thread_summary::classify;

use super::RecordArgs;

pub fn run(record: &RecordArgs) -> Result<()> {
    let meta = record.to_metadata()?;
    println!("{}", classify(&meta));
    Ok(())
}
