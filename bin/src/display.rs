//! Display utilities and output formatting for the worldworth CLI.

use anyhow::Result;
use std::io::Write;
use worldworth_lib::prelude::*;

/// Write records as newline-delimited JSON, one sink payload per line.
pub(crate) fn write_ndjson<W: Write>(records: &[PriceRecord], mut writer: W) -> Result<()> {
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the source table, sorted by region.
pub(crate) fn write_sources<W: Write>(registry: &SourceRegistry, mut writer: W) -> Result<()> {
    writeln!(writer, "{:<10} {:<60} DESCRIPTION", "REGION", "URL")?;
    writeln!(writer, "{}", "-".repeat(90))?;

    for region in registry.regions() {
        if let Some(entry) = registry.get(region) {
            writeln!(
                writer,
                "{:<10} {:<60} {}",
                entry.region(),
                entry.url(),
                entry.description().unwrap_or("")
            )?;
        }
    }

    writeln!(writer, "\nTotal: {} sources", registry.len())?;
    Ok(())
}
