//! Sources command implementation.

use anyhow::Result;
use worldworth_lib::prelude::*;

use crate::display::write_sources;

/// List the configured regions.
pub(crate) fn list_sources(registry: &SourceRegistry) -> Result<()> {
    if registry.is_empty() {
        println!("No sources configured.");
        return Ok(());
    }

    let stdout = std::io::stdout();
    write_sources(registry, stdout.lock())?;
    Ok(())
}
