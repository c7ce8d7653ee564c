//! Preview command implementation.
//!
//! Collects a region's records without delivering them and writes them to
//! stdout as newline-delimited JSON.

use anyhow::{Context, Result};
use std::io::BufWriter;
use std::time::Duration;
use worldworth_lib::prelude::*;

use crate::display::write_ndjson;

/// Collect the sales for a region and print them.
pub(crate) async fn preview(
    registry: &SourceRegistry,
    region: &str,
    limit: Option<usize>,
    timeout: Duration,
) -> Result<()> {
    let fetcher = FetchClient::new(ClientConfig {
        timeout,
        ..Default::default()
    })
    .context("Failed to create source client")?;

    let batch = Collector::new(registry, fetcher).collect(region).await;

    if let Some(reason) = batch.aborted_reason() {
        eprintln!("{region}: aborted ({reason})");
        return Ok(());
    }

    let summary = format!("{region}: {} records, {}", batch.len(), batch.skip_counts());
    let mut records = batch.into_records();
    if let Some(limit) = limit {
        records.truncate(limit);
    }

    let stdout = std::io::stdout();
    write_ndjson(&records, BufWriter::new(stdout.lock()))?;

    eprintln!("{summary}");
    Ok(())
}
