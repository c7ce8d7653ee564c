//! Ingest command implementation.
//!
//! Runs the full pipeline for one region and prints the run summary.

use anyhow::{Context, Result};
use std::time::Duration;
use worldworth_lib::prelude::*;

/// Collect the sales for a region and deliver them to the sink.
///
/// Skipped rows and failed deliveries are reported in the summary; they do
/// not make the command fail.
pub(crate) async fn ingest(
    registry: &SourceRegistry,
    region: &str,
    sink_url: &str,
    concurrency: usize,
    timeout: Duration,
    quiet: bool,
) -> Result<()> {
    let fetcher = FetchClient::new(ClientConfig {
        timeout,
        ..Default::default()
    })
    .context("Failed to create source client")?;

    let sink = SinkClient::new(
        sink_url,
        SinkConfig {
            timeout,
            ..Default::default()
        },
    )
    .context("Failed to create sink client")?;

    let config = PipelineConfig {
        delivery_concurrency: concurrency,
    };
    let pipeline = Pipeline::new(registry, fetcher, sink, config);
    let summary = pipeline.run(region).await;

    if !quiet {
        println!("{summary}");
    }

    Ok(())
}
