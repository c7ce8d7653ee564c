//! Pipeline driver.

use futures::stream::{self, StreamExt};
use tracing::{info, instrument, warn};
use worldworth_fetch::FetchClient;
use worldworth_sink::SinkClient;
use worldworth_sources::SourceRegistry;
use worldworth_types::SkipCounts;

use crate::{Batch, Collector, DeliveryOutcome, DeliveryReport};

/// Configuration for the pipeline driver.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Maximum sink calls in flight at once. `1` delivers sequentially.
    pub delivery_concurrency: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            delivery_concurrency: 1,
        }
    }
}

/// Drives lookup, retrieval, parsing and delivery for a region.
#[derive(Debug)]
pub struct Pipeline<'r> {
    collector: Collector<'r>,
    sink: SinkClient,
    config: PipelineConfig,
}

impl<'r> Pipeline<'r> {
    /// Creates a new pipeline.
    #[must_use]
    pub const fn new(
        registry: &'r SourceRegistry,
        fetcher: FetchClient,
        sink: SinkClient,
        config: PipelineConfig,
    ) -> Self {
        Self {
            collector: Collector::new(registry, fetcher),
            sink,
            config,
        }
    }

    /// Returns the source registry.
    #[must_use]
    pub const fn registry(&self) -> &'r SourceRegistry {
        self.collector.registry()
    }

    /// Returns the pipeline configuration.
    #[must_use]
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Looks up, retrieves and parses the source for `region`.
    ///
    /// See [`Collector::collect`].
    pub async fn collect(&self, region: &str) -> Batch {
        self.collector.collect(region).await
    }

    /// Delivers every record in `batch` to the sink.
    ///
    /// A failed delivery never stops the remaining ones. Up to
    /// [`PipelineConfig::delivery_concurrency`] calls run at once, and the
    /// report lists outcomes in batch order.
    #[instrument(skip_all, fields(region = batch.region(), records = batch.len()))]
    pub async fn deliver(&self, batch: &Batch) -> DeliveryReport {
        let concurrency = self.config.delivery_concurrency.max(1);

        let outcomes: Vec<DeliveryOutcome> = stream::iter(batch.records().iter().enumerate())
            .map(|(index, record)| async move {
                let result = self.sink.deliver(record).await;
                match &result {
                    Ok(()) => info!(index, property_id = record.property_id(), "delivered"),
                    Err(e) => {
                        warn!(index, property_id = record.property_id(), error = %e, "delivery failed");
                    }
                }
                DeliveryOutcome::new(index, record.property_id(), result)
            })
            .buffered(concurrency)
            .collect()
            .await;

        DeliveryReport::new(outcomes)
    }

    /// Collects and delivers the batch for `region`.
    pub async fn run(&self, region: &str) -> RunSummary {
        let batch = self.collect(region).await;
        let report = self.deliver(&batch).await;
        let summary = RunSummary::new(&batch, &report);
        info!(%summary, "run finished");
        summary
    }
}

/// Counts reported at the end of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Region the run was for.
    pub region: String,
    /// Records parsed from the source.
    pub fetched: usize,
    /// Rows dropped during parsing, by reason.
    pub skipped: SkipCounts,
    /// Records the sink accepted.
    pub delivered: usize,
    /// Records the sink did not accept.
    pub failed: usize,
    /// Why the run aborted, if it did.
    pub aborted: Option<String>,
}

impl RunSummary {
    /// Summarises a batch and its delivery report.
    #[must_use]
    pub fn new(batch: &Batch, report: &DeliveryReport) -> Self {
        Self {
            region: batch.region().to_string(),
            fetched: batch.len(),
            skipped: batch.skip_counts(),
            delivered: report.delivered(),
            failed: report.failed(),
            aborted: batch.aborted_reason().map(ToString::to_string),
        }
    }

    /// Returns true if the run aborted.
    #[must_use]
    pub const fn is_aborted(&self) -> bool {
        self.aborted.is_some()
    }
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(reason) = &self.aborted {
            return write!(f, "{}: aborted ({reason})", self.region);
        }
        write!(
            f,
            "{}: {} records fetched, {}, {} delivered, {} failed",
            self.region, self.fetched, self.skipped, self.delivered, self.failed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use worldworth_types::{IngestError, SkipReason};

    #[test]
    fn test_pipeline_config_default() {
        assert_eq!(PipelineConfig::default().delivery_concurrency, 1);
    }

    #[test]
    fn test_summary_display() {
        let mut skipped = SkipCounts::default();
        skipped.record(SkipReason::InvalidPrice);
        let summary = RunSummary {
            region: "US".to_string(),
            fetched: 3,
            skipped,
            delivered: 2,
            failed: 1,
            aborted: None,
        };
        assert_eq!(
            summary.to_string(),
            "US: 3 records fetched, 1 skipped (0 malformed, 1 invalid price, 0 invalid date), 2 delivered, 1 failed"
        );
    }

    #[test]
    fn test_summary_display_aborted() {
        let batch = Batch::aborted("Mars", IngestError::UnknownRegion("Mars".into()));
        let summary = RunSummary::new(&batch, &DeliveryReport::default());
        assert!(summary.is_aborted());
        assert_eq!(summary.to_string(), "Mars: aborted (Unknown region: Mars)");
    }
}
