//! Source lookup, retrieval and parsing.

use tracing::{debug, info, instrument, warn};
use worldworth_fetch::{FetchClient, parse_source};
use worldworth_sources::SourceRegistry;
use worldworth_types::IngestError;

use crate::{Batch, RunStage};

/// Turns a region into a [`Batch`] of validated records.
///
/// This is the delivery-free half of a [`Pipeline`](crate::Pipeline).
#[derive(Debug)]
pub struct Collector<'r> {
    registry: &'r SourceRegistry,
    fetcher: FetchClient,
}

impl<'r> Collector<'r> {
    /// Creates a new collector.
    #[must_use]
    pub const fn new(registry: &'r SourceRegistry, fetcher: FetchClient) -> Self {
        Self { registry, fetcher }
    }

    /// Returns the source registry.
    #[must_use]
    pub const fn registry(&self) -> &'r SourceRegistry {
        self.registry
    }

    /// Looks up, retrieves and parses the source for `region`.
    ///
    /// An unknown region aborts before any network call, and a failed
    /// retrieval aborts before any parsing; both yield an empty batch. Rows
    /// that fail to parse are skipped and counted.
    #[instrument(skip(self))]
    pub async fn collect(&self, region: &str) -> Batch {
        let mut stage = RunStage::Idle;

        advance(&mut stage, RunStage::SourceLookup);
        let url = match self.registry.lookup(region) {
            Ok(url) => url,
            Err(e) => {
                warn!(error = %e, "source lookup failed");
                advance(&mut stage, RunStage::Aborted);
                return Batch::aborted(region, e);
            }
        };

        advance(&mut stage, RunStage::Retrieving);
        let text = match self.fetcher.retrieve(url).await {
            Ok(text) => text,
            Err(e) => {
                warn!(url, error = %e, "failed to download source");
                advance(&mut stage, RunStage::Aborted);
                return Batch::aborted(region, IngestError::Transport(e.to_string()));
            }
        };

        advance(&mut stage, RunStage::Parsing);
        let mut records = Vec::new();
        let mut skipped = Vec::new();
        for outcome in parse_source(&text) {
            match outcome {
                Ok(record) => records.push(record),
                Err(row) => {
                    debug!(row = row.row, reason = %row.reason, detail = %row.detail, "row skipped");
                    skipped.push(row);
                }
            }
        }

        let batch = Batch::completed(region, records, skipped);
        if batch.skip_counts().total() > 0 {
            warn!(summary = %batch.skip_counts(), "rows skipped while parsing");
        }
        info!(records = batch.len(), "batch collected");

        advance(&mut stage, RunStage::Done);
        batch
    }
}

/// Moves `stage` to `next`, logging the transition.
fn advance(stage: &mut RunStage, next: RunStage) {
    debug_assert!(stage.can_advance_to(next), "illegal transition {stage} -> {next}");
    debug!(from = %stage, to = %next, "stage transition");
    *stage = next;
}

#[cfg(test)]
mod tests {
    use super::*;
    use worldworth_sources::SourceEntry;

    #[test]
    fn test_advance_updates_stage() {
        let mut stage = RunStage::Idle;
        advance(&mut stage, RunStage::SourceLookup);
        advance(&mut stage, RunStage::Aborted);
        assert_eq!(stage, RunStage::Aborted);
    }

    #[tokio::test]
    async fn test_unknown_region_aborts_without_fetching() {
        let registry =
            SourceRegistry::from_entries([SourceEntry::new("US", "http://127.0.0.1:9/us.csv")])
                .unwrap();
        let collector = Collector::new(&registry, FetchClient::with_defaults().unwrap());

        let batch = collector.collect("us").await;

        assert_eq!(batch.stage(), RunStage::Aborted);
        assert!(matches!(
            batch.aborted_reason(),
            Some(IngestError::UnknownRegion(r)) if r == "us"
        ));
    }
}
