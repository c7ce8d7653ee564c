//! Records collected by one run.

use worldworth_types::{IngestError, PriceRecord, SkipCounts, SkippedRow};

use crate::RunStage;

/// The records collected for one region, in source row order.
#[derive(Debug)]
pub struct Batch {
    region: String,
    records: Vec<PriceRecord>,
    skipped: Vec<SkippedRow>,
    skip_counts: SkipCounts,
    aborted: Option<IngestError>,
}

impl Batch {
    /// Creates a batch from a completed parse.
    #[must_use]
    pub fn completed(
        region: impl Into<String>,
        records: Vec<PriceRecord>,
        skipped: Vec<SkippedRow>,
    ) -> Self {
        let skip_counts = skipped.iter().collect();
        Self {
            region: region.into(),
            records,
            skipped,
            skip_counts,
            aborted: None,
        }
    }

    /// Creates an empty batch for a run that stopped early.
    #[must_use]
    pub fn aborted(region: impl Into<String>, reason: IngestError) -> Self {
        Self {
            region: region.into(),
            records: Vec::new(),
            skipped: Vec::new(),
            skip_counts: SkipCounts::default(),
            aborted: Some(reason),
        }
    }

    /// Returns the region this batch was collected for.
    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Returns the records.
    #[must_use]
    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    /// Consumes the batch, returning its records.
    #[must_use]
    pub fn into_records(self) -> Vec<PriceRecord> {
        self.records
    }

    /// Returns the rows that were dropped during parsing.
    #[must_use]
    pub fn skipped(&self) -> &[SkippedRow] {
        &self.skipped
    }

    /// Returns the per-reason skip tally.
    #[must_use]
    pub const fn skip_counts(&self) -> SkipCounts {
        self.skip_counts
    }

    /// Returns why the run aborted, if it did.
    #[must_use]
    pub const fn aborted_reason(&self) -> Option<&IngestError> {
        self.aborted.as_ref()
    }

    /// Returns true if the run aborted before parsing.
    #[must_use]
    pub const fn is_aborted(&self) -> bool {
        self.aborted.is_some()
    }

    /// Returns the terminal stage the run reached.
    #[must_use]
    pub const fn stage(&self) -> RunStage {
        if self.is_aborted() {
            RunStage::Aborted
        } else {
            RunStage::Done
        }
    }

    /// Returns the number of records.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the batch holds no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use worldworth_types::SkipReason;

    #[test]
    fn test_completed_batch() {
        let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
        let batch = Batch::completed(
            "US",
            vec![PriceRecord::new("P2", "Boston", 500_000.0, date)],
            vec![SkippedRow::new(1, SkipReason::InvalidPrice, "abc")],
        );

        assert_eq!(batch.region(), "US");
        assert_eq!(batch.len(), 1);
        assert!(!batch.is_aborted());
        assert_eq!(batch.stage(), RunStage::Done);
        assert_eq!(batch.skip_counts().invalid_price, 1);
        assert_eq!(batch.skipped().len(), 1);

        let records = batch.into_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].property_id(), "P2");
    }

    #[test]
    fn test_aborted_batch() {
        let batch = Batch::aborted("Mars", IngestError::UnknownRegion("Mars".into()));
        assert!(batch.is_empty());
        assert!(batch.is_aborted());
        assert_eq!(batch.stage(), RunStage::Aborted);
        assert_eq!(batch.skip_counts().total(), 0);
        assert!(matches!(
            batch.aborted_reason(),
            Some(IngestError::UnknownRegion(_))
        ));
    }
}
