//! Per-record delivery outcomes.

use worldworth_sink::DeliveryError;

/// The outcome of delivering one record.
#[derive(Debug)]
pub struct DeliveryOutcome {
    /// Position of the record in its batch.
    pub index: usize,
    /// Property identifier of the record.
    pub property_id: String,
    /// Sink result for this record alone.
    pub result: Result<(), DeliveryError>,
}

impl DeliveryOutcome {
    /// Creates a new delivery outcome.
    #[must_use]
    pub fn new(
        index: usize,
        property_id: impl Into<String>,
        result: Result<(), DeliveryError>,
    ) -> Self {
        Self {
            index,
            property_id: property_id.into(),
            result,
        }
    }

    /// Returns true if the sink accepted the record.
    #[must_use]
    pub const fn is_delivered(&self) -> bool {
        self.result.is_ok()
    }
}

/// Delivery outcomes for a whole batch, in batch order.
#[derive(Debug, Default)]
pub struct DeliveryReport {
    outcomes: Vec<DeliveryOutcome>,
}

impl DeliveryReport {
    /// Creates a report from outcomes already in batch order.
    #[must_use]
    pub const fn new(outcomes: Vec<DeliveryOutcome>) -> Self {
        Self { outcomes }
    }

    /// Returns every outcome.
    #[must_use]
    pub fn outcomes(&self) -> &[DeliveryOutcome] {
        &self.outcomes
    }

    /// Returns the outcomes that failed.
    pub fn failures(&self) -> impl Iterator<Item = &DeliveryOutcome> {
        self.outcomes.iter().filter(|o| !o.is_delivered())
    }

    /// Returns the number of records the sink accepted.
    #[must_use]
    pub fn delivered(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_delivered()).count()
    }

    /// Returns the number of records that failed delivery.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.delivered()
    }

    /// Returns the number of delivery attempts.
    #[must_use]
    pub const fn attempted(&self) -> usize {
        self.outcomes.len()
    }
}
