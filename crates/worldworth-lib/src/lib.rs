//! Fetch, validate and forward government real-estate sale records.
//!
//! This is a facade crate that re-exports functionality from the worldworth
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```no_run
//! use worldworth_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let registry = SourceRegistry::global();
//!     let fetcher = FetchClient::with_defaults()?;
//!     let sink = SinkClient::with_defaults(DEFAULT_SINK_URL)?;
//!
//!     let pipeline = Pipeline::new(registry, fetcher, sink, PipelineConfig::default());
//!     let summary = pipeline.run("US").await;
//!     println!("{summary}");
//!
//!     Ok(())
//! }
//! ```

#![doc(issue_tracker_base_url = "https://github.com/worldworth/worldworth/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use worldworth_types::*;

// Re-export source registry
pub use worldworth_sources::{SourceEntry, SourceRegistry};

// Re-export retrieval and parsing
#[cfg(feature = "fetch")]
pub use worldworth_fetch::{
    ClientConfig, FetchClient, FetchError, parse, parse_date, parse_price, parse_row,
    parse_source,
};

// Re-export delivery
#[cfg(feature = "sink")]
pub use worldworth_sink::{DEFAULT_SINK_URL, DeliveryError, SinkClient, SinkConfig};

// Re-export the driver
#[cfg(feature = "pipeline")]
pub use worldworth_pipeline::{
    Batch, Collector, DeliveryOutcome, DeliveryReport, Pipeline, PipelineConfig, RunStage,
    RunSummary,
};

/// Prelude module for convenient imports.
///
/// ```
/// use worldworth_lib::prelude::*;
/// ```
pub mod prelude {
    pub use worldworth_types::{
        IngestError, PriceRecord, Result, SkipCounts, SkipReason, SkippedRow,
    };

    pub use worldworth_sources::{SourceEntry, SourceRegistry};

    #[cfg(feature = "fetch")]
    pub use worldworth_fetch::{ClientConfig, FetchClient, parse_source};

    #[cfg(feature = "sink")]
    pub use worldworth_sink::{DEFAULT_SINK_URL, SinkClient, SinkConfig};

    #[cfg(feature = "pipeline")]
    pub use worldworth_pipeline::{Batch, Collector, Pipeline, PipelineConfig, RunSummary};
}
