//! Fetch, parse and deliver pipeline for the worldworth ingester.
//!
//! A run walks one region through a fixed sequence of [`RunStage`]s:
//!
//! ```text
//! Idle -> SourceLookup -> Retrieving -> Parsing -> Done
//!               \              \
//!                +-> Aborted <--+
//! ```
//!
//! - [`Collector::collect`] - Lookup, retrieval and parsing into a [`Batch`]
//! - [`Pipeline::deliver`] - One sink call per record into a [`DeliveryReport`]
//! - [`Pipeline::run`] - Both, summarised as a [`RunSummary`]
//!
//! Nothing here returns an error. Unknown regions and failed retrievals abort
//! with an empty batch, bad rows are skipped and counted, and failed
//! deliveries are reported per record.

#![doc(issue_tracker_base_url = "https://github.com/worldworth/worldworth/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod batch;
mod collector;
mod delivery;
mod pipeline;
mod stage;

pub use batch::Batch;
pub use collector::Collector;
pub use delivery::{DeliveryOutcome, DeliveryReport};
pub use pipeline::{Pipeline, PipelineConfig, RunSummary};
pub use stage::RunStage;
