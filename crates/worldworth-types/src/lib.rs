//! Core types for the worldworth real-estate price ingester.
//!
//! This crate provides the data structures shared by every pipeline stage:
//!
//! - [`PriceRecord`] - A validated property sale ready for delivery
//! - [`SkipReason`] - Why a source row was dropped
//! - [`SkippedRow`] - A dropped row with its position and diagnostic
//! - [`SkipCounts`] - Per-reason tally of dropped rows
//! - [`IngestError`] - Configuration and run-abort errors

#![doc(issue_tracker_base_url = "https://github.com/worldworth/worldworth/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod record;
mod skip;

pub use error::{IngestError, Result};
pub use record::PriceRecord;
pub use skip::{SkipCounts, SkipReason, SkippedRow};
