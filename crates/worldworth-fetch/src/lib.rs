//! Source retrieval and CSV row parsing for the worldworth ingester.
//!
//! This crate provides the first half of the ingestion pipeline:
//!
//! - [`FetchClient`] - Single-attempt HTTP retrieval of a source export
//! - [`parse::parse_source`] - Header-skipping, quote-aware CSV tokenisation
//! - [`parse::parse_row`] - Positional validation of one row into a record

#![doc(issue_tracker_base_url = "https://github.com/worldworth/worldworth/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
pub mod parse;

pub use client::{ClientConfig, FetchClient, FetchError};
pub use parse::{parse_date, parse_price, parse_row, parse_source};
