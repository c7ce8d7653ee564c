//! CLI command implementations.

pub(crate) mod ingest;
pub(crate) mod preview;
pub(crate) mod sources;
