//! Error types for worldworth.

use thiserror::Error;

/// Result type alias for worldworth operations.
pub type Result<T> = std::result::Result<T, IngestError>;

/// Errors raised while configuring or running an ingestion.
///
/// Row-level parse failures and per-record delivery failures are not part of
/// this enum; they are absorbed where they happen and only counted.
#[derive(Error, Debug)]
pub enum IngestError {
    /// No source is registered for the region.
    #[error("Unknown region: {0}")]
    UnknownRegion(String),

    /// The same region appears more than once in a source table.
    #[error("Duplicate region in source table: {0}")]
    DuplicateRegion(String),

    /// The source could not be retrieved.
    #[error("Transport error: {0}")]
    Transport(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = IngestError::UnknownRegion("Mars".to_string());
        assert_eq!(err.to_string(), "Unknown region: Mars");

        let err = IngestError::Transport("Server returned 404".to_string());
        assert_eq!(err.to_string(), "Transport error: Server returned 404");
    }
}
