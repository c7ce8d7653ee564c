//! Run stages.

/// Stage of a single pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunStage {
    /// Not started.
    Idle,
    /// Resolving the region to a source URL.
    SourceLookup,
    /// Downloading the source export.
    Retrieving,
    /// Turning rows into records.
    Parsing,
    /// Batch complete.
    Done,
    /// Run stopped early with an empty batch.
    Aborted,
}

impl RunStage {
    /// Returns the stage as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::SourceLookup => "source-lookup",
            Self::Retrieving => "retrieving",
            Self::Parsing => "parsing",
            Self::Done => "done",
            Self::Aborted => "aborted",
        }
    }

    /// Returns true if a run may move from this stage to `next`.
    ///
    /// Parsing never aborts; only lookup and retrieval can.
    #[must_use]
    pub const fn can_advance_to(&self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::SourceLookup)
                | (Self::SourceLookup, Self::Retrieving | Self::Aborted)
                | (Self::Retrieving, Self::Parsing | Self::Aborted)
                | (Self::Parsing, Self::Done)
        )
    }
}

impl std::fmt::Display for RunStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
