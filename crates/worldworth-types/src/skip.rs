//! Row skip outcomes.

use thiserror::Error;

/// Why a source row was dropped instead of becoming a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// The row has fewer than four fields or could not be tokenised.
    MalformedRow,
    /// The price field is not a finite, non-negative number.
    InvalidPrice,
    /// The date field does not match `YYYY-MM-DD`.
    InvalidDate,
}

impl SkipReason {
    /// Returns the reason as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MalformedRow => "malformed row",
            Self::InvalidPrice => "invalid price",
            Self::InvalidDate => "invalid date",
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A source row that was dropped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("row {row}: {reason} ({detail})")]
pub struct SkippedRow {
    /// Zero-based index of the data row (the header is not counted).
    pub row: usize,
    /// Skip category.
    pub reason: SkipReason,
    /// The offending value or tokenizer message.
    pub detail: String,
}

impl SkippedRow {
    /// Creates a new skipped row.
    #[must_use]
    pub fn new(row: usize, reason: SkipReason, detail: impl Into<String>) -> Self {
        Self {
            row,
            reason,
            detail: detail.into(),
        }
    }
}

/// Per-reason tally of skipped rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkipCounts {
    /// Rows with too few fields.
    pub malformed: usize,
    /// Rows with an unparseable price.
    pub invalid_price: usize,
    /// Rows with an unparseable date.
    pub invalid_date: usize,
}

impl SkipCounts {
    /// Counts one skipped row.
    pub const fn record(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::MalformedRow => self.malformed += 1,
            SkipReason::InvalidPrice => self.invalid_price += 1,
            SkipReason::InvalidDate => self.invalid_date += 1,
        }
    }

    /// Returns the count for a single reason.
    #[must_use]
    pub const fn get(&self, reason: SkipReason) -> usize {
        match reason {
            SkipReason::MalformedRow => self.malformed,
            SkipReason::InvalidPrice => self.invalid_price,
            SkipReason::InvalidDate => self.invalid_date,
        }
    }

    /// Returns the total number of skipped rows.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.malformed + self.invalid_price + self.invalid_date
    }
}

impl<'a> FromIterator<&'a SkippedRow> for SkipCounts {
    fn from_iter<I: IntoIterator<Item = &'a SkippedRow>>(iter: I) -> Self {
        let mut counts = Self::default();
        for skipped in iter {
            counts.record(skipped.reason);
        }
        counts
    }
}

impl std::fmt::Display for SkipCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} skipped ({} malformed, {} invalid price, {} invalid date)",
            self.total(),
            self.malformed,
            self.invalid_price,
            self.invalid_date
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_counts() {
        let mut counts = SkipCounts::default();
        counts.record(SkipReason::InvalidPrice);
        counts.record(SkipReason::InvalidPrice);
        counts.record(SkipReason::InvalidDate);

        assert_eq!(counts.get(SkipReason::InvalidPrice), 2);
        assert_eq!(counts.get(SkipReason::InvalidDate), 1);
        assert_eq!(counts.get(SkipReason::MalformedRow), 0);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_counts_from_skipped_rows() {
        let rows = vec![
            SkippedRow::new(0, SkipReason::MalformedRow, "1 field"),
            SkippedRow::new(4, SkipReason::InvalidDate, "000"),
        ];
        let counts: SkipCounts = rows.iter().collect();
        assert_eq!(counts.malformed, 1);
        assert_eq!(counts.invalid_date, 1);
        assert_eq!(counts.total(), 2);
    }

    #[test]
    fn test_skipped_row_display() {
        let skipped = SkippedRow::new(3, SkipReason::InvalidPrice, "abc");
        assert_eq!(skipped.to_string(), "row 3: invalid price (abc)");
    }
}
