//! Benchmark utilities for worldworth.

use std::fmt::Write;

/// Share of generated rows that are deliberately invalid, as one in N.
pub const INVALID_EVERY: usize = 10;

/// Builds a source export with a header and `rows` data lines.
///
/// Every [`INVALID_EVERY`]th row carries an unparseable price, and every
/// other row quotes a price containing a thousands separator.
pub fn sample_source(rows: usize) -> String {
    let mut text = String::from("property_id,location,price,date_sold\n");
    for i in 0..rows {
        let day = i % 28 + 1;
        if i % INVALID_EVERY == INVALID_EVERY - 1 {
            let _ = writeln!(text, "P{i},Springfield,unknown,2023-05-{day:02}");
        } else if i % 2 == 0 {
            let _ = writeln!(text, "P{i},\"Boston, MA\",\"${},000\",2023-06-{day:02}", i % 900 + 100);
        } else {
            let _ = writeln!(text, "P{i},Austin,${}500,2023-07-{day:02}", i % 90 + 10);
        }
    }
    text
}

/// Counts the records and skips produced by parsing `text`.
pub fn parse_counts(text: &str) -> (usize, usize) {
    worldworth_fetch::parse_source(text).fold((0, 0), |(ok, skipped), row| match row {
        Ok(_) => (ok + 1, skipped),
        Err(_) => (ok, skipped + 1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_source_counts() {
        let text = sample_source(100);
        assert_eq!(text.lines().count(), 101);
        assert_eq!(parse_counts(&text), (90, 10));
    }
}
