//! CSV row parsing from source exports.
//!
//! Sources publish one sale per line in a fixed column order:
//!
//! | index | column        | rule                                      |
//! |-------|---------------|-------------------------------------------|
//! | 0     | `property_id` | taken verbatim                            |
//! | 1     | `location`    | taken verbatim                            |
//! | 2     | `price`       | `$` and `,` stripped, finite and >= 0     |
//! | 3     | `date_sold`   | `YYYY-MM-DD`                              |
//!
//! Columns past the fourth are ignored. A row that breaks any rule is
//! returned as a [`SkippedRow`] and never aborts the rest of the source.

use chrono::NaiveDate;
use worldworth_types::{PriceRecord, SkipReason, SkippedRow};

/// Date pattern for the `date_sold` column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Number of positional columns a row must carry.
pub const FIELD_COUNT: usize = 4;

/// Parses every data row of a source export.
///
/// The first line of `text` is the header and is discarded without being
/// inspected; a line may end in `\n`, `\r\n` or a lone `\r`. The remaining
/// text is tokenised with a quote-aware CSV reader,
/// so a quoted field such as `"$250,000"` stays a single field. Rows may have
/// varying field counts. Blank lines produce no row.
///
/// Each item carries the zero-based data row index, and items come out in
/// source order.
pub fn parse_source(text: &str) -> impl Iterator<Item = Result<PriceRecord, SkippedRow>> + '_ {
    let body = text.find(['\n', '\r']).map_or("", |end| {
        let rest = &text[end..];
        rest.strip_prefix("\r\n")
            .or_else(|| rest.get(1..))
            .unwrap_or("")
    });

    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(body.as_bytes())
        .into_records()
        .enumerate()
        .map(|(row, record)| match record {
            Ok(record) => {
                let fields: Vec<&str> = record.iter().collect();
                parse_row(&fields, row)
            }
            Err(e) => Err(SkippedRow::new(row, SkipReason::MalformedRow, e.to_string())),
        })
}

/// Parses one tokenised row into a price record.
///
/// # Errors
///
/// Returns a [`SkippedRow`] if the row has fewer than four fields, the price
/// is not a finite non-negative number, or the date is not `YYYY-MM-DD`.
pub fn parse_row<S: AsRef<str>>(fields: &[S], row: usize) -> Result<PriceRecord, SkippedRow> {
    let [property_id, location, price, date_sold, ..] = fields else {
        return Err(SkippedRow::new(
            row,
            SkipReason::MalformedRow,
            format!("expected {FIELD_COUNT} fields, found {}", fields.len()),
        ));
    };

    let price_raw: &str = price.as_ref();
    let price = parse_price(price_raw)
        .ok_or_else(|| SkippedRow::new(row, SkipReason::InvalidPrice, price_raw))?;

    let date_raw: &str = date_sold.as_ref();
    let date_sold = parse_date(date_raw)
        .ok_or_else(|| SkippedRow::new(row, SkipReason::InvalidDate, date_raw))?;

    let property_id: &str = property_id.as_ref();
    let location: &str = location.as_ref();
    Ok(PriceRecord::new(property_id, location, price, date_sold))
}

/// Parses a price after removing `$` and `,` characters.
///
/// Surrounding whitespace is ignored. Returns `None` for anything that is not
/// a finite, non-negative number.
#[must_use]
pub fn parse_price(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| !matches!(c, '$' | ',')).collect();
    cleaned
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price >= 0.0)
}

/// Parses a `YYYY-MM-DD` date.
///
/// The year must be exactly four digits with no sign. Month and day may omit
/// their leading zero. No whitespace is allowed anywhere in the value.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    if !has_date_shape(raw) {
        return None;
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

/// Returns true if `raw` is a four-digit year, a `-`, then only digits and
/// dashes.
fn has_date_shape(raw: &str) -> bool {
    match raw.as_bytes() {
        [y0, y1, y2, y3, b'-', rest @ ..] => {
            [y0, y1, y2, y3].iter().all(|b| b.is_ascii_digit())
                && rest.iter().all(|b| b.is_ascii_digit() || *b == b'-')
        }
        _ => false,
    }
}
