//! Validated property sale records.

use chrono::NaiveDate;
use serde::Serialize;

/// A single validated property sale.
///
/// Serializes to the sink's JSON body: `property_id`, `location`, `price` as a
/// number and `date_sold` as an ISO `YYYY-MM-DD` string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceRecord {
    /// Opaque property identifier.
    property_id: String,
    /// Free-form jurisdiction or address text.
    location: String,
    /// Sale price with currency symbols and separators removed.
    price: f64,
    /// Calendar date of the sale.
    date_sold: NaiveDate,
}

impl PriceRecord {
    /// Creates a new price record.
    #[must_use]
    pub fn new(
        property_id: impl Into<String>,
        location: impl Into<String>,
        price: f64,
        date_sold: NaiveDate,
    ) -> Self {
        Self {
            property_id: property_id.into(),
            location: location.into(),
            price,
            date_sold,
        }
    }

    /// Returns the property identifier.
    #[must_use]
    pub fn property_id(&self) -> &str {
        &self.property_id
    }

    /// Returns the location text.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the sale price.
    #[must_use]
    pub const fn price(&self) -> f64 {
        self.price
    }

    /// Returns the sale date.
    #[must_use]
    pub const fn date_sold(&self) -> NaiveDate {
        self.date_sold
    }
}

impl std::fmt::Display for PriceRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) {} on {}",
            self.property_id,
            self.location,
            self.price,
            self.date_sold.format("%Y-%m-%d")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn boston() -> PriceRecord {
        let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
        PriceRecord::new("P2", "Boston", 500_000.0, date)
    }

    #[test]
    fn test_record_accessors() {
        let record = boston();
        assert_eq!(record.property_id(), "P2");
        assert_eq!(record.location(), "Boston");
        assert!((record.price() - 500_000.0).abs() < f64::EPSILON);
        assert_eq!(
            record.date_sold(),
            NaiveDate::from_ymd_opt(2023, 6, 15).unwrap()
        );
    }

    #[test]
    fn test_sink_payload_shape() {
        let value = serde_json::to_value(boston()).unwrap();
        assert_eq!(
            value,
            json!({
                "property_id": "P2",
                "location": "Boston",
                "price": 500000.0,
                "date_sold": "2023-06-15"
            })
        );
        assert_eq!(value.as_object().unwrap().len(), 4);
    }

    #[test]
    fn test_display() {
        assert_eq!(boston().to_string(), "P2 (Boston) 500000 on 2023-06-15");
    }
}
