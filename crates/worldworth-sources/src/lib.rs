//! Source registry for the worldworth real-estate price ingester.
//!
//! Maps a region identifier to the URL of the CSV export published for that
//! region. The built-in table is embedded at compile time; a custom table can
//! be loaded from a JSON file with the same shape.
//!
//! # Example
//!
//! ```
//! use worldworth_sources::SourceRegistry;
//!
//! let registry = SourceRegistry::global();
//!
//! if let Ok(url) = registry.lookup("US") {
//!     println!("US sales are published at {url}");
//! }
//! ```

#![doc(issue_tracker_base_url = "https://github.com/worldworth/worldworth/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use worldworth_types::{IngestError, Result};

/// The source table embedded at compile time.
const SOURCES_JSON: &str = include_str!("../data/sources.json");

/// Global source registry instance.
static REGISTRY: OnceLock<SourceRegistry> = OnceLock::new();

/// A region and the location of its CSV export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceEntry {
    region: String,
    url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl SourceEntry {
    /// Creates a new source entry.
    #[must_use]
    pub fn new(region: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            url: url.into(),
            description: None,
        }
    }

    /// Sets a human-readable description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the region identifier.
    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Returns the CSV resource URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl std::fmt::Display for SourceEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.region, self.url)
    }
}

/// Read-only table of region sources.
///
/// Region identifiers are matched exactly and must be unique.
#[derive(Debug, Clone, Default)]
pub struct SourceRegistry {
    sources: HashMap<String, SourceEntry>,
}

impl SourceRegistry {
    /// Returns the built-in source registry.
    ///
    /// The registry is initialized lazily on first access.
    #[must_use]
    pub fn global() -> &'static Self {
        REGISTRY.get_or_init(|| {
            Self::from_json_str(SOURCES_JSON).expect("Invalid embedded sources.json")
        })
    }

    /// Builds a registry from a list of entries.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::DuplicateRegion`] if a region appears twice.
    pub fn from_entries(entries: impl IntoIterator<Item = SourceEntry>) -> Result<Self> {
        let mut sources = HashMap::new();
        for entry in entries {
            match sources.entry(entry.region.clone()) {
                Entry::Occupied(_) => return Err(IngestError::DuplicateRegion(entry.region)),
                Entry::Vacant(slot) => {
                    slot.insert(entry);
                }
            }
        }
        Ok(Self { sources })
    }

    /// Parses a registry from a JSON array of entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or a region appears twice.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<SourceEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Loads a registry from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the JSON is invalid or a
    /// region appears twice.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Looks up the entry for a region.
    #[must_use]
    pub fn get(&self, region: &str) -> Option<&SourceEntry> {
        self.sources.get(region)
    }

    /// Returns the CSV URL registered for a region.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::UnknownRegion`] if no source is registered.
    pub fn lookup(&self, region: &str) -> Result<&str> {
        self.get(region)
            .map(SourceEntry::url)
            .ok_or_else(|| IngestError::UnknownRegion(region.to_string()))
    }

    /// Returns all entries as an iterator.
    pub fn all(&self) -> impl Iterator<Item = &SourceEntry> {
        self.sources.values()
    }

    /// Returns the number of registered regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Returns true if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Returns all region identifiers sorted alphabetically.
    pub fn regions(&self) -> Vec<&str> {
        let mut regions: Vec<&str> = self.sources.keys().map(String::as_str).collect();
        regions.sort_unstable();
        regions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_registry_loads() {
        let registry = SourceRegistry::global();
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_lookup_us() {
        let registry = SourceRegistry::global();
        let url = registry.lookup("US").expect("US should exist");
        assert!(url.ends_with(".csv"));
    }

    #[test]
    fn test_lookup_unknown_region() {
        let registry = SourceRegistry::global();
        let err = registry.lookup("Mars").unwrap_err();
        assert!(matches!(err, IngestError::UnknownRegion(ref r) if r == "Mars"));
    }

    #[test]
    fn test_lookup_is_exact() {
        let registry = SourceRegistry::global();
        assert!(registry.get("US").is_some());
        assert!(registry.get("us").is_none());
    }

    #[test]
    fn test_duplicate_region_rejected() {
        let result = SourceRegistry::from_entries([
            SourceEntry::new("US", "https://a.example/one.csv"),
            SourceEntry::new("UK", "https://b.example/two.csv"),
            SourceEntry::new("US", "https://c.example/three.csv"),
        ]);
        assert!(matches!(result, Err(IngestError::DuplicateRegion(ref r)) if r == "US"));
    }

    #[test]
    fn test_duplicate_region_in_json_rejected() {
        let json = r#"[
            {"region": "US", "url": "https://a.example/one.csv"},
            {"region": "US", "url": "https://a.example/two.csv"}
        ]"#;
        let result = SourceRegistry::from_json_str(json);
        assert!(matches!(result, Err(IngestError::DuplicateRegion(_))));
    }

    #[test]
    fn test_invalid_json() {
        let result = SourceRegistry::from_json_str("{not json");
        assert!(matches!(result, Err(IngestError::Json(_))));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"region": "CA", "url": "https://open.canada.example/sales.csv", "description": "Canada"}}]"#
        )
        .unwrap();

        let registry = SourceRegistry::from_path(file.path()).unwrap();
        assert_eq!(registry.len(), 1);
        let entry = registry.get("CA").unwrap();
        assert_eq!(entry.url(), "https://open.canada.example/sales.csv");
        assert_eq!(entry.description(), Some("Canada"));
    }

    #[test]
    fn test_from_missing_path() {
        let result = SourceRegistry::from_path("/nonexistent/worldworth/sources.json");
        assert!(matches!(result, Err(IngestError::Io(_))));
    }

    #[test]
    fn test_regions_sorted() {
        let registry = SourceRegistry::from_entries([
            SourceEntry::new("US", "https://a.example/us.csv"),
            SourceEntry::new("AU", "https://a.example/au.csv"),
        ])
        .unwrap();
        assert_eq!(registry.regions(), vec!["AU", "US"]);
    }
}
