//! Static catalog of archived cartoon entries
//!
//! The on-disk format is a flat JSON object whose values carry a title, a
//! list of stream URLs and a list of image URLs. At load time the catalog
//! becomes an insertion-ordered collection keyed by primary stream URI;
//! entries without any playable stream are dropped. The catalog is loaded
//! once and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{CatalogError, Result};

/// Catalog shipped with the binary, used when nothing else is configured.
const EMBEDDED_CATALOG: &str = include_str!("../../data/classic_cartoons.json");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub title: String,
    #[serde(default)]
    pub streams: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CatalogEntry {
    /// Primary stream URI; `None` means the entry is not playable.
    pub fn primary_stream(&self) -> Option<&str> {
        self.streams.first().map(String::as_str)
    }

    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Display category derived from descriptive tags. Tags carry
    /// color/sound attributes only; anything else falls back to "Classic".
    pub fn category(&self) -> &'static str {
        let has = |t: &str| self.tags.iter().any(|tag| tag.eq_ignore_ascii_case(t));
        if has("silent") {
            "Silent Cartoon"
        } else if has("color") {
            "Color Cartoon"
        } else if has("b&w") || has("bw") {
            "B&W Cartoon"
        } else {
            "Classic Cartoon"
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Parse a flat JSON object of entries, keeping only playable ones.
    ///
    /// Duplicate primary streams behave like repeated JSON-object keys:
    /// the first occurrence keeps its position, the latest value wins.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(json).map_err(CatalogError::InvalidJson)?;
        Self::from_map(raw)
    }

    /// Build a catalog from an already-parsed flat JSON object.
    pub fn from_map(raw: serde_json::Map<String, serde_json::Value>) -> Result<Self> {
        let mut entries: Vec<CatalogEntry> = Vec::with_capacity(raw.len());
        let mut by_stream: HashMap<String, usize> = HashMap::new();
        let mut skipped = 0usize;

        for (key, value) in raw {
            let entry: CatalogEntry =
                serde_json::from_value(value).map_err(CatalogError::InvalidJson)?;

            let Some(stream) = entry.primary_stream().map(str::to_string) else {
                debug!("Skipping entry without streams: {} ({})", entry.title, key);
                skipped += 1;
                continue;
            };

            match by_stream.get(&stream) {
                Some(&idx) => entries[idx] = entry,
                None => {
                    by_stream.insert(stream, entries.len());
                    entries.push(entry);
                }
            }
        }

        debug!(
            "Loaded catalog: {} playable entries, {} skipped",
            entries.len(),
            skipped
        );

        if entries.is_empty() {
            return Err(CatalogError::Empty.into());
        }

        Ok(Self { entries })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CatalogError::FileNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// The catalog compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_json_str(EMBEDDED_CATALOG)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = Catalog::embedded().unwrap();
        assert!(!catalog.is_empty());
        // Every loaded entry is playable
        assert!(catalog.entries().iter().all(|e| e.primary_stream().is_some()));
    }

    #[test]
    fn test_entries_without_streams_are_dropped() {
        let json = r#"{
            "a": {"title": "Playable", "streams": ["https://example.org/a.ogv"], "images": []},
            "b": {"title": "Broken", "streams": [], "images": []}
        }"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.entries()[0].title, "Playable");
    }

    #[test]
    fn test_duplicate_primary_stream_keeps_latest_value() {
        let json = r#"{
            "a": {"title": "First", "streams": ["https://example.org/x.ogv"]},
            "b": {"title": "Other", "streams": ["https://example.org/y.ogv"]},
            "c": {"title": "Second", "streams": ["https://example.org/x.ogv"]}
        }"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        // First insertion position, latest value
        assert_eq!(catalog.entries()[0].title, "Second");
        assert_eq!(catalog.entries()[1].title, "Other");
    }

    #[test]
    fn test_empty_catalog_is_an_error() {
        let json = r#"{"a": {"title": "Broken", "streams": []}}"#;
        assert!(Catalog::from_json_str(json).is_err());
    }

    #[test]
    fn test_category_from_tags() {
        let entry = CatalogEntry {
            title: "Test".into(),
            streams: vec!["https://example.org/t.ogv".into()],
            images: vec![],
            tags: vec!["color".into(), "sound".into()],
        };
        assert_eq!(entry.category(), "Color Cartoon");

        let untagged = CatalogEntry {
            title: "Test".into(),
            streams: vec!["https://example.org/u.ogv".into()],
            images: vec![],
            tags: vec![],
        };
        assert_eq!(untagged.category(), "Classic Cartoon");
    }
}
