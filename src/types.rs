//! Manifest data model shared by the scanner, the writer, and the console output.
//!
//! The JSON shape is a flat list of records, consumed as-is by the gallery
//! page:
//!
//! ```json
//! [
//!   { "category": ".", "models": ["cover.jpg"] },
//!   { "category": "sedan", "models": ["blue.jpg", "red.jpg"] }
//! ]
//! ```

use serde::{Deserialize, Serialize};

/// One directory's worth of gallery images.
///
/// Field order is the serialized key order: `category` before `models`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryEntry {
    /// Directory path relative to the scan root, `/`-separated. `"."` is the root.
    pub category: String,
    /// Image filenames in byte-wise ascending order. Never empty.
    pub models: Vec<String>,
}

/// Every [`GalleryEntry`] produced by one scan, in directory-visitation order.
///
/// Serializes as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    pub entries: Vec<GalleryEntry>,
}

impl Manifest {
    pub fn new(entries: Vec<GalleryEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by its category.
    pub fn get(&self, category: &str) -> Option<&GalleryEntry> {
        self.entries.iter().find(|e| e.category == category)
    }

    /// Total number of model filenames across all categories.
    pub fn model_count(&self) -> usize {
        self.entries.iter().map(|e| e.models.len()).sum()
    }
}
