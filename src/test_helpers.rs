//! Shared test utilities for the model-gallery test suite.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let manifest = scan(tmp.path()).unwrap();
//!
//! let sedan = find_entry(&manifest, "sedan");
//! assert_eq!(sedan.models, vec!["blue.jpg", "red.jpg"]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::types::{GalleryEntry, Manifest};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/models/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/models");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Create placeholder files (and their parent directories) under `root`.
///
/// Paths are `/`-separated and relative to `root`. Contents are irrelevant:
/// the scanner only looks at names.
pub fn write_files(root: &Path, files: &[&str]) {
    for rel in files {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, "fake image").unwrap();
    }
}

// =========================================================================
// Manifest lookups — panics with a clear message on miss
// =========================================================================

/// Find an entry by category. Panics if not found.
pub fn find_entry<'a>(manifest: &'a Manifest, category: &str) -> &'a GalleryEntry {
    manifest.get(category).unwrap_or_else(|| {
        let available = categories(manifest);
        panic!("category '{category}' not found. Available: {available:?}")
    })
}

/// All categories in manifest order.
pub fn categories(manifest: &Manifest) -> Vec<&str> {
    manifest
        .entries
        .iter()
        .map(|e| e.category.as_str())
        .collect()
}
