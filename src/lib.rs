//! # Model Gallery
//!
//! Catalogs a directory of model renders for a static gallery page. Every
//! directory under the scan root that holds `.jpg` files becomes a category;
//! the manifest lists each category with its image filenames, and the web
//! page reads that manifest at load time.
//!
//! # Pipeline
//!
//! ```text
//! 1. Scan    models/   →  Manifest            (filesystem → structured data)
//! 2. Write   Manifest  →  model_gallery.json  (atomic temp-file + rename)
//! ```
//!
//! The whole manifest is built in memory before anything is written, so a
//! failed scan never touches the output file.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks the models directory and builds the [`types::Manifest`] |
//! | [`writer`] | Serializes the manifest to two-space-indented JSON on disk |
//! | [`config`] | `gallery.toml` loading, CLI overrides, validation |
//! | [`types`] | `GalleryEntry` / `Manifest` records |
//! | [`naming`] | `.jpg` matching, category path normalization, filename ordering |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Byte-wise Filename Order
//!
//! Models within a category are sorted by raw byte value, not by locale
//! collation. `Blue.jpg` sorts before `blue.jpg`, and re-running on an
//! unchanged tree yields byte-identical arrays on every machine.
//!
//! ## Listing-Order Categories
//!
//! Categories appear in pre-order traversal order. Sibling directories follow
//! whatever order the filesystem lists them in; set `sort_categories` when
//! consumers need a stable top-level order.

pub mod config;
pub mod naming;
pub mod output;
pub mod scan;
pub mod types;
pub mod writer;

#[cfg(test)]
pub(crate) mod test_helpers;
