//! Filesystem scanning and manifest building.
//!
//! Walks a models directory and records, for every directory holding at least
//! one `.jpg`, the sorted list of image filenames found directly inside it.
//!
//! ## Directory Structure
//!
//! ```text
//! models/                     # Scan root → category "."
//! ├── cover.jpg
//! ├── sedan/                  # → category "sedan"
//! │   ├── blue.jpg
//! │   ├── red.jpg
//! │   └── notes.txt           # ignored (not a .jpg)
//! ├── suv/                    # → category "suv"
//! │   └── white.jpg
//! └── trucks/                 # no .jpg here → no entry
//!     └── pickup/             # → category "trucks/pickup"
//!         └── F150.JPG
//! ```
//!
//! ## Ordering
//!
//! Directories are visited pre-order, parent before children. Sibling
//! directories come in the order the OS lists them unless
//! [`ScanOptions::sort_categories`] is set, in which case they are sorted by
//! name. Filenames inside an entry are always sorted byte-wise.
//!
//! ## Errors
//!
//! Any failure aborts the scan; there is no partial manifest.

use crate::naming;
use crate::types::{GalleryEntry, Manifest};
use log::{debug, info};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Models directory not found: {0}")]
    NotFound(PathBuf),
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),
    #[error("Symlink loop detected at {0}")]
    SymlinkLoop(PathBuf),
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Traversal knobs. The defaults reproduce a plain top-down walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Visit sibling directories in name order instead of listing order.
    pub sort_categories: bool,
    /// Descend into symlinked directories.
    pub follow_links: bool,
}

/// Scan `root` with default options.
pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    build(root, &ScanOptions::default())
}

/// A directory seen during the walk and the models found directly inside it.
struct Visit {
    dir: PathBuf,
    models: Vec<String>,
}

/// Build the gallery manifest for `root`.
///
/// A single walk yields directories pre-order and each file right after its
/// parent has been seen, so files are attached to their directory by path.
pub fn build(root: &Path, options: &ScanOptions) -> Result<Manifest, ScanError> {
    check_root(root)?;

    let mut walker = WalkDir::new(root).follow_links(options.follow_links);
    if options.sort_categories {
        walker = walker.sort_by_file_name();
    }

    let mut visits: Vec<Visit> = Vec::new();
    let mut by_dir: HashMap<PathBuf, usize> = HashMap::new();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if is_dangling_link(&err) => {
                debug!("Skipping dangling link {}", err.path().unwrap_or(root).display());
                continue;
            }
            Err(err) => return Err(from_walk_error(err)),
        };

        // check_root already resolved the root to a directory; walkdir still
        // reports a symlinked root by its link type.
        if entry.depth() == 0 || entry.file_type().is_dir() {
            debug!("Visiting {}", entry.path().display());
            by_dir.insert(entry.path().to_path_buf(), visits.len());
            visits.push(Visit {
                dir: entry.path().to_path_buf(),
                models: Vec::new(),
            });
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if !naming::is_gallery_image(&name) || !is_regular_file(&entry)? {
            continue;
        }
        let slot = entry.path().parent().and_then(|dir| by_dir.get(dir)).copied();
        if let Some(slot) = slot {
            visits[slot].models.push(name.into_owned());
        }
    }

    let visited = visits.len();
    let entries: Vec<GalleryEntry> = visits
        .into_iter()
        .filter(|visit| !visit.models.is_empty())
        .map(|mut visit| {
            naming::sort_models(&mut visit.models);
            let category = naming::category_for(&visit.dir, root);
            debug!("{}: {} models", category, visit.models.len());
            GalleryEntry {
                category,
                models: visit.models,
            }
        })
        .collect();

    let manifest = Manifest::new(entries);
    info!(
        "Scanned {} directories under {}: {} categories, {} models",
        visited,
        root.display(),
        manifest.len(),
        manifest.model_count()
    );
    Ok(manifest)
}

fn check_root(root: &Path) -> Result<(), ScanError> {
    let metadata = fs::metadata(root).map_err(|e| classify_io(root, e))?;
    if !metadata.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }
    Ok(())
}

/// Regular file, following symlinks. A dangling link is not a file; any other
/// stat failure is an error.
fn is_regular_file(entry: &DirEntry) -> Result<bool, ScanError> {
    if !entry.file_type().is_symlink() {
        return Ok(entry.file_type().is_file());
    }
    match fs::metadata(entry.path()) {
        Ok(metadata) => Ok(metadata.is_file()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(classify_io(entry.path(), e)),
    }
}

/// With `follow_links`, walkdir reports a link to nowhere as a NotFound error.
fn is_dangling_link(err: &walkdir::Error) -> bool {
    err.depth() > 0
        && err
            .io_error()
            .is_some_and(|e| e.kind() == io::ErrorKind::NotFound)
        && err.path().is_some_and(|p| {
            fs::symlink_metadata(p).is_ok_and(|m| m.file_type().is_symlink())
        })
}

fn classify_io(path: &Path, err: io::Error) -> ScanError {
    match err.kind() {
        io::ErrorKind::NotFound => ScanError::NotFound(path.to_path_buf()),
        io::ErrorKind::PermissionDenied => ScanError::PermissionDenied(path.to_path_buf()),
        _ => ScanError::Io {
            path: path.to_path_buf(),
            source: err,
        },
    }
}

fn from_walk_error(err: walkdir::Error) -> ScanError {
    let path = err.path().map(Path::to_path_buf).unwrap_or_default();
    if err.loop_ancestor().is_some() {
        return ScanError::SymlinkLoop(path);
    }
    match err.into_io_error() {
        Some(io_err) => classify_io(&path, io_err),
        None => ScanError::SymlinkLoop(path),
    }
}
