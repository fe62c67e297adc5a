//! Manifest serialization to disk.
//!
//! The manifest is rendered as two-space-indented JSON and written to a
//! temporary file next to the destination, which is then renamed over the
//! destination. Readers see either the previous manifest or the complete new
//! one, never a truncated file.

use crate::types::Manifest;
use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl WriteError {
    fn io(path: &Path, source: io::Error) -> Self {
        WriteError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Render the manifest as pretty JSON (two-space indent, trailing newline).
pub fn to_json(manifest: &Manifest) -> Result<String, WriteError> {
    let mut json = serde_json::to_string_pretty(manifest)?;
    json.push('\n');
    Ok(json)
}

/// Symlink hops followed before giving up on a destination.
const MAX_LINK_HOPS: usize = 32;

/// Write `manifest` to `destination`, replacing any existing file.
///
/// A symlinked destination is written through: the file it points at is
/// replaced and the link itself stays in place.
pub fn write(manifest: &Manifest, destination: &Path) -> Result<(), WriteError> {
    let json = to_json(manifest)?;
    let target = resolve_destination(destination)?;

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| WriteError::io(destination, e))?;
    debug!("Staging manifest in {}", tmp.path().display());

    tmp.write_all(json.as_bytes())
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| WriteError::io(destination, e))?;

    // Temp files are created owner-only; the manifest is a public asset.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))
            .map_err(|e| WriteError::io(destination, e))?;
    }

    tmp.persist(&target)
        .map_err(|e| WriteError::io(destination, e.error))?;

    info!(
        "Wrote {} categories ({} bytes) to {}",
        manifest.len(),
        json.len(),
        target.display()
    );
    Ok(())
}

/// Follow symlinks from `destination` to the path that should be replaced.
///
/// The final target need not exist yet (a dangling link creates its target).
fn resolve_destination(destination: &Path) -> Result<PathBuf, WriteError> {
    let mut current = destination.to_path_buf();
    for _ in 0..MAX_LINK_HOPS {
        match fs::symlink_metadata(&current) {
            Ok(meta) if meta.file_type().is_symlink() => {
                let link = fs::read_link(&current).map_err(|e| WriteError::io(destination, e))?;
                current = match current.parent() {
                    Some(parent) if link.is_relative() => parent.join(link),
                    _ => link,
                };
            }
            _ => return Ok(current),
        }
    }
    Err(WriteError::io(
        destination,
        io::Error::other("too many levels of symbolic links"),
    ))
}

/// Read a manifest previously produced by [`write`].
pub fn read(path: &Path) -> Result<Manifest, WriteError> {
    let content = fs::read_to_string(path).map_err(|e| WriteError::io(path, e))?;
    Ok(serde_json::from_str(&content)?)
}
