//! Filename and path rules for gallery entries.
//!
//! Two conventions decide what lands in the manifest:
//!
//! - **Image match**: a file is a gallery image when its lowercased name ends
//!   with `.jpg`. `X.JPG`, `x.Jpg` and `x.jpg` all match; `x.jpeg` does not.
//! - **Category**: a directory's path relative to the scan root, with
//!   components joined by `/` on every platform. The root itself is `"."`.

use std::path::{Component, Path};

/// Suffix (compared lowercased) that marks a file as a gallery image.
pub const IMAGE_SUFFIX: &str = ".jpg";

/// Category name used for the scan root itself.
pub const ROOT_CATEGORY: &str = ".";

/// Whether a filename counts as a gallery image.
///
/// - `"red.jpg"` → true
/// - `"F150.JPG"` → true
/// - `"concept.jpeg"` → false
/// - `".jpg"` → true (hidden files are not special)
pub fn is_gallery_image(name: &str) -> bool {
    name.to_lowercase().ends_with(IMAGE_SUFFIX)
}

/// Category for `dir` relative to `root`.
///
/// - `root` itself → `"."`
/// - `root/sedan` → `"sedan"`
/// - `root/trucks/pickup` → `"trucks/pickup"`
pub fn category_for(dir: &Path, root: &Path) -> String {
    let rel = dir.strip_prefix(root).unwrap_or(dir);
    let parts: Vec<String> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    if parts.is_empty() {
        ROOT_CATEGORY.to_string()
    } else {
        parts.join("/")
    }
}

/// Sort model filenames ascending by byte value (case-sensitive, no locale).
///
/// For UTF-8 strings byte order equals code point order, so `"B.jpg"` sorts
/// before `"a.jpg"`.
pub fn sort_models(models: &mut [String]) {
    models.sort_unstable();
}
