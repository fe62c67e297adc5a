//! CLI output formatting.
//!
//! Each view has a `format_*` function returning lines (pure, testable) and a
//! `print_*` wrapper that writes them to stdout. Diagnostics go through `log`
//! instead; stdout carries only what the user asked for.
//!
//! # Output Format
//!
//! ## Build
//!
//! ```text
//! ✅ model_gallery.json generated!
//! ```
//!
//! ## Check (and `build --verbose`)
//!
//! ```text
//! . (1 models)
//!     cover.jpg
//! sedan (2 models)
//!     blue.jpg
//!     red.jpg
//!
//! Found 2 categories, 3 models
//! ```

use crate::types::Manifest;
use std::path::Path;

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// The single line printed after a successful write.
pub fn write_confirmation(destination: &Path) -> String {
    format!("✅ {} generated!", destination.display())
}

pub fn print_write_confirmation(destination: &Path) {
    println!("{}", write_confirmation(destination));
}

/// Format the scanned categories and their models, in manifest order.
pub fn format_scan_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = Vec::new();

    for entry in &manifest.entries {
        lines.push(format!("{} ({} models)", entry.category, entry.models.len()));
        for model in &entry.models {
            lines.push(format!("{}{}", indent(1), model));
        }
    }

    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(format!(
        "Found {} categories, {} models",
        manifest.len(),
        manifest.model_count()
    ));
    lines
}

pub fn print_scan_output(manifest: &Manifest) {
    for line in format_scan_output(manifest) {
        println!("{}", line);
    }
}
