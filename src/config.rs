//! Gallery configuration.
//!
//! Settings come from three layers, each overriding the previous one:
//!
//! 1. Stock defaults (scan `models/`, write `model_gallery.json`)
//! 2. An optional `gallery.toml` in the working directory (or `--config <path>`)
//! 3. Command-line flags
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! root = "models"                     # Directory to scan
//! output_path = "model_gallery.json"  # Manifest destination
//! sort_categories = false             # Visit sibling directories in name order
//! follow_links = false                # Descend into symlinked directories
//! ```
//!
//! Unknown keys are rejected so typos surface instead of being silently ignored.

use crate::scan::ScanOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "gallery.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Everything a run needs, passed explicitly to the scanner and writer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Directory to scan.
    pub root: PathBuf,
    /// Where the manifest is written.
    pub output_path: PathBuf,
    /// Visit sibling directories sorted by name for a stable category order.
    pub sort_categories: bool,
    /// Descend into symlinked directories.
    pub follow_links: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("models"),
            output_path: PathBuf::from("model_gallery.json"),
            sort_categories: false,
            follow_links: false,
        }
    }
}

impl GalleryConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.root.as_os_str().is_empty() {
            return Err(ConfigError::Validation("root must not be empty".into()));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "output_path must not be empty".into(),
            ));
        }
        if self.output_path.is_dir() {
            return Err(ConfigError::Validation(format!(
                "output_path is a directory: {}",
                self.output_path.display()
            )));
        }
        Ok(())
    }

    /// Layer command-line overrides on top of this config.
    pub fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(root) = overrides.root {
            self.root = root;
        }
        if let Some(output_path) = overrides.output_path {
            self.output_path = output_path;
        }
        self.sort_categories |= overrides.sort_categories;
        self.follow_links |= overrides.follow_links;
        self
    }

    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            sort_categories: self.sort_categories,
            follow_links: self.follow_links,
        }
    }
}

/// Command-line overrides; `None`/`false` leaves the file value in place.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub root: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub sort_categories: bool,
    pub follow_links: bool,
}

/// Load config from a TOML file.
///
/// Returns stock defaults if the file doesn't exist. Unset keys keep their
/// defaults; unknown keys are an error. The result is not validated here,
/// since CLI overrides may still change it.
pub fn load_config(path: &Path) -> Result<GalleryConfig, ConfigError> {
    if !path.exists() {
        return Ok(GalleryConfig::default());
    }
    let content = fs::read_to_string(path)?;
    let config: GalleryConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Resolve the final config: file layer, then CLI overrides, then validation.
pub fn resolve_config(
    path: &Path,
    overrides: Overrides,
) -> Result<GalleryConfig, ConfigError> {
    let config = load_config(path)?.apply(overrides);
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `gallery.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r#"# Model Gallery Configuration
# ===========================
# Place this file as gallery.toml in the directory you run model-gallery from,
# or point at it with --config. Every key is optional; command-line flags
# override values set here.

# Directory to scan. Every directory below it holding .jpg files becomes a
# category in the manifest; the directory itself is category ".".
root = "models"

# Where the JSON manifest is written. Existing files are replaced atomically.
output_path = "model_gallery.json"

# Sibling directories are visited in the order the filesystem lists them.
# Set to true to sort them by name for a stable category order.
sort_categories = false

# Descend into symlinked directories.
follow_links = false
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_paths() {
        let config = GalleryConfig::default();
        assert_eq!(config.root, PathBuf::from("models"));
        assert_eq!(config.output_path, PathBuf::from("model_gallery.json"));
        assert!(!config.sort_categories);
        assert!(!config.follow_links);
    }

    #[test]
    fn parse_partial_config() {
        let config: GalleryConfig = toml::from_str(r#"root = "assets/cars""#).unwrap();
        assert_eq!(config.root, PathBuf::from("assets/cars"));
        // Unspecified values keep defaults
        assert_eq!(config.output_path, PathBuf::from("model_gallery.json"));
    }

    #[test]
    fn stock_config_parses_to_defaults() {
        let config: GalleryConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config, GalleryConfig::default());
    }

    #[test]
    fn unknown_key_rejected() {
        let result: Result<GalleryConfig, _> = toml::from_str(r#"rot = "models""#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join("gallery.toml")).unwrap();
        assert_eq!(config, GalleryConfig::default());
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("gallery.toml");
        fs::write(
            &path,
            r#"
root = "renders"
output_path = "public/gallery.json"
sort_categories = true
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.root, PathBuf::from("renders"));
        assert_eq!(config.output_path, PathBuf::from("public/gallery.json"));
        assert!(config.sort_categories);
        assert!(!config.follow_links);
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("gallery.toml");
        fs::write(&path, "this is not valid toml [[[").unwrap();

        assert!(matches!(load_config(&path), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn overrides_replace_file_values() {
        let base = GalleryConfig {
            root: PathBuf::from("renders"),
            ..GalleryConfig::default()
        };
        let config = base.apply(Overrides {
            root: Some(PathBuf::from("cli-root")),
            sort_categories: true,
            ..Overrides::default()
        });

        assert_eq!(config.root, PathBuf::from("cli-root"));
        assert_eq!(config.output_path, PathBuf::from("model_gallery.json"));
        assert!(config.sort_categories);
    }

    #[test]
    fn absent_overrides_keep_file_values() {
        let base = GalleryConfig {
            output_path: PathBuf::from("out.json"),
            follow_links: true,
            ..GalleryConfig::default()
        };
        let config = base.clone().apply(Overrides::default());
        assert_eq!(config, base);
    }

    #[test]
    fn validate_empty_root() {
        let config = GalleryConfig {
            root: PathBuf::new(),
            ..GalleryConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_output_path_directory() {
        let tmp = TempDir::new().unwrap();
        let config = GalleryConfig {
            output_path: tmp.path().to_path_buf(),
            ..GalleryConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn resolve_config_validates_after_overrides() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("gallery.toml");
        fs::write(&path, r#"output_path = """#).unwrap();

        let err = resolve_config(&path, Overrides::default());
        assert!(matches!(err, Err(ConfigError::Validation(_))));

        let ok = resolve_config(
            &path,
            Overrides {
                output_path: Some(PathBuf::from("fixed.json")),
                ..Overrides::default()
            },
        )
        .unwrap();
        assert_eq!(ok.output_path, PathBuf::from("fixed.json"));
    }

    #[test]
    fn scan_options_follow_config() {
        let config = GalleryConfig {
            sort_categories: true,
            ..GalleryConfig::default()
        };
        let options = config.scan_options();
        assert!(options.sort_categories);
        assert!(!options.follow_links);
    }
}
