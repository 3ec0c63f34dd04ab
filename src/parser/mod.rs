//! Loaders for the three JSON configuration files.
//!
//! Each loader turns one raw input file into its in-memory model. A missing
//! file is reported as `ConfigMissing`; a file that exists but does not have
//! the expected shape is reported as `ConfigMalformed`.

pub mod colors;
pub mod fonts;
pub mod theme;

use serde::de::DeserializeOwned;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

use crate::error::{GenerateError, Result};

// Re-export commonly used functions
pub use colors::{load_color_model, parse_color_model};
pub use fonts::{load_typography, parse_typography};
pub use theme::{load_theme_overrides, parse_theme_overrides};

/// Reads a configuration file to a string.
fn read_config_text(path: &Path) -> Result<String> {
    debug!("Reading configuration {}", path.display());
    fs::read_to_string(path).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            GenerateError::ConfigMissing {
                path: path.to_path_buf(),
            }
        } else {
            GenerateError::malformed(
                path.display().to_string(),
                format!("file could not be read: {err}"),
            )
        }
    })
}

/// Deserializes JSON text, mapping shape errors to `ConfigMalformed`.
fn parse_json<T: DeserializeOwned>(json: &str, source_name: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|err| GenerateError::malformed(source_name, err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_missing_file_is_config_missing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope.json");

        let err = read_config_text(&path).unwrap_err();
        assert!(err.is_missing());
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn test_parse_json_reports_source() {
        let err = parse_json::<serde_json::Value>("{ not json", "fonts.json").unwrap_err();
        assert!(err.is_malformed());
        assert!(err.to_string().contains("fonts.json"));
    }
}
