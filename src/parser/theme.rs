//! Theme overrides loader.

use std::path::Path;

use super::{parse_json, read_config_text};
use crate::error::Result;
use crate::models::ThemeOverrides;

/// Parses theme override JSON.
pub fn parse_theme_overrides(json: &str, source_name: &str) -> Result<ThemeOverrides> {
    parse_json(json, source_name)
}

/// Loads the theme overrides file.
pub fn load_theme_overrides(path: &Path) -> Result<ThemeOverrides> {
    let json = read_config_text(path)?;
    parse_theme_overrides(&json, &path.display().to_string())
}
