//! Project configuration.
//!
//! An optional `brandkit.toml` at the project root names the three input files
//! and the four output directories. Every field has a default, so a project
//! without the file (or with only some keys set) still works.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::PROJECT_CONFIG_FILE;

/// Locations of the token input files, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    /// Color token file (flat or grouped shape)
    pub colors: PathBuf,
    /// Typography token file
    pub fonts: PathBuf,
    /// Slide theme overrides
    pub theme: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            colors: PathBuf::from("config/colors.json"),
            fonts: PathBuf::from("config/fonts.json"),
            theme: PathBuf::from("config/theme.json"),
        }
    }
}

/// Output directories, relative to the project root.
///
/// File names inside these directories are fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Presentation partials and slide theme
    pub slides_dir: PathBuf,
    /// Exercise partials and document theme
    pub exercises_dir: PathBuf,
    /// HTML include fragments
    pub includes_dir: PathBuf,
    /// Plotting theme script
    pub plot_dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            slides_dir: PathBuf::from("slides"),
            exercises_dir: PathBuf::from("exercises"),
            includes_dir: PathBuf::from("_includes"),
            plot_dir: PathBuf::from("R"),
        }
    }
}

/// Project configuration.
///
/// # File Location
///
/// `<project root>/brandkit.toml`
///
/// ```toml
/// [inputs]
/// colors = "config/colors.json"
///
/// [outputs]
/// slides_dir = "deck"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Input file locations
    pub inputs: InputConfig,
    /// Output directory locations
    pub outputs: OutputConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the full path to the config file for a project root.
    #[must_use]
    pub fn config_file_path(root: &Path) -> PathBuf {
        root.join(PROJECT_CONFIG_FILE)
    }

    /// Loads configuration from `<root>/brandkit.toml`.
    ///
    /// If the file doesn't exist, returns default configuration. A file that
    /// exists but cannot be parsed is an error.
    pub fn load(root: &Path) -> Result<Self> {
        let config_path = Self::config_file_path(root);

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - no path is empty
    /// - no path is absolute (everything lives under the project root)
    pub fn validate(&self) -> Result<()> {
        let paths = [
            ("inputs.colors", &self.inputs.colors),
            ("inputs.fonts", &self.inputs.fonts),
            ("inputs.theme", &self.inputs.theme),
            ("outputs.slides_dir", &self.outputs.slides_dir),
            ("outputs.exercises_dir", &self.outputs.exercises_dir),
            ("outputs.includes_dir", &self.outputs.includes_dir),
            ("outputs.plot_dir", &self.outputs.plot_dir),
        ];

        for (key, path) in paths {
            if path.as_os_str().is_empty() {
                anyhow::bail!("{key} must not be empty");
            }
            if path.is_absolute() {
                anyhow::bail!(
                    "{key} must be relative to the project root, got {}",
                    path.display()
                );
            }
        }

        Ok(())
    }

    /// Input path as written in banners (forward slashes, relative).
    #[must_use]
    pub fn source_label(path: &Path) -> String {
        path.to_string_lossy().replace('\\', "/")
    }
}
