//! Typography configuration loader.

use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

use super::{parse_json, read_config_text};
use crate::error::{GenerateError, Result};
use crate::models::{
    FontFamilies, FontWeights, LayoutOverrides, LetterSpacing, SizeMode, SizeTable,
    TypographyModel,
};

/// Font configuration file as written on disk.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FontConfig {
    #[serde(default)]
    body: String,
    #[serde(default)]
    heading: String,
    #[serde(default)]
    monospace: String,
    sizes: SizeTable,
    #[serde(default)]
    html_sizes: Option<SizeTable>,
    weights: FontWeights,
    spacing: LetterSpacing,
}

impl FontConfig {
    /// The default table must carry the relative-size multipliers.
    fn validate(&self, source_name: &str) -> Result<()> {
        let missing: Vec<&str> = [
            ("textSizeSmall", self.sizes.text_size_small.is_none()),
            ("textSizeTiny", self.sizes.text_size_tiny.is_none()),
            ("textSizeLarge", self.sizes.text_size_large.is_none()),
        ]
        .into_iter()
        .filter_map(|(field, absent)| absent.then_some(field))
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(GenerateError::malformed(
                source_name,
                format!("`sizes` is missing {}", missing.join(", ")),
            ))
        }
    }

    fn into_model(self, requested: SizeMode, source_name: &str) -> TypographyModel {
        let (mode, sizes, layout) = match (requested, &self.html_sizes) {
            (SizeMode::Html, Some(html)) => {
                (SizeMode::Html, html.clone(), LayoutOverrides::from_table(html))
            }
            (SizeMode::Html, None) => {
                warn!(
                    "{} has no htmlSizes table; using the default sizes for HTML output",
                    source_name
                );
                (SizeMode::Default, self.sizes.clone(), LayoutOverrides::fallback())
            }
            (SizeMode::Default, _) => {
                (SizeMode::Default, self.sizes.clone(), LayoutOverrides::fallback())
            }
        };

        TypographyModel {
            mode,
            families: FontFamilies {
                body: self.body.trim().to_string(),
                heading: self.heading.trim().to_string(),
                monospace: self.monospace.trim().to_string(),
            },
            sizes,
            default_sizes: self.sizes,
            layout,
            weights: self.weights,
            spacing: self.spacing,
        }
    }
}

/// Parses font configuration JSON into a [`TypographyModel`].
///
/// `mode` requests the HTML table; it is used only when `htmlSizes` exists.
pub fn parse_typography(json: &str, mode: SizeMode, source_name: &str) -> Result<TypographyModel> {
    let config: FontConfig = parse_json(json, source_name)?;
    config.validate(source_name)?;
    let model = config.into_model(mode, source_name);
    debug!(
        "Loaded typography from {} ({} size table)",
        source_name,
        model.mode.name()
    );
    Ok(model)
}

/// Loads the font configuration file.
pub fn load_typography(path: &Path, mode: SizeMode) -> Result<TypographyModel> {
    let json = read_config_text(path)?;
    parse_typography(&json, mode, &path.display().to_string())
}
