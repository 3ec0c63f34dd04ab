//! Typography model: font families, the active size table, weights and spacing.

use serde::Deserialize;

use super::CssValue;
use crate::constants::{HTML_RELATIVE_SIZES, LAYOUT_FALLBACKS};

/// Which size table a typography model was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SizeMode {
    /// The `sizes` table (presentation output)
    #[default]
    Default,
    /// The `htmlSizes` table (static document output)
    Html,
}

impl SizeMode {
    /// Short name used in logs and banners.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Html => "html",
        }
    }
}

/// One size table from the font configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeTable {
    /// Base font size (pixel literal, e.g. "28px")
    pub main_font_size: CssValue,
    /// Level 1 heading size
    pub heading1_size: CssValue,
    /// Level 2 heading size
    pub heading2_size: CssValue,
    /// Level 3 heading size
    pub heading3_size: CssValue,
    /// Level 4 heading size
    pub heading4_size: CssValue,
    /// Body line height
    pub body_line_height: CssValue,
    /// Heading line height
    pub heading_line_height: CssValue,
    /// Multiplier for `.text-small`
    #[serde(default)]
    pub text_size_small: Option<CssValue>,
    /// Multiplier for `.text-tiny`
    #[serde(default)]
    pub text_size_tiny: Option<CssValue>,
    /// Multiplier for `.text-large`
    #[serde(default)]
    pub text_size_large: Option<CssValue>,
    /// Maximum content width (HTML table only)
    #[serde(default)]
    pub max_width: Option<CssValue>,
    /// Margin around blocks (HTML table only)
    #[serde(default)]
    pub block_margin: Option<CssValue>,
    /// Small margin (HTML table only)
    #[serde(default)]
    pub small_margin: Option<CssValue>,
}

/// Font family names per role. An empty name means "not configured".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FontFamilies {
    /// Body text family
    pub body: String,
    /// Heading family
    pub heading: String,
    /// Code family
    pub monospace: String,
}

/// Font weights.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FontWeights {
    /// Heading weight
    #[serde(rename = "headingFontWeight")]
    pub heading: CssValue,
    /// Body weight
    #[serde(rename = "bodyFontWeight")]
    pub body: CssValue,
    /// Bold weight
    #[serde(rename = "boldFontWeight")]
    pub bold: CssValue,
}

/// Letter spacing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LetterSpacing {
    /// Heading letter spacing
    #[serde(rename = "headingLetterSpacing")]
    pub heading: CssValue,
    /// Body letter spacing
    #[serde(rename = "bodyLetterSpacing")]
    pub body: CssValue,
}

/// Layout values that the HTML size table may override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutOverrides {
    /// Maximum content width
    pub max_width: CssValue,
    /// Margin around blocks
    pub block_margin: CssValue,
    /// Small margin
    pub small_margin: CssValue,
}

impl LayoutOverrides {
    /// The hard-coded fallback values.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            max_width: CssValue::new(LAYOUT_FALLBACKS.max_width),
            block_margin: CssValue::new(LAYOUT_FALLBACKS.block_margin),
            small_margin: CssValue::new(LAYOUT_FALLBACKS.small_margin),
        }
    }

    /// Fallback values, each replaced by the table's value when present.
    #[must_use]
    pub fn from_table(table: &SizeTable) -> Self {
        let fallback = Self::fallback();
        Self {
            max_width: table.max_width.clone().unwrap_or(fallback.max_width),
            block_margin: table.block_margin.clone().unwrap_or(fallback.block_margin),
            small_margin: table.small_margin.clone().unwrap_or(fallback.small_margin),
        }
    }
}

/// Multipliers for the three relative-size utility classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelativeSizes {
    /// `.text-small`
    pub small: CssValue,
    /// `.text-tiny`
    pub tiny: CssValue,
    /// `.text-large`
    pub large: CssValue,
}

/// Resolved typography for one generation target.
///
/// Exactly one size table is active; the default table is kept alongside
/// because relative-size multipliers come from it in default mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypographyModel {
    /// Which table is active
    pub mode: SizeMode,
    /// Family names
    pub families: FontFamilies,
    /// Active size table
    pub sizes: SizeTable,
    /// The `sizes` table from the configuration
    pub default_sizes: SizeTable,
    /// Layout values (HTML overrides or fallbacks)
    pub layout: LayoutOverrides,
    /// Weights
    pub weights: FontWeights,
    /// Letter spacing
    pub spacing: LetterSpacing,
}

impl TypographyModel {
    /// Multipliers for the relative-size classes.
    ///
    /// HTML mode always uses the fixed 0.8 / 0.7 / 1.2 set. Default mode reads
    /// `textSizeSmall`, `textSizeTiny` and `textSizeLarge` from the default table;
    /// the loader guarantees they are present.
    #[must_use]
    pub fn relative_sizes(&self) -> RelativeSizes {
        let fixed = || RelativeSizes {
            small: CssValue::new(HTML_RELATIVE_SIZES.small),
            tiny: CssValue::new(HTML_RELATIVE_SIZES.tiny),
            large: CssValue::new(HTML_RELATIVE_SIZES.large),
        };

        match self.mode {
            SizeMode::Html => fixed(),
            SizeMode::Default => match (
                &self.default_sizes.text_size_small,
                &self.default_sizes.text_size_tiny,
                &self.default_sizes.text_size_large,
            ) {
                (Some(small), Some(tiny), Some(large)) => RelativeSizes {
                    small: small.clone(),
                    tiny: tiny.clone(),
                    large: large.clone(),
                },
                _ => fixed(),
            },
        }
    }
}
