//! Color configuration normalizer.
//!
//! Two historical shapes are accepted:
//!
//! ```json
//! { "black": "#000000", "midnightGreen": "#254D32" }
//! ```
//!
//! ```json
//! {
//!   "primary": { "black": "#000000", "midnightGreen": "#254D32" },
//!   "semantic": { "headingColor": "midnightGreen", "alertColor": "#C0392B" }
//! }
//! ```
//!
//! The shape is decided once, by the presence of the `primary` key, and
//! normalized into a [`ColorModel`]. Color values are not validated here.

use serde_json::{Map, Value};
use std::path::Path;
use tracing::debug;

use super::{parse_json, read_config_text};
use crate::error::{GenerateError, Result};
use crate::models::ColorModel;

/// Key whose presence marks the grouped shape.
pub const PRIMARY_KEY: &str = "primary";

/// Key holding semantic tokens in the grouped shape.
pub const SEMANTIC_KEY: &str = "semantic";

/// The two accepted input shapes.
#[derive(Debug, Clone, PartialEq)]
enum ColorConfigShape {
    /// Every top-level entry is a primary color; no semantic tokens
    Flat(Map<String, Value>),
    /// Explicit primary and semantic groups
    Grouped {
        primary: Map<String, Value>,
        semantic: Map<String, Value>,
    },
}

impl ColorConfigShape {
    fn detect(mut root: Map<String, Value>, source_name: &str) -> Result<Self> {
        let Some(primary) = root.remove(PRIMARY_KEY) else {
            return Ok(Self::Flat(root));
        };

        let primary = expect_object(primary, PRIMARY_KEY, source_name)?;
        let semantic = match root.remove(SEMANTIC_KEY) {
            Some(value) => expect_object(value, SEMANTIC_KEY, source_name)?,
            None => Map::new(),
        };

        if !root.is_empty() {
            let unknown: Vec<String> = root.keys().map(|key| format!("`{key}`")).collect();
            return Err(GenerateError::malformed(
                source_name,
                format!(
                    "unexpected top-level keys {} next to `{PRIMARY_KEY}`; \
                     only `{PRIMARY_KEY}` and `{SEMANTIC_KEY}` are allowed",
                    unknown.join(", ")
                ),
            ));
        }

        Ok(Self::Grouped { primary, semantic })
    }

    fn into_model(self, source_name: &str) -> Result<ColorModel> {
        let (primary, semantic) = match self {
            Self::Flat(primary) => (primary, Map::new()),
            Self::Grouped { primary, semantic } => (primary, semantic),
        };

        let primary = string_pairs(primary, PRIMARY_KEY, source_name)?;
        let semantic = string_pairs(semantic, SEMANTIC_KEY, source_name)?;

        Ok(ColorModel::from_pairs(primary, semantic))
    }
}

fn expect_object(value: Value, key: &str, source_name: &str) -> Result<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(GenerateError::malformed(
            source_name,
            format!("`{key}` must be an object, found {}", json_kind(&other)),
        )),
    }
}

fn string_pairs(
    map: Map<String, Value>,
    group: &str,
    source_name: &str,
) -> Result<Vec<(String, String)>> {
    map.into_iter()
        .map(|(name, value)| match value {
            Value::String(text) => Ok((name, text)),
            other => Err(GenerateError::malformed(
                source_name,
                format!(
                    "{group} color `{name}` must be a string, found {}",
                    json_kind(&other)
                ),
            )),
        })
        .collect()
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parses color configuration JSON into a [`ColorModel`].
pub fn parse_color_model(json: &str, source_name: &str) -> Result<ColorModel> {
    let root: Map<String, Value> = parse_json(json, source_name)?;
    let shape = ColorConfigShape::detect(root, source_name)?;
    debug!(
        "{} uses the {} color shape",
        source_name,
        if matches!(shape, ColorConfigShape::Flat(_)) {
            "flat"
        } else {
            "grouped"
        }
    );
    shape.into_model(source_name)
}

/// Loads and normalizes the color configuration file.
pub fn load_color_model(path: &Path) -> Result<ColorModel> {
    let json = read_config_text(path)?;
    parse_color_model(&json, &path.display().to_string())
}
