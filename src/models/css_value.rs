//! Scalar configuration values that are copied verbatim into style sheets.

use serde::{Deserialize, Deserializer};
use std::fmt;

/// A style value written either as a JSON string (`"28px"`) or a number (`1.4`).
///
/// The text is emitted exactly as configured.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CssValue(String);

impl CssValue {
    /// Wraps a value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The value text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Reads the value as a number, ignoring a trailing `px` unit.
    ///
    /// ```
    /// use brandkit::models::CssValue;
    ///
    /// assert_eq!(CssValue::new("28px").as_pixels(), Some(28.0));
    /// assert_eq!(CssValue::new("16").as_pixels(), Some(16.0));
    /// assert_eq!(CssValue::new("2em").as_pixels(), None);
    /// ```
    #[must_use]
    pub fn as_pixels(&self) -> Option<f64> {
        let text = self.0.trim();
        let number = text.strip_suffix("px").unwrap_or(text).trim();
        number.parse::<f64>().ok().filter(|value| value.is_finite())
    }
}

impl fmt::Display for CssValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CssValue {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for CssValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(text) => Self(text),
            Raw::Number(number) => Self(number.to_string()),
        })
    }
}

/// Formats a number for emission: no trailing `.0` on whole values.
///
/// ```
/// use brandkit::models::css_value::format_number;
///
/// assert_eq!(format_number(21.0), "21");
/// assert_eq!(format_number(0.8), "0.8");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_string_and_number() {
        let values: Vec<CssValue> = serde_json::from_str(r#"["28px", 1.4, 600, "normal"]"#).unwrap();
        let texts: Vec<&str> = values.iter().map(CssValue::as_str).collect();
        assert_eq!(texts, vec!["28px", "1.4", "600", "normal"]);
    }

    #[test]
    fn test_deserialize_rejects_objects() {
        let result: Result<CssValue, _> = serde_json::from_str(r#"{"size": 1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_as_pixels() {
        assert_eq!(CssValue::new(" 24px ").as_pixels(), Some(24.0));
        assert_eq!(CssValue::new("17.5").as_pixels(), Some(17.5));
        assert_eq!(CssValue::new("1.2rem").as_pixels(), None);
        assert_eq!(CssValue::new("").as_pixels(), None);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(28.0 * 0.75), "21");
        assert_eq!(format_number(22.0 * 0.75), "16.5");
        assert_eq!(format_number(1.2), "1.2");
    }
}
