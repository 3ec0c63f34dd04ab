//! RGB color handling with hex parsing, luma and palette ramps.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#?[0-9A-Fa-f]{6}$").expect("hex color pattern is valid"));

/// Returned when a string is not a 6-digit hex color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid hex color '{0}'. Expected 6 hex digits (#RRGGBB)")]
pub struct InvalidHexColor(pub String);

/// Returns true if `value` is a literal color: 6 hex digits, optionally prefixed with `#`.
///
/// ```
/// use brandkit::models::rgb::is_literal_color;
///
/// assert!(is_literal_color("#254D32"));
/// assert!(is_literal_color("a1c3b3"));
/// assert!(!is_literal_color("midnightGreen"));
/// assert!(!is_literal_color("#FFF"));
/// ```
#[must_use]
pub fn is_literal_color(value: &str) -> bool {
    HEX_COLOR.is_match(value.trim())
}

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb"
    ///
    /// # Examples
    ///
    /// ```
    /// use brandkit::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#254D32").unwrap();
    /// assert_eq!(color, RgbColor::new(0x25, 0x4D, 0x32));
    ///
    /// let color = RgbColor::from_hex("1a936f").unwrap();
    /// assert_eq!(color, RgbColor::new(0x1A, 0x93, 0x6F));
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self, InvalidHexColor> {
        let trimmed = hex.trim();
        if !is_literal_color(trimmed) {
            return Err(InvalidHexColor(hex.to_string()));
        }
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| InvalidHexColor(hex.to_string()))
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Returns the channels as fractions in [0, 1].
    #[must_use]
    pub fn fractions(&self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Weighted luma of the channel fractions.
    ///
    /// Uses the sRGB weights (0.2126, 0.7152, 0.0722) directly on the encoded
    /// channel values, without gamma linearization.
    #[must_use]
    pub fn luma(&self) -> f64 {
        let (r, g, b) = self.fractions();
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }

    /// Linear interpolation between two colors, `t` in [0, 1].
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| {
            (f64::from(b) - f64::from(a))
                .mul_add(t, f64::from(a))
                .round()
                .clamp(0.0, 255.0) as u8
        };
        Self::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Picks `n` discrete colors from `palette`.
///
/// When `n` fits in the palette the first `n` entries are returned verbatim.
/// Otherwise `n` colors are ramped linearly across the whole palette, first
/// and last entries included.
#[must_use]
pub fn pick_discrete_colors(palette: &[RgbColor], n: usize) -> Vec<RgbColor> {
    if n <= palette.len() {
        return palette[..n].to_vec();
    }
    match palette {
        [] => Vec::new(),
        [only] => vec![*only; n],
        _ => {
            let segments = (palette.len() - 1) as f64;
            (0..n)
                .map(|i| {
                    let position = i as f64 * segments / (n - 1) as f64;
                    let index = (position.floor() as usize).min(palette.len() - 2);
                    palette[index].lerp(&palette[index + 1], position - index as f64)
                })
                .collect()
        }
    }
}
