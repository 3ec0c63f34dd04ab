//! Canonical color-token model.
//!
//! Both input shapes (flat and grouped) are normalized into a [`ColorModel`]
//! once, at load time. Nothing downstream knows which shape the file had.

use super::RgbColor;

/// Which group a token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenGroup {
    /// Brand color defined by a literal value
    Primary,
    /// Named role pointing at a primary color or holding its own literal
    Semantic,
}

/// Raw value of a color token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorValue {
    /// A literal color as written in the configuration (not yet validated)
    Literal(String),
    /// The identifier of a primary token
    Reference(String),
}

impl ColorValue {
    /// The raw text of the value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Literal(value) | Self::Reference(value) => value,
        }
    }
}

/// A named color token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorToken {
    /// Unique identifier (also the style-sheet variable name)
    pub id: String,
    /// Literal value or reference
    pub value: ColorValue,
}

impl ColorToken {
    /// Creates a literal-valued token.
    pub fn literal(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: ColorValue::Literal(value.into()),
        }
    }

    /// Creates a token referencing a primary token.
    pub fn reference(id: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: ColorValue::Reference(target.into()),
        }
    }
}

/// Primary and semantic color tokens, in configuration order.
///
/// Primary tokens are always literal. A semantic token is a reference when its
/// raw value names a primary token, otherwise a literal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorModel {
    /// Primary tokens, all literal
    pub primary: Vec<ColorToken>,
    /// Semantic tokens, literal or referencing a primary token
    pub semantic: Vec<ColorToken>,
}

impl ColorModel {
    /// Builds a model from raw `(name, value)` pairs.
    ///
    /// Semantic values equal to a primary identifier become references (by
    /// name, so palette changes propagate); everything else stays literal.
    pub fn from_pairs<P, S>(primary: P, semantic: S) -> Self
    where
        P: IntoIterator<Item = (String, String)>,
        S: IntoIterator<Item = (String, String)>,
    {
        let primary: Vec<ColorToken> = primary
            .into_iter()
            .map(|(id, value)| ColorToken::literal(id, value))
            .collect();

        let semantic = semantic
            .into_iter()
            .map(|(id, value)| {
                if primary.iter().any(|token| token.id == value) {
                    ColorToken::reference(id, value)
                } else {
                    ColorToken::literal(id, value)
                }
            })
            .collect();

        Self { primary, semantic }
    }

    /// Looks up a primary token by identifier.
    #[must_use]
    pub fn primary_token(&self, id: &str) -> Option<&ColorToken> {
        self.primary.iter().find(|token| token.id == id)
    }

    /// Looks up a semantic token by identifier.
    #[must_use]
    pub fn semantic_token(&self, id: &str) -> Option<&ColorToken> {
        self.semantic.iter().find(|token| token.id == id)
    }

    /// All tokens, primary first, then semantic.
    pub fn tokens(&self) -> impl Iterator<Item = (TokenGroup, &ColorToken)> {
        self.primary
            .iter()
            .map(|token| (TokenGroup::Primary, token))
            .chain(
                self.semantic
                    .iter()
                    .map(|token| (TokenGroup::Semantic, token)),
            )
    }
}

/// High-contrast foreground chosen for a background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Contrast {
    /// Dark foreground, used on light backgrounds
    Black,
    /// Light foreground, used on dark backgrounds
    White,
}

impl Contrast {
    /// Luma above which a background counts as light.
    pub const THRESHOLD: f64 = 0.5;

    /// Picks the foreground for `background`.
    ///
    /// ```
    /// use brandkit::models::{Contrast, RgbColor};
    ///
    /// assert_eq!(Contrast::for_background(RgbColor::new(255, 255, 255)), Contrast::Black);
    /// assert_eq!(Contrast::for_background(RgbColor::new(0, 0, 0)), Contrast::White);
    /// ```
    #[must_use]
    pub fn for_background(background: RgbColor) -> Self {
        if background.luma() > Self::THRESHOLD {
            Self::Black
        } else {
            Self::White
        }
    }

    /// The style-sheet keyword for this foreground.
    #[must_use]
    pub const fn as_css(&self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
        }
    }
}
