//! Reference resolution for color tokens.
//!
//! Turns a [`ColorModel`] into a [`ResolvedPalette`]: every token gets a
//! concrete [`RgbColor`] (following at most one reference to a primary
//! token) and a contrast foreground. Emitters only ever read the palette.

use std::fmt;
use tracing::debug;

use super::validator::validate_color_model;
use crate::constants::BrandAlias;
use crate::error::{GenerateError, Result};
use crate::models::rgb::is_literal_color;
use crate::models::{ColorModel, ColorValue, Contrast, RgbColor, TokenGroup};

/// A token with its concrete value and derived contrast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColor {
    /// Token identifier
    pub id: String,
    /// Group the token was declared in
    pub group: TokenGroup,
    /// Concrete color
    pub value: RgbColor,
    /// Primary token this one points at, for reference-valued semantic tokens
    pub reference: Option<String>,
    /// Foreground that reads well on `value`
    pub contrast: Contrast,
}

/// Result of [`ResolvedPalette::resolve_name`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorRef {
    /// Already a literal color; emitted unchanged
    Literal(String),
    /// A palette token, emitted as a style-sheet variable
    Variable(String),
    /// Unknown name, assumed usable downstream as is
    Passthrough(String),
}

impl fmt::Display for ColorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) | Self::Passthrough(value) => f.write_str(value),
            Self::Variable(name) => write!(f, "${name}"),
        }
    }
}

/// Every color token resolved, primary tokens first, in configuration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPalette {
    colors: Vec<ResolvedColor>,
    source_name: String,
}

impl ResolvedPalette {
    /// Resolves all tokens of `model`.
    ///
    /// Fails with `ConfigMalformed` (naming `source_name`) when a value is not
    /// a hex color, a semantic token refers to another semantic token, or an
    /// identifier is declared in both groups.
    pub fn resolve(model: &ColorModel, source_name: &str) -> Result<Self> {
        let report = validate_color_model(model);
        for warning in &report.warnings {
            debug!("{}: {}", source_name, warning);
        }
        if !report.is_valid() {
            return Err(GenerateError::malformed(source_name, report.format_message()));
        }

        let parse = |id: &str, raw: &str| {
            RgbColor::from_hex(raw)
                .map_err(|err| GenerateError::malformed(source_name, format!("`{id}`: {err}")))
        };

        let mut colors = Vec::with_capacity(model.primary.len() + model.semantic.len());
        for (group, token) in model.tokens() {
            let (value, reference) = match &token.value {
                ColorValue::Literal(raw) => (parse(&token.id, raw)?, None),
                ColorValue::Reference(target) => {
                    let primary = model.primary_token(target).ok_or_else(|| {
                        GenerateError::malformed(
                            source_name,
                            format!("`{}` refers to unknown primary color `{target}`", token.id),
                        )
                    })?;
                    (
                        parse(&primary.id, primary.value.as_str())?,
                        Some(target.clone()),
                    )
                }
            };

            colors.push(ResolvedColor {
                id: token.id.clone(),
                group,
                value,
                reference,
                contrast: Contrast::for_background(value),
            });
        }

        debug!(
            "Resolved {} colors from {} ({} primary)",
            colors.len(),
            source_name,
            model.primary.len()
        );
        Ok(Self {
            colors,
            source_name: source_name.to_string(),
        })
    }

    /// All resolved colors, primary first.
    pub fn iter(&self) -> impl Iterator<Item = &ResolvedColor> {
        self.colors.iter()
    }

    /// Resolved colors of one group, in configuration order.
    pub fn group(&self, group: TokenGroup) -> impl Iterator<Item = &ResolvedColor> {
        self.colors.iter().filter(move |color| color.group == group)
    }

    /// Looks up a resolved color by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ResolvedColor> {
        self.colors.iter().find(|color| color.id == id)
    }

    fn get_in(&self, group: TokenGroup, id: &str) -> Option<&ResolvedColor> {
        self.group(group).find(|color| color.id == id)
    }

    /// Concrete value of a primary token.
    pub fn primary_value(&self, id: &str) -> Result<RgbColor> {
        self.get_in(TokenGroup::Primary, id)
            .map(|color| color.value)
            .ok_or_else(|| {
                GenerateError::malformed(
                    &self.source_name,
                    format!("primary color `{id}` is not defined"),
                )
            })
    }

    /// Primary colors in configuration order.
    #[must_use]
    pub fn primary_palette(&self) -> Vec<RgbColor> {
        self.group(TokenGroup::Primary).map(|color| color.value).collect()
    }

    /// Resolves a name given in theme overrides to something a style sheet can use.
    ///
    /// Precedence: a literal color is returned unchanged; a semantic token that
    /// points at a primary resolves to that primary; any other semantic token
    /// resolves to itself; a primary token resolves to itself; anything else is
    /// passed through.
    #[must_use]
    pub fn resolve_name(&self, name: &str) -> ColorRef {
        if is_literal_color(name) {
            return ColorRef::Literal(name.to_string());
        }
        if let Some(semantic) = self.get_in(TokenGroup::Semantic, name) {
            return ColorRef::Variable(
                semantic
                    .reference
                    .clone()
                    .unwrap_or_else(|| semantic.id.clone()),
            );
        }
        if let Some(primary) = self.get_in(TokenGroup::Primary, name) {
            return ColorRef::Variable(primary.id.clone());
        }
        ColorRef::Passthrough(name.to_string())
    }

    /// Token a brand alias points at: its semantic role when configured,
    /// otherwise the fallback primary.
    pub fn brand_alias_target(&self, alias: &BrandAlias) -> Result<&ResolvedColor> {
        self.get_in(TokenGroup::Semantic, alias.role)
            .or_else(|| self.get_in(TokenGroup::Primary, alias.fallback_primary))
            .ok_or_else(|| {
                GenerateError::malformed(
                    &self.source_name,
                    format!(
                        "${} needs semantic color `{}` or primary color `{}`",
                        alias.variable(),
                        alias.role,
                        alias.fallback_primary
                    ),
                )
            })
    }
}
