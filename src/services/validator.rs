//! Color model validation before resolution.
//!
//! Collects every problem in one pass so a broken configuration is reported
//! in full instead of one error per run.

// Allow format! appended to String - more readable for building messages
#![allow(clippy::format_push_string)]

use std::collections::HashSet;
use std::fmt;

use crate::constants::BRAND_ALIASES;
use crate::models::rgb::is_literal_color;
use crate::models::{ColorModel, ColorValue};

/// Validation result with specific errors and warnings.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Problems that prevent generation
    pub errors: Vec<ValidationError>,
    /// Non-blocking observations
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Creates an empty report.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Returns true if there are no errors (warnings are allowed).
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Adds an error.
    pub fn add_error(
        &mut self,
        kind: ValidationErrorKind,
        token: &str,
        message: impl Into<String>,
    ) {
        self.errors.push(ValidationError {
            kind,
            token: token.to_string(),
            message: message.into(),
        });
    }

    /// Adds a warning.
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Formats the errors as one message, numbered.
    #[must_use]
    pub fn format_message(&self) -> String {
        let mut message = format!("{} validation errors:", self.errors.len());
        for (idx, error) in self.errors.iter().enumerate() {
            message.push_str(&format!("\n  {}. {}", idx + 1, error));
        }
        message
    }
}

/// A blocking problem tied to one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Category of the problem
    pub kind: ValidationErrorKind,
    /// Offending token identifier
    pub token: String,
    /// Human-readable explanation
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} `{}`: {}", self.kind, self.token, self.message)
    }
}

/// Types of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Value is neither a 6-digit hex color nor a primary reference
    InvalidColor,
    /// Semantic token names another semantic token
    ChainedReference,
    /// Identifier present in both groups
    DuplicateToken,
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColor => write!(f, "Invalid color"),
            Self::ChainedReference => write!(f, "Chained reference"),
            Self::DuplicateToken => write!(f, "Duplicate token"),
        }
    }
}

/// Checks a color model for values the resolver cannot handle.
#[must_use]
pub fn validate_color_model(model: &ColorModel) -> ValidationReport {
    let mut report = ValidationReport::new();

    for token in &model.primary {
        if !is_literal_color(token.value.as_str()) {
            report.add_error(
                ValidationErrorKind::InvalidColor,
                &token.id,
                format!(
                    "primary value '{}' is not a #RRGGBB color",
                    token.value.as_str()
                ),
            );
        }
    }

    let primary_ids: HashSet<&str> = model.primary.iter().map(|t| t.id.as_str()).collect();
    let semantic_ids: HashSet<&str> = model.semantic.iter().map(|t| t.id.as_str()).collect();

    for token in &model.semantic {
        if primary_ids.contains(token.id.as_str()) {
            report.add_error(
                ValidationErrorKind::DuplicateToken,
                &token.id,
                "defined as both a primary and a semantic color",
            );
        }

        let ColorValue::Literal(raw) = &token.value else {
            continue;
        };
        if is_literal_color(raw) {
            continue;
        }
        if semantic_ids.contains(raw.trim()) {
            report.add_error(
                ValidationErrorKind::ChainedReference,
                &token.id,
                format!(
                    "refers to semantic color `{}`; only primary colors can be referenced",
                    raw.trim()
                ),
            );
        } else {
            report.add_error(
                ValidationErrorKind::InvalidColor,
                &token.id,
                format!("'{raw}' is neither a #RRGGBB color nor a primary color name"),
            );
        }
    }

    if !model.semantic.is_empty() {
        for alias in &BRAND_ALIASES {
            if !semantic_ids.contains(alias.role) {
                report.add_warning(format!(
                    "semantic color `{}` is not defined; ${} falls back to `{}`",
                    alias.role,
                    alias.variable(),
                    alias.fallback_primary
                ));
            }
        }
    }

    report
}
