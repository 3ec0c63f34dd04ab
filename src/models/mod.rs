//! Data models for design tokens, typography and theme overrides.
//!
//! Models are built fresh for every generation run and are read-only once
//! constructed. They are independent of file formats and emitters.

pub mod color;
pub mod css_value;
pub mod rgb;
pub mod theme;
pub mod typography;

// Re-export all model types
pub use color::{ColorModel, ColorToken, ColorValue, Contrast, TokenGroup};
pub use css_value::CssValue;
pub use rgb::RgbColor;
pub use theme::ThemeOverrides;
pub use typography::{
    FontFamilies, FontWeights, LayoutOverrides, LetterSpacing, RelativeSizes, SizeMode,
    SizeTable, TypographyModel,
};
