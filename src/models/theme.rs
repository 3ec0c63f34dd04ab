//! Slide-theme overrides: layout, shadow, transition, code, table and blockquote constants.

use serde::Deserialize;

use super::CssValue;

/// Margin scale.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Margins {
    /// Small margin
    pub small_margin: CssValue,
    /// Margin around blocks
    pub block_margin: CssValue,
    /// Large margin
    pub large_margin: CssValue,
}

/// Code block styling.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeStyle {
    /// Code block background; a literal color, a token name, or any style expression
    pub code_background_color: String,
    /// Code block corner radius
    pub code_border_radius: CssValue,
    /// Code line height
    pub code_line_height: CssValue,
    /// Padding of inline code spans
    pub inline_code_padding: CssValue,
}

/// Content layout.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentLayout {
    /// Maximum content width
    pub content_max_width: CssValue,
}

/// Shadows.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadows {
    /// Shadow for text on light backgrounds
    pub light_text_shadow: CssValue,
    /// Shadow for text on dark backgrounds
    pub dark_text_shadow: CssValue,
    /// Blockquote box shadow
    pub blockquote_shadow: CssValue,
}

/// Transitions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transitions {
    /// Transition applied to links and interactive elements
    pub default_transition: CssValue,
}

/// Blockquote styling.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockquoteStyle {
    /// Inner padding
    pub blockquote_padding: CssValue,
    /// Corner radius
    pub blockquote_border_radius: CssValue,
    /// Width of the accent border
    pub blockquote_border_width: CssValue,
    /// Outer margin
    pub blockquote_margin: CssValue,
}

/// Table styling.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableStyle {
    /// Opacity of cell borders (0-1)
    pub table_border_opacity: CssValue,
    /// Cell padding
    pub table_cell_padding: CssValue,
}

/// Slide positioning helpers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Positioning {
    /// Top margin for `.reveal .slides section.margin-top-15`
    #[serde(rename = "slideMarginTop15")]
    pub slide_margin_top_15: CssValue,
    /// Top margin for `.reveal .slides section.margin-top-25`
    #[serde(rename = "slideMarginTop25")]
    pub slide_margin_top_25: CssValue,
    /// `top` offset for `.reveal .center-vertical`
    #[serde(rename = "centerVertical")]
    pub center_vertical: CssValue,
}

/// Slide box.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideBox {
    /// Slide padding
    pub slide_padding: CssValue,
}

/// Flat record of constants used by the slide-deck theme only.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ThemeOverrides {
    /// Margin scale
    pub margins: Margins,
    /// Code block styling
    pub code: CodeStyle,
    /// Content layout
    pub layout: ContentLayout,
    /// Shadows
    pub shadows: Shadows,
    /// Transitions
    pub transitions: Transitions,
    /// Blockquote styling
    pub blockquote: BlockquoteStyle,
    /// Table styling
    pub table: TableStyle,
    /// Positioning helpers
    pub positioning: Positioning,
    /// Slide box
    pub slides: SlideBox,
}
