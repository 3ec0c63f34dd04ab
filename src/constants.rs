//! Shared constants for every emitter.
//!
//! Artifact file names, style-sheet variable names, utility class names and
//! the brand alias table live here and nowhere else, so the generated
//! artifacts cannot drift apart.

// ============================================================================
// Artifact file names (compatibility contract with the document renderer)
// ============================================================================

/// Color style-sheet partial, written once per document family.
pub const COLORS_PARTIAL_FILE: &str = "_brand-colors.scss";

/// Typography style-sheet partial, written once per document family.
pub const TYPOGRAPHY_PARTIAL_FILE: &str = "_brand-typography.scss";

/// Import name of [`COLORS_PARTIAL_FILE`].
pub const COLORS_IMPORT: &str = "brand-colors";

/// Import name of [`TYPOGRAPHY_PARTIAL_FILE`].
pub const TYPOGRAPHY_IMPORT: &str = "brand-typography";

/// Slide-deck custom theme.
pub const SLIDE_THEME_FILE: &str = "brand-slides.scss";

/// Static exercise-document theme.
pub const EXERCISE_THEME_FILE: &str = "brand-exercise.scss";

/// Font-loading HTML fragment.
pub const FONT_INCLUDE_FILE: &str = "brand-fonts.html";

/// Plotting theme script.
pub const PLOT_THEME_FILE: &str = "brand-theme.R";

/// Optional project configuration file.
pub const PROJECT_CONFIG_FILE: &str = "brandkit.toml";

// ============================================================================
// Color utilities
// ============================================================================

/// Class prefix for background utilities (`.bg-<token>`).
pub const BG_CLASS_PREFIX: &str = "bg";
/// Class prefix for foreground utilities (`.text-<token>`).
pub const TEXT_CLASS_PREFIX: &str = "text";
/// Class prefix for border utilities (`.border-<token>`).
pub const BORDER_CLASS_PREFIX: &str = "border";
/// Class prefix for highlight blocks (`.text-bg-<token>`).
pub const TEXT_BG_CLASS_PREFIX: &str = "text-bg";
/// Class prefix for inverse highlight blocks (`.text-highlight-<token>`).
pub const TEXT_HIGHLIGHT_CLASS_PREFIX: &str = "text-highlight";

/// Padding of the highlight blocks.
pub const TEXT_BLOCK_PADDING: &str = "0.1em 0.3em";
/// Corner radius of the highlight blocks.
pub const TEXT_BLOCK_RADIUS: &str = "0.2em";

/// A fixed brand alias bound to a semantic role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandAlias {
    /// Alias suffix; the variable is `$brand-<name>`
    pub name: &'static str,
    /// Semantic token expected to carry the role
    pub role: &'static str,
    /// Primary token used when the role is not configured
    pub fallback_primary: &'static str,
}

impl BrandAlias {
    /// Variable name without the `$` sigil.
    #[must_use]
    pub fn variable(&self) -> String {
        format!("brand-{}", self.name)
    }
}

/// Body text color.
pub const BRAND_TEXT: BrandAlias = BrandAlias {
    name: "text",
    role: "textColor",
    fallback_primary: "black",
};
/// Page background.
pub const BRAND_BACKGROUND: BrandAlias = BrandAlias {
    name: "background",
    role: "backgroundColor",
    fallback_primary: "white",
};
/// Heading color.
pub const BRAND_HEADING: BrandAlias = BrandAlias {
    name: "heading",
    role: "headingColor",
    fallback_primary: "midnightGreen",
};
/// Link color.
pub const BRAND_LINK: BrandAlias = BrandAlias {
    name: "link",
    role: "linkColor",
    fallback_primary: "persianGreen",
};
/// Accent color.
pub const BRAND_ACCENT: BrandAlias = BrandAlias {
    name: "accent",
    role: "accentColor",
    fallback_primary: "satinSheenGold",
};
/// De-emphasized color.
pub const BRAND_MUTED: BrandAlias = BrandAlias {
    name: "muted",
    role: "mutedColor",
    fallback_primary: "cambridgeBlue",
};

/// Aliases appended to every color style sheet, in emission order.
pub const BRAND_ALIASES: [BrandAlias; 6] = [
    BRAND_TEXT,
    BRAND_BACKGROUND,
    BRAND_HEADING,
    BRAND_LINK,
    BRAND_ACCENT,
    BRAND_MUTED,
];

// ============================================================================
// Typography
// ============================================================================

/// Style-sheet variable names defined by the typography partial.
pub mod vars {
    /// Body family
    pub const BODY_FONT: &str = "bodyFont";
    /// Heading family
    pub const HEADING_FONT: &str = "headingFont";
    /// Code family
    pub const MONOSPACE_FONT: &str = "monospaceFont";
    /// Base size
    pub const MAIN_FONT_SIZE: &str = "mainFontSize";
    /// Heading sizes, level 1 to 4
    pub const HEADING_SIZES: [&str; 4] = [
        "heading1Size",
        "heading2Size",
        "heading3Size",
        "heading4Size",
    ];
    /// Body line height
    pub const BODY_LINE_HEIGHT: &str = "bodyLineHeight";
    /// Heading line height
    pub const HEADING_LINE_HEIGHT: &str = "headingLineHeight";
    /// Heading weight
    pub const HEADING_FONT_WEIGHT: &str = "headingFontWeight";
    /// Body weight
    pub const BODY_FONT_WEIGHT: &str = "bodyFontWeight";
    /// Bold weight
    pub const BOLD_FONT_WEIGHT: &str = "boldFontWeight";
    /// Heading letter spacing
    pub const HEADING_LETTER_SPACING: &str = "headingLetterSpacing";
    /// Body letter spacing
    pub const BODY_LETTER_SPACING: &str = "bodyLetterSpacing";
    /// Maximum content width
    pub const MAX_CONTENT_WIDTH: &str = "maxContentWidth";
    /// Block margin
    pub const BLOCK_MARGIN: &str = "blockMargin";
    /// Small margin
    pub const SMALL_MARGIN: &str = "smallMargin";
}

/// A set of values for the three relative-size classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelativeSizeSet {
    /// `.text-small`
    pub small: &'static str,
    /// `.text-tiny`
    pub tiny: &'static str,
    /// `.text-large`
    pub large: &'static str,
}

/// Class names of the relative-size utilities.
pub const RELATIVE_SIZE_CLASSES: RelativeSizeSet = RelativeSizeSet {
    small: "text-small",
    tiny: "text-tiny",
    large: "text-large",
};

/// Multipliers used in HTML mode.
pub const HTML_RELATIVE_SIZES: RelativeSizeSet = RelativeSizeSet {
    small: "0.8",
    tiny: "0.7",
    large: "1.2",
};

/// Fallbacks for the layout values the HTML size table may override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutFallbacks {
    /// Maximum content width
    pub max_width: &'static str,
    /// Block margin
    pub block_margin: &'static str,
    /// Small margin
    pub small_margin: &'static str,
}

/// Hard-coded layout fallbacks.
pub const LAYOUT_FALLBACKS: LayoutFallbacks = LayoutFallbacks {
    max_width: "800px",
    block_margin: "1.5em",
    small_margin: "0.5em",
};

/// Generic family appended after proportional fonts.
pub const SANS_SERIF_FALLBACK: &str = "sans-serif";
/// Generic family appended after the code font.
pub const MONOSPACE_FALLBACK: &str = "monospace";

// ============================================================================
// Font hosting
// ============================================================================

/// Base URL of the hosted font stylesheet API.
pub const FONT_HOST_URL: &str = "https://fonts.googleapis.com/css2";

/// Weights requested for the body family.
pub const BODY_FONT_WEIGHTS: &[u16] = &[400, 500, 600, 700];
/// Weights requested for the heading family.
pub const HEADING_FONT_WEIGHTS: &[u16] = &[500, 600, 700];
/// Weights requested for the code family.
pub const MONOSPACE_FONT_WEIGHTS: &[u16] = &[400, 600];

// ============================================================================
// Plotting theme
// ============================================================================

/// Pixel to point conversion factor for plot text.
pub const PX_TO_PT: f64 = 0.75;

/// Primary tokens forming the sequential plot palette, in order.
pub const PLOT_SEQUENTIAL: [&str; 3] = ["midnightGreen", "persianGreen", "cambridgeBlue"];

/// Primary tokens forming the diverging plot scale (low, mid, high).
pub const PLOT_DIVERGING: [&str; 3] = ["persianGreen", "white", "satinSheenGold"];

/// Number of colors in the reference ramp recorded in the plot script.
pub const PLOT_REFERENCE_RAMP: usize = 8;
