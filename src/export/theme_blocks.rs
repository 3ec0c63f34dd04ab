//! Rule blocks shared by the slide and document themes.
//!
//! Blocks only reference variables from the color and typography partials,
//! plus the layout values in [`BlockValues`]. Each returns its rules as text
//! under a `// Title` comment; themes concatenate them in [`SECTION_ORDER`].

use std::fmt::Write as _;

use super::{push_rule, push_section, scss_var};
use crate::branding::{generated_banner, CommentStyle};
use crate::constants::{
    vars, BrandAlias, BRAND_ACCENT, BRAND_BACKGROUND, BRAND_HEADING, BRAND_LINK, BRAND_MUTED,
    BRAND_TEXT, COLORS_IMPORT, TYPOGRAPHY_IMPORT,
};

/// Section marker opening the variable defaults of a themed sheet.
pub const DEFAULTS_MARKER: &str = "/*-- scss:defaults --*/";
/// Section marker opening the rules of a themed sheet.
pub const RULES_MARKER: &str = "/*-- scss:rules --*/";

/// Order in which themes emit the shared sections.
pub const SECTION_ORDER: [&str; 9] = [
    "Body",
    "Headings",
    "Links",
    "Code",
    "Renderer fixes",
    "Blockquotes",
    "Tables",
    "Utilities",
    "Layout",
];

/// Values the blocks insert verbatim: variable references or plain constants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockValues {
    /// Ancestor selector every rule is nested under (`.reveal` for slides)
    pub root: Option<&'static str>,
    /// Selector of the element holding constrained-width content
    pub content_selector: &'static str,
    /// Code background (already resolved to something a style sheet accepts)
    pub code_background: String,
    /// Code corner radius
    pub code_border_radius: String,
    /// Code line height
    pub code_line_height: String,
    /// Inline code padding
    pub inline_code_padding: String,
    /// Margin around blocks
    pub block_margin: String,
    /// Small margin
    pub small_margin: String,
    /// Blockquote padding
    pub blockquote_padding: String,
    /// Blockquote corner radius
    pub blockquote_border_radius: String,
    /// Width of the blockquote accent border
    pub blockquote_border_width: String,
    /// Blockquote margin
    pub blockquote_margin: String,
    /// Blockquote box shadow
    pub blockquote_shadow: String,
    /// Table cell padding
    pub table_cell_padding: String,
    /// Opacity of table row borders
    pub table_border_opacity: String,
    /// Transition used on links
    pub transition: String,
    /// Maximum content width
    pub content_max_width: String,
}

impl BlockValues {
    /// Selector matching the whole document body.
    fn body_selector(&self) -> &'static str {
        self.root.unwrap_or("body")
    }

    /// Prefixes every comma-separated selector with the root, if any.
    fn scoped(&self, selectors: &str) -> String {
        match self.root {
            None => selectors.to_string(),
            Some(root) => selectors
                .split(',')
                .map(|selector| format!("{root} {}", selector.trim()))
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

fn brand(alias: &BrandAlias) -> String {
    scss_var(&alias.variable())
}

fn var(name: &str) -> String {
    scss_var(name)
}

fn section(title: &str) -> String {
    let mut output = String::new();
    push_section(&mut output, title);
    output
}

/// Body text and page colors.
#[must_use]
pub fn body_block(values: &BlockValues) -> String {
    let mut output = section(SECTION_ORDER[0]);
    push_rule(
        &mut output,
        values.body_selector(),
        &[
            ("font-family", var(vars::BODY_FONT)),
            ("font-size", var(vars::MAIN_FONT_SIZE)),
            ("font-weight", var(vars::BODY_FONT_WEIGHT)),
            ("line-height", var(vars::BODY_LINE_HEIGHT)),
            ("letter-spacing", var(vars::BODY_LETTER_SPACING)),
            ("color", brand(&BRAND_TEXT)),
            ("background-color", brand(&BRAND_BACKGROUND)),
        ],
    );
    push_rule(
        &mut output,
        &values.scoped("strong, b"),
        &[("font-weight", var(vars::BOLD_FONT_WEIGHT))],
    );
    output
}

/// Heading family, weight and the four heading sizes.
#[must_use]
pub fn headings_block(values: &BlockValues) -> String {
    let mut output = section(SECTION_ORDER[1]);
    push_rule(
        &mut output,
        &values.scoped("h1, h2, h3, h4"),
        &[
            ("font-family", var(vars::HEADING_FONT)),
            ("font-weight", var(vars::HEADING_FONT_WEIGHT)),
            ("line-height", var(vars::HEADING_LINE_HEIGHT)),
            ("letter-spacing", var(vars::HEADING_LETTER_SPACING)),
            ("color", brand(&BRAND_HEADING)),
            ("margin", format!("0 0 {}", values.small_margin)),
        ],
    );
    for (level, size) in vars::HEADING_SIZES.iter().enumerate() {
        push_rule(
            &mut output,
            &values.scoped(&format!("h{}", level + 1)),
            &[("font-size", var(size))],
        );
    }
    output
}

/// Link colors and hover state.
#[must_use]
pub fn links_block(values: &BlockValues) -> String {
    let mut output = section(SECTION_ORDER[2]);
    push_rule(
        &mut output,
        &values.scoped("a"),
        &[
            ("color", brand(&BRAND_LINK)),
            ("text-decoration", "none".to_string()),
            ("transition", values.transition.clone()),
        ],
    );
    push_rule(
        &mut output,
        &values.scoped("a:hover, a:focus"),
        &[
            ("color", brand(&BRAND_ACCENT)),
            ("text-decoration", "underline".to_string()),
        ],
    );
    output
}

/// Inline code and code blocks.
#[must_use]
pub fn code_block(values: &BlockValues) -> String {
    let mut output = section(SECTION_ORDER[3]);
    push_rule(
        &mut output,
        &values.scoped("code"),
        &[
            ("font-family", var(vars::MONOSPACE_FONT)),
            ("background-color", values.code_background.clone()),
            ("border-radius", values.code_border_radius.clone()),
            ("padding", values.inline_code_padding.clone()),
        ],
    );
    push_rule(
        &mut output,
        &values.scoped("pre"),
        &[
            ("background-color", values.code_background.clone()),
            ("border-radius", values.code_border_radius.clone()),
            ("line-height", values.code_line_height.clone()),
            ("margin", format!("{} 0", values.block_margin)),
            ("padding", values.small_margin.clone()),
        ],
    );
    push_rule(
        &mut output,
        &values.scoped("pre code"),
        &[
            ("background-color", "transparent".to_string()),
            ("padding", "0".to_string()),
        ],
    );
    output
}

/// Adjustments for markup the document renderer generates around code,
/// callouts and figures.
#[must_use]
pub fn renderer_fixes_block(values: &BlockValues) -> String {
    let mut output = section(SECTION_ORDER[4]);
    push_rule(
        &mut output,
        &values.scoped("div.sourceCode"),
        &[
            ("background-color", values.code_background.clone()),
            ("border", "none".to_string()),
            ("border-radius", values.code_border_radius.clone()),
            ("margin", format!("{} 0", values.block_margin)),
        ],
    );
    push_rule(
        &mut output,
        &values.scoped("div.sourceCode pre"),
        &[("margin", "0".to_string())],
    );
    push_rule(
        &mut output,
        &values.scoped(".callout"),
        &[
            ("margin", format!("{} 0", values.block_margin)),
            ("border-left-color", brand(&BRAND_ACCENT)),
        ],
    );
    push_rule(
        &mut output,
        &values.scoped("figure figcaption, .figure-caption"),
        &[
            ("color", brand(&BRAND_MUTED)),
            ("font-size", "0.8em".to_string()),
        ],
    );
    push_rule(
        &mut output,
        &values.scoped(".cell-output-display"),
        &[("margin", format!("{} 0", values.small_margin))],
    );
    output
}

/// Blockquotes with an accent border.
#[must_use]
pub fn blockquote_block(values: &BlockValues) -> String {
    let mut output = section(SECTION_ORDER[5]);
    push_rule(
        &mut output,
        &values.scoped("blockquote"),
        &[
            ("padding", values.blockquote_padding.clone()),
            ("margin", values.blockquote_margin.clone()),
            (
                "border-left",
                format!("{} solid {}", values.blockquote_border_width, brand(&BRAND_ACCENT)),
            ),
            ("border-radius", values.blockquote_border_radius.clone()),
            ("box-shadow", values.blockquote_shadow.clone()),
            ("background-color", format!("rgba({}, 0.15)", brand(&BRAND_MUTED))),
            ("color", brand(&BRAND_TEXT)),
            ("font-style", "normal".to_string()),
        ],
    );
    push_rule(
        &mut output,
        &values.scoped("blockquote p:last-child"),
        &[("margin-bottom", "0".to_string())],
    );
    output
}

/// Tables.
#[must_use]
pub fn table_block(values: &BlockValues) -> String {
    let mut output = section(SECTION_ORDER[6]);
    push_rule(
        &mut output,
        &values.scoped("table"),
        &[
            ("border-collapse", "collapse".to_string()),
            ("margin", format!("{} 0", values.block_margin)),
        ],
    );
    push_rule(
        &mut output,
        &values.scoped("th, td"),
        &[
            ("padding", values.table_cell_padding.clone()),
            (
                "border-bottom",
                format!(
                    "1px solid rgba({}, {})",
                    brand(&BRAND_TEXT),
                    values.table_border_opacity
                ),
            ),
        ],
    );
    push_rule(
        &mut output,
        &values.scoped("th"),
        &[
            ("font-family", var(vars::HEADING_FONT)),
            ("font-weight", var(vars::HEADING_FONT_WEIGHT)),
            ("color", brand(&BRAND_HEADING)),
            ("border-bottom", format!("2px solid {}", brand(&BRAND_HEADING))),
        ],
    );
    output
}

/// Color and spacing helper classes.
#[must_use]
pub fn utilities_block(values: &BlockValues) -> String {
    let mut output = section(SECTION_ORDER[7]);
    push_rule(&mut output, ".muted", &[("color", brand(&BRAND_MUTED))]);
    push_rule(&mut output, ".accent", &[("color", brand(&BRAND_ACCENT))]);
    for (class, property, value) in [
        (".mt-small", "margin-top", &values.small_margin),
        (".mb-small", "margin-bottom", &values.small_margin),
        (".mt-block", "margin-top", &values.block_margin),
        (".mb-block", "margin-bottom", &values.block_margin),
    ] {
        push_rule(&mut output, class, &[(property, value.clone())]);
    }
    output
}

/// Content width and the narrow-screen adjustments.
#[must_use]
pub fn layout_block(values: &BlockValues) -> String {
    let mut output = section(SECTION_ORDER[8]);
    push_rule(
        &mut output,
        values.content_selector,
        &[
            ("max-width", values.content_max_width.clone()),
            ("margin-left", "auto".to_string()),
            ("margin-right", "auto".to_string()),
        ],
    );
    output.push_str("@media (max-width: 768px) {\n");
    let _ = writeln!(
        output,
        "  {} {{\n    font-size: 0.9em;\n  }}",
        values.body_selector()
    );
    let _ = writeln!(
        output,
        "  {} {{\n    display: block;\n    overflow-x: auto;\n  }}",
        values.scoped("table")
    );
    output.push_str("}\n");
    output
}

/// Opening of a themed sheet: banner, defaults marker and partial imports.
pub(crate) fn themed_header(sources: &[&str]) -> String {
    let mut output = generated_banner(CommentStyle::Slashes, sources);
    let _ = writeln!(output, "{DEFAULTS_MARKER}\n");
    let _ = writeln!(output, "@import \"{COLORS_IMPORT}\";");
    let _ = writeln!(output, "@import \"{TYPOGRAPHY_IMPORT}\";");
    output
}

/// All shared sections, in [`SECTION_ORDER`].
#[must_use]
pub fn shared_sections(values: &BlockValues) -> [String; 9] {
    [
        body_block(values),
        headings_block(values),
        links_block(values),
        code_block(values),
        renderer_fixes_block(values),
        blockquote_block(values),
        table_block(values),
        utilities_block(values),
        layout_block(values),
    ]
}
