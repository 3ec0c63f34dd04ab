//! Slide-deck theme generator.
//!
//! Theme overrides become `$theme-*` variables in the defaults section; the
//! rules section only references variables, never literal colors or fonts.

use std::fmt::Write as _;

use super::theme_blocks::{shared_sections, themed_header, BlockValues, RULES_MARKER};
use super::{push_declaration, push_rule, push_section, scss_var};
use crate::constants::{
    BrandAlias, BRAND_ACCENT, BRAND_BACKGROUND, BRAND_HEADING, BRAND_LINK, BRAND_MUTED, BRAND_TEXT,
};
use crate::models::ThemeOverrides;
use crate::services::ResolvedPalette;

/// Root selector of the slide framework.
const SLIDE_ROOT: &str = ".reveal";

/// Named `$theme-*` variables, in emission order.
fn theme_variables(
    theme: &ThemeOverrides,
    palette: &ResolvedPalette,
) -> Vec<(&'static str, String)> {
    vec![
        ("small-margin", theme.margins.small_margin.to_string()),
        ("block-margin", theme.margins.block_margin.to_string()),
        ("large-margin", theme.margins.large_margin.to_string()),
        (
            "code-background",
            palette.resolve_name(&theme.code.code_background_color).to_string(),
        ),
        ("code-border-radius", theme.code.code_border_radius.to_string()),
        ("code-line-height", theme.code.code_line_height.to_string()),
        ("inline-code-padding", theme.code.inline_code_padding.to_string()),
        ("content-max-width", theme.layout.content_max_width.to_string()),
        ("light-text-shadow", theme.shadows.light_text_shadow.to_string()),
        ("dark-text-shadow", theme.shadows.dark_text_shadow.to_string()),
        ("blockquote-shadow", theme.shadows.blockquote_shadow.to_string()),
        ("transition", theme.transitions.default_transition.to_string()),
        ("blockquote-padding", theme.blockquote.blockquote_padding.to_string()),
        (
            "blockquote-border-radius",
            theme.blockquote.blockquote_border_radius.to_string(),
        ),
        (
            "blockquote-border-width",
            theme.blockquote.blockquote_border_width.to_string(),
        ),
        ("blockquote-margin", theme.blockquote.blockquote_margin.to_string()),
        ("table-border-opacity", theme.table.table_border_opacity.to_string()),
        ("table-cell-padding", theme.table.table_cell_padding.to_string()),
        (
            "slide-margin-top-15",
            theme.positioning.slide_margin_top_15.to_string(),
        ),
        (
            "slide-margin-top-25",
            theme.positioning.slide_margin_top_25.to_string(),
        ),
        ("center-vertical", theme.positioning.center_vertical.to_string()),
        ("slide-padding", theme.slides.slide_padding.to_string()),
    ]
}

fn theme_var(name: &str) -> String {
    scss_var(&format!("theme-{name}"))
}

fn brand(alias: &BrandAlias) -> String {
    scss_var(&alias.variable())
}

/// Generates the slide-deck theme.
#[must_use]
pub fn generate_slide_theme(
    theme: &ThemeOverrides,
    palette: &ResolvedPalette,
    sources: &[&str],
) -> String {
    let mut output = themed_header(sources);

    push_section(&mut output, "Theme overrides");
    for (name, value) in theme_variables(theme, palette) {
        push_declaration(&mut output, &format!("theme-{name}"), value);
    }

    push_section(&mut output, "Slide framework variables");
    for (name, value) in [
        ("body-bg", brand(&BRAND_BACKGROUND)),
        ("body-color", brand(&BRAND_TEXT)),
        ("link-color", brand(&BRAND_LINK)),
        ("link-color-hover", brand(&BRAND_ACCENT)),
        ("selection-bg", brand(&BRAND_ACCENT)),
        ("presentation-heading-color", brand(&BRAND_HEADING)),
        ("code-block-bg", theme_var("code-background")),
        ("code-block-border-color", brand(&BRAND_MUTED)),
        ("code-block-font-size", "0.8em".to_string()),
    ] {
        push_declaration(&mut output, name, value);
    }

    let _ = write!(output, "\n{RULES_MARKER}\n\n");

    let values = BlockValues {
        root: Some(SLIDE_ROOT),
        content_selector: ".reveal .content-width",
        code_background: theme_var("code-background"),
        code_border_radius: theme_var("code-border-radius"),
        code_line_height: theme_var("code-line-height"),
        inline_code_padding: theme_var("inline-code-padding"),
        block_margin: theme_var("block-margin"),
        small_margin: theme_var("small-margin"),
        blockquote_padding: theme_var("blockquote-padding"),
        blockquote_border_radius: theme_var("blockquote-border-radius"),
        blockquote_border_width: theme_var("blockquote-border-width"),
        blockquote_margin: theme_var("blockquote-margin"),
        blockquote_shadow: theme_var("blockquote-shadow"),
        table_cell_padding: theme_var("table-cell-padding"),
        table_border_opacity: theme_var("table-border-opacity"),
        transition: theme_var("transition"),
        content_max_width: theme_var("content-max-width"),
    };
    output.push_str(&shared_sections(&values).join("\n"));

    output.push('\n');
    output.push_str(&slide_positioning_block());
    output
}

/// Slide padding, vertical offsets and text shadows.
fn slide_positioning_block() -> String {
    let mut output = String::new();
    push_section(&mut output, "Slide positioning");
    push_rule(
        &mut output,
        ".reveal .slides section",
        &[("padding", theme_var("slide-padding"))],
    );
    for offset in ["15", "25"] {
        push_rule(
            &mut output,
            &format!(".reveal .slides section.margin-top-{offset}"),
            &[("margin-top", theme_var(&format!("slide-margin-top-{offset}")))],
        );
    }
    push_rule(
        &mut output,
        ".reveal .center-vertical",
        &[
            ("position", "absolute".to_string()),
            ("top", theme_var("center-vertical")),
            ("transform", "translateY(-50%)".to_string()),
        ],
    );
    push_rule(
        &mut output,
        ".reveal .large-margin",
        &[("margin", format!("{} 0", theme_var("large-margin")))],
    );
    push_rule(
        &mut output,
        ".text-shadow-light",
        &[("text-shadow", theme_var("light-text-shadow"))],
    );
    push_rule(
        &mut output,
        ".text-shadow-dark",
        &[("text-shadow", theme_var("dark-text-shadow"))],
    );
    output
}
