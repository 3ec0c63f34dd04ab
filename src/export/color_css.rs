//! Color style-sheet generator.
//!
//! One variable and five utility rules per token, primary tokens first, then
//! the fixed brand alias block.

use std::fmt::Write as _;

use super::{push_declaration, push_rule, push_section, scss_var};
use crate::branding::{generated_banner, CommentStyle};
use crate::constants::{
    BG_CLASS_PREFIX, BORDER_CLASS_PREFIX, BRAND_ALIASES, TEXT_BG_CLASS_PREFIX,
    TEXT_BLOCK_PADDING, TEXT_BLOCK_RADIUS, TEXT_CLASS_PREFIX, TEXT_HIGHLIGHT_CLASS_PREFIX,
};
use crate::error::Result;
use crate::models::TokenGroup;
use crate::services::{ResolvedColor, ResolvedPalette};

/// Generates the color partial for `palette`.
///
/// Fails when a brand alias has neither its semantic role nor its fallback
/// primary in the palette.
///
/// # Examples
///
/// ```
/// use brandkit::export::generate_color_stylesheet;
/// use brandkit::parser::parse_color_model;
/// use brandkit::services::ResolvedPalette;
///
/// let model = parse_color_model(
///     r##"{ "black": "#000000", "white": "#FFFFFF", "midnightGreen": "#254D32",
///          "persianGreen": "#1A936F", "cambridgeBlue": "#A1C3B3", "satinSheenGold": "#D68E00" }"##,
///     "colors.json",
/// ).unwrap();
/// let palette = ResolvedPalette::resolve(&model, "colors.json").unwrap();
/// let css = generate_color_stylesheet(&palette, &["colors.json"]).unwrap();
/// assert!(css.contains("$midnightGreen: #254D32;"));
/// assert!(css.contains("$brand-heading: $midnightGreen;"));
/// ```
pub fn generate_color_stylesheet(palette: &ResolvedPalette, sources: &[&str]) -> Result<String> {
    let mut output = generated_banner(CommentStyle::Slashes, sources);

    push_section(&mut output, "Primary colors");
    for color in palette.group(TokenGroup::Primary) {
        push_token(&mut output, color);
    }

    if palette.group(TokenGroup::Semantic).next().is_some() {
        push_section(&mut output, "Semantic colors");
        for color in palette.group(TokenGroup::Semantic) {
            push_token(&mut output, color);
        }
    }

    push_section(&mut output, "Brand aliases");
    let mut targets = Vec::with_capacity(BRAND_ALIASES.len());
    for alias in &BRAND_ALIASES {
        let target = palette.brand_alias_target(alias)?;
        push_declaration(&mut output, &alias.variable(), scss_var(&target.id));
        targets.push((alias, target));
    }
    output.push('\n');
    for (alias, target) in targets {
        let variable = scss_var(&alias.variable());
        push_rule(
            &mut output,
            &format!(".{}", alias.variable()),
            &[("color", variable.clone())],
        );
        push_rule(
            &mut output,
            &format!(".{}-bg", alias.variable()),
            &[
                ("background-color", variable),
                ("color", target.contrast.as_css().to_string()),
            ],
        );
    }

    Ok(output)
}

/// Variable line plus the token's utility rules.
fn push_token(output: &mut String, color: &ResolvedColor) {
    let id = &color.id;
    let variable = scss_var(id);
    let contrast = color.contrast.as_css().to_string();

    match &color.reference {
        Some(primary) => push_declaration(output, id, scss_var(primary)),
        None => push_declaration(output, id, color.value.to_hex()),
    }

    let class = |prefix: &str| format!(".{prefix}-{id}");
    push_rule(
        output,
        &class(BG_CLASS_PREFIX),
        &[("background-color", variable.clone())],
    );
    push_rule(output, &class(TEXT_CLASS_PREFIX), &[("color", variable.clone())]);
    push_rule(
        output,
        &class(BORDER_CLASS_PREFIX),
        &[("border-color", variable.clone())],
    );
    push_rule(
        output,
        &class(TEXT_BG_CLASS_PREFIX),
        &[
            ("background-color", variable.clone()),
            ("color", contrast.clone()),
            ("padding", TEXT_BLOCK_PADDING.to_string()),
            ("border-radius", TEXT_BLOCK_RADIUS.to_string()),
        ],
    );
    push_rule(
        output,
        &class(TEXT_HIGHLIGHT_CLASS_PREFIX),
        &[
            ("color", variable),
            ("background-color", contrast),
            ("padding", TEXT_BLOCK_PADDING.to_string()),
            ("border-radius", TEXT_BLOCK_RADIUS.to_string()),
        ],
    );
    let _ = writeln!(output);
}
