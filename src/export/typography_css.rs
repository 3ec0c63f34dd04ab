//! Typography style-sheet generator.

use std::fmt::Write as _;

use super::{push_declaration, push_section, scss_var};
use crate::branding::{generated_banner, CommentStyle};
use crate::constants::{vars, MONOSPACE_FALLBACK, RELATIVE_SIZE_CLASSES, SANS_SERIF_FALLBACK};
use crate::models::TypographyModel;

/// Variables of the document renderer's HTML theme that mirror ours.
const HTML_ALIASES: &[(&str, &str)] = &[
    ("font-family-sans-serif", vars::BODY_FONT),
    ("font-family-monospace", vars::MONOSPACE_FONT),
    ("headings-font-family", vars::HEADING_FONT),
    ("headings-font-weight", vars::HEADING_FONT_WEIGHT),
    ("headings-line-height", vars::HEADING_LINE_HEIGHT),
    ("font-size-root", vars::MAIN_FONT_SIZE),
    ("line-height-base", vars::BODY_LINE_HEIGHT),
    ("font-weight-base", vars::BODY_FONT_WEIGHT),
    ("font-weight-bold", vars::BOLD_FONT_WEIGHT),
];

/// Variables of the slide framework's theme that mirror ours.
const PRESENTATION_ALIASES: &[(&str, &str)] = &[
    ("mainFont", vars::BODY_FONT),
    ("codeFont", vars::MONOSPACE_FONT),
    ("presentation-font-size-root", vars::MAIN_FONT_SIZE),
    ("presentation-line-height", vars::BODY_LINE_HEIGHT),
    ("presentation-heading-font", vars::HEADING_FONT),
    ("presentation-heading-font-weight", vars::HEADING_FONT_WEIGHT),
    ("presentation-heading-line-height", vars::HEADING_LINE_HEIGHT),
    ("presentation-heading-letter-spacing", vars::HEADING_LETTER_SPACING),
    ("presentation-h1-font-size", vars::HEADING_SIZES[0]),
    ("presentation-h2-font-size", vars::HEADING_SIZES[1]),
    ("presentation-h3-font-size", vars::HEADING_SIZES[2]),
    ("presentation-h4-font-size", vars::HEADING_SIZES[3]),
];

/// Quoted family followed by its generic fallback; only the generic when empty.
fn font_stack(family: &str, generic: &str) -> String {
    if family.is_empty() {
        generic.to_string()
    } else {
        format!("\"{family}\", {generic}")
    }
}

/// Generates the typography partial for the model's active size table.
#[must_use]
pub fn generate_typography_stylesheet(model: &TypographyModel, sources: &[&str]) -> String {
    let mut output = generated_banner(CommentStyle::Slashes, sources);
    let sizes = &model.sizes;

    push_section(&mut output, "Font families");
    push_declaration(
        &mut output,
        vars::BODY_FONT,
        font_stack(&model.families.body, SANS_SERIF_FALLBACK),
    );
    push_declaration(
        &mut output,
        vars::HEADING_FONT,
        font_stack(&model.families.heading, SANS_SERIF_FALLBACK),
    );
    push_declaration(
        &mut output,
        vars::MONOSPACE_FONT,
        font_stack(&model.families.monospace, MONOSPACE_FALLBACK),
    );

    push_section(&mut output, "Font sizes");
    push_declaration(&mut output, vars::MAIN_FONT_SIZE, &sizes.main_font_size);
    let headings = [
        &sizes.heading1_size,
        &sizes.heading2_size,
        &sizes.heading3_size,
        &sizes.heading4_size,
    ];
    for (name, value) in vars::HEADING_SIZES.iter().zip(headings) {
        push_declaration(&mut output, name, value);
    }
    push_declaration(&mut output, vars::BODY_LINE_HEIGHT, &sizes.body_line_height);
    push_declaration(
        &mut output,
        vars::HEADING_LINE_HEIGHT,
        &sizes.heading_line_height,
    );

    push_section(&mut output, "Font weights");
    push_declaration(&mut output, vars::HEADING_FONT_WEIGHT, &model.weights.heading);
    push_declaration(&mut output, vars::BODY_FONT_WEIGHT, &model.weights.body);
    push_declaration(&mut output, vars::BOLD_FONT_WEIGHT, &model.weights.bold);

    push_section(&mut output, "Letter spacing");
    push_declaration(
        &mut output,
        vars::HEADING_LETTER_SPACING,
        &model.spacing.heading,
    );
    push_declaration(&mut output, vars::BODY_LETTER_SPACING, &model.spacing.body);

    push_section(&mut output, "Layout");
    push_declaration(&mut output, vars::MAX_CONTENT_WIDTH, &model.layout.max_width);
    push_declaration(&mut output, vars::BLOCK_MARGIN, &model.layout.block_margin);
    push_declaration(&mut output, vars::SMALL_MARGIN, &model.layout.small_margin);

    push_section(&mut output, "HTML theme compatibility");
    for (alias, source) in HTML_ALIASES {
        push_declaration(&mut output, alias, scss_var(source));
    }

    push_section(&mut output, "Presentation compatibility");
    for (alias, source) in PRESENTATION_ALIASES {
        push_declaration(&mut output, alias, scss_var(source));
    }

    push_section(&mut output, "Relative sizes");
    let relative = model.relative_sizes();
    for (class, multiplier) in [
        (RELATIVE_SIZE_CLASSES.small, &relative.small),
        (RELATIVE_SIZE_CLASSES.tiny, &relative.tiny),
        (RELATIVE_SIZE_CLASSES.large, &relative.large),
    ] {
        let _ = writeln!(output, ".{class} {{\n  font-size: {multiplier}em;\n}}");
    }

    output
}
