//! Static-document (exercise) theme generator.

use std::fmt::Write as _;

use super::theme_blocks::{shared_sections, themed_header, BlockValues, RULES_MARKER};
use super::{push_declaration, push_section, scss_var};
use crate::constants::{
    vars, BRAND_ACCENT, BRAND_BACKGROUND, BRAND_HEADING, BRAND_LINK, BRAND_TEXT,
};

fn block_values() -> BlockValues {
    BlockValues {
        root: None,
        content_selector: "main.content",
        code_background: "$code-bg".to_string(),
        code_border_radius: "4px".to_string(),
        code_line_height: "1.5".to_string(),
        inline_code_padding: "0.1em 0.3em".to_string(),
        block_margin: scss_var(vars::BLOCK_MARGIN),
        small_margin: scss_var(vars::SMALL_MARGIN),
        blockquote_padding: "0.75em 1em".to_string(),
        blockquote_border_radius: "4px".to_string(),
        blockquote_border_width: "4px".to_string(),
        blockquote_margin: format!("{} 0", scss_var(vars::BLOCK_MARGIN)),
        blockquote_shadow: "none".to_string(),
        table_cell_padding: "0.5em 0.75em".to_string(),
        table_border_opacity: "0.15".to_string(),
        transition: "color 0.15s ease-in-out".to_string(),
        content_max_width: scss_var(vars::MAX_CONTENT_WIDTH),
    }
}

/// Generates the exercise-document theme.
///
/// Layout comes from the typography partial (`$maxContentWidth`,
/// `$blockMargin`, `$smallMargin`), which carries the HTML size table.
#[must_use]
pub fn generate_document_theme(sources: &[&str]) -> String {
    let mut output = themed_header(sources);

    push_section(&mut output, "Document renderer variables");
    for (name, alias) in [
        ("body-bg", &BRAND_BACKGROUND),
        ("body-color", &BRAND_TEXT),
        ("link-color", &BRAND_LINK),
        ("headings-color", &BRAND_HEADING),
        ("primary", &BRAND_LINK),
        ("secondary", &BRAND_ACCENT),
    ] {
        push_declaration(&mut output, name, scss_var(&alias.variable()));
    }
    push_declaration(
        &mut output,
        "code-bg",
        format!("rgba({}, 0.08)", scss_var(&BRAND_TEXT.variable())),
    );
    push_declaration(&mut output, "code-color", scss_var(&BRAND_HEADING.variable()));

    let _ = write!(output, "\n{RULES_MARKER}\n\n");
    output.push_str(&shared_sections(&block_values()).join("\n"));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::theme_blocks::DEFAULTS_MARKER;

    #[test]
    fn test_structure() {
        let css = generate_document_theme(&["config/fonts.json", "config/colors.json"]);
        let position = |needle: &str| css.find(needle).unwrap();

        assert!(css.starts_with("// AUTO-GENERATED by brandkit"));
        assert!(position(DEFAULTS_MARKER) < position("@import \"brand-colors\";"));
        assert!(
            position("@import \"brand-typography\";") < position("$body-bg: $brand-background;")
        );
        assert!(position("$code-bg:") < position(RULES_MARKER));
        assert!(position(RULES_MARKER) < position("// Body"));
        assert!(position("// Tables") < position("// Layout"));
    }

    #[test]
    fn test_rules_use_typography_layout_variables() {
        let css = generate_document_theme(&["fonts.json"]);
        assert!(css.contains("main.content {\n  max-width: $maxContentWidth;"));
        assert!(css.contains("  margin: $blockMargin 0;\n"));
        assert!(css.contains("body {\n  font-family: $bodyFont;"));
    }

    #[test]
    fn test_no_literal_colors() {
        let css = generate_document_theme(&["fonts.json"]);
        assert!(!css.contains('#'));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(
            generate_document_theme(&["a.json"]),
            generate_document_theme(&["a.json"])
        );
    }
}
