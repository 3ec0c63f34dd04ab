//! Artifact emitters.
//!
//! Every emitter is a pure function from resolved models to the text of one
//! artifact. Writing files is the generator's job.

pub mod color_css;
pub mod document_theme;
pub mod font_links;
pub mod plot_theme;
pub mod slide_theme;
pub mod theme_blocks;
pub mod typography_css;

pub use color_css::generate_color_stylesheet;
pub use document_theme::generate_document_theme;
pub use font_links::generate_font_include;
pub use plot_theme::generate_plot_theme;
pub use slide_theme::generate_slide_theme;
pub use typography_css::generate_typography_stylesheet;

use std::fmt::Write as _;

/// A style-sheet variable reference: `$name`.
#[must_use]
pub fn scss_var(name: &str) -> String {
    format!("${name}")
}

/// Appends `$name: value;`.
pub(crate) fn push_declaration(output: &mut String, name: &str, value: impl std::fmt::Display) {
    let _ = writeln!(output, "${name}: {value};");
}

/// Appends a rule with one declaration per line.
pub(crate) fn push_rule(output: &mut String, selector: &str, declarations: &[(&str, String)]) {
    let _ = writeln!(output, "{selector} {{");
    for (property, value) in declarations {
        let _ = writeln!(output, "  {property}: {value};");
    }
    output.push_str("}\n");
}

/// Appends a `// title` section comment preceded by a blank line separator.
pub(crate) fn push_section(output: &mut String, title: &str) {
    if !output.is_empty() && !output.ends_with("\n\n") {
        output.push('\n');
    }
    let _ = writeln!(output, "// {title}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_rule_layout() {
        let mut output = String::new();
        push_rule(
            &mut output,
            ".bg-black",
            &[("background-color", scss_var("black"))],
        );
        assert_eq!(output, ".bg-black {\n  background-color: $black;\n}\n");
    }

    #[test]
    fn test_push_section_separates_blocks() {
        let mut output = String::new();
        push_section(&mut output, "First");
        push_declaration(&mut output, "a", "1");
        push_section(&mut output, "Second");
        assert_eq!(output, "// First\n$a: 1;\n\n// Second\n");
    }
}
