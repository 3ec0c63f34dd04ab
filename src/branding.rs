//! Branding and application identity.
//!
//! Also owns the banner written at the top of every generated artifact.

/// The binary/executable name (lowercase, no spaces).
///
/// Used in:
/// - Cargo.toml package name
/// - Command examples in error messages
/// - Generated file banners
pub const APP_BINARY_NAME: &str = "brandkit";

/// Short description for help text.
pub const APP_DESCRIPTION: &str =
    "Generates brand style sheets, font includes and plot themes from design tokens";

/// Comment syntax of an artifact format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// `// ...` (SCSS)
    Slashes,
    /// `<!-- ... -->` (HTML)
    Html,
    /// `# ...` (R)
    Hash,
}

impl CommentStyle {
    fn line(self, text: &str) -> String {
        match self {
            Self::Slashes => format!("// {text}\n"),
            Self::Html => format!("<!-- {text} -->\n"),
            Self::Hash => format!("# {text}\n"),
        }
    }
}

/// Builds the "auto-generated, do not edit" banner naming the source inputs.
///
/// The banner carries no timestamp, so identical inputs give identical files.
///
/// ```
/// use brandkit::branding::{generated_banner, CommentStyle};
///
/// let banner = generated_banner(CommentStyle::Slashes, &["config/colors.json"]);
/// assert!(banner.starts_with("// AUTO-GENERATED by brandkit"));
/// assert!(banner.contains("config/colors.json"));
/// ```
#[must_use]
pub fn generated_banner(style: CommentStyle, sources: &[&str]) -> String {
    let mut banner = style.line(&format!(
        "AUTO-GENERATED by {} from {}. DO NOT EDIT.",
        APP_BINARY_NAME,
        sources.join(", ")
    ));
    banner.push_str(&style.line(&format!(
        "Edit the source configuration and run `{}` to regenerate.",
        APP_BINARY_NAME
    )));
    banner.push('\n');
    banner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branding_consistency() {
        assert_eq!(APP_BINARY_NAME, APP_BINARY_NAME.to_lowercase());
        assert!(!APP_BINARY_NAME.contains(' '));
    }

    #[test]
    fn test_banner_styles() {
        let sources = ["a.json", "b.json"];
        assert_eq!(
            generated_banner(CommentStyle::Html, &sources).lines().next(),
            Some("<!-- AUTO-GENERATED by brandkit from a.json, b.json. DO NOT EDIT. -->")
        );
        assert!(generated_banner(CommentStyle::Hash, &sources).starts_with("# AUTO-GENERATED"));
        assert!(generated_banner(CommentStyle::Slashes, &sources).ends_with("\n\n"));
    }
}
