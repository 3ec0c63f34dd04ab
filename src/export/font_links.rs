//! Font-include HTML fragment generator.

use std::fmt::Write as _;

use crate::branding::{generated_banner, CommentStyle};
use crate::constants::{
    BODY_FONT_WEIGHTS, FONT_HOST_URL, HEADING_FONT_WEIGHTS, MONOSPACE_FONT_WEIGHTS,
};
use crate::models::FontFamilies;

/// Stylesheet URL for one family and its weight set.
///
/// ```
/// use brandkit::export::font_links::font_url;
///
/// assert_eq!(
///     font_url("Fira Code", &[400, 600]),
///     "https://fonts.googleapis.com/css2?family=Fira+Code:wght@400;600&display=swap"
/// );
/// ```
#[must_use]
pub fn font_url(family: &str, weights: &[u16]) -> String {
    let weights: Vec<String> = weights.iter().map(u16::to_string).collect();
    format!(
        "{}?family={}:wght@{}&display=swap",
        FONT_HOST_URL,
        family.replace(' ', "+"),
        weights.join(";")
    )
}

/// Generates one `<link>` per configured family: body, heading, monospace.
#[must_use]
pub fn generate_font_include(families: &FontFamilies, sources: &[&str]) -> String {
    let mut output = generated_banner(CommentStyle::Html, sources);

    let roles: [(&str, &[u16]); 3] = [
        (families.body.as_str(), BODY_FONT_WEIGHTS),
        (families.heading.as_str(), HEADING_FONT_WEIGHTS),
        (families.monospace.as_str(), MONOSPACE_FONT_WEIGHTS),
    ];
    for (family, weights) in roles {
        if family.is_empty() {
            continue;
        }
        let _ = writeln!(
            output,
            "<link rel=\"stylesheet\" href=\"{}\">",
            font_url(family, weights)
        );
    }

    output
}
