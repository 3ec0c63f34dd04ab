//! Shared test fixtures for end-to-end tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Brand palette in the legacy flat shape.
pub const FLAT_COLORS: &str = r##"{
    "black": "#000000",
    "white": "#FFFFFF",
    "midnightGreen": "#254D32",
    "persianGreen": "#1A936F",
    "cambridgeBlue": "#A1C3B3",
    "satinSheenGold": "#D68E00"
}
"##;

/// The same palette in the grouped shape with no semantic tokens.
pub const NESTED_COLORS: &str = r##"{
    "primary": {
        "black": "#000000",
        "white": "#FFFFFF",
        "midnightGreen": "#254D32",
        "persianGreen": "#1A936F",
        "cambridgeBlue": "#A1C3B3",
        "satinSheenGold": "#D68E00"
    },
    "semantic": {}
}
"##;

/// Grouped palette with every brand role configured.
pub const SEMANTIC_COLORS: &str = r##"{
    "primary": {
        "black": "#000000",
        "white": "#FFFFFF",
        "midnightGreen": "#254D32",
        "persianGreen": "#1A936F",
        "cambridgeBlue": "#A1C3B3",
        "satinSheenGold": "#D68E00"
    },
    "semantic": {
        "textColor": "black",
        "backgroundColor": "white",
        "headingColor": "midnightGreen",
        "linkColor": "persianGreen",
        "accentColor": "satinSheenGold",
        "mutedColor": "cambridgeBlue",
        "codeBackground": "#F4F7F5",
        "alertColor": "#c0392b"
    }
}
"##;

/// Typography with both size tables.
pub const FONTS: &str = r#"{
    "body": "Open Sans",
    "heading": "Montserrat",
    "monospace": "Fira Code",
    "sizes": {
        "mainFontSize": "28px",
        "heading1Size": "2.2em",
        "heading2Size": "1.6em",
        "heading3Size": "1.3em",
        "heading4Size": "1.1em",
        "bodyLineHeight": 1.4,
        "headingLineHeight": 1.2,
        "textSizeSmall": 0.8,
        "textSizeTiny": 0.65,
        "textSizeLarge": 1.2
    },
    "htmlSizes": {
        "mainFontSize": "18px",
        "heading1Size": "2em",
        "heading2Size": "1.6em",
        "heading3Size": "1.3em",
        "heading4Size": "1.1em",
        "bodyLineHeight": 1.6,
        "headingLineHeight": 1.25,
        "textSizeSmall": 0.875,
        "textSizeTiny": 0.75,
        "textSizeLarge": 1.125,
        "maxWidth": "860px",
        "blockMargin": "1.25em"
    },
    "weights": {
        "headingFontWeight": 600,
        "bodyFontWeight": 400,
        "boldFontWeight": 700
    },
    "spacing": {
        "headingLetterSpacing": "-0.01em",
        "bodyLetterSpacing": "0"
    }
}
"#;

/// Slide theme overrides.
pub const THEME: &str = r#"{
    "margins": { "smallMargin": "0.5em", "blockMargin": "1em", "largeMargin": "2em" },
    "code": {
        "codeBackgroundColor": "codeBackground",
        "codeBorderRadius": "6px",
        "codeLineHeight": 1.4,
        "inlineCodePadding": "0.1em 0.3em"
    },
    "layout": { "contentMaxWidth": "1100px" },
    "shadows": {
        "lightTextShadow": "0 1px 2px rgba(0, 0, 0, 0.2)",
        "darkTextShadow": "0 1px 2px rgba(0, 0, 0, 0.6)",
        "blockquoteShadow": "0 2px 6px rgba(0, 0, 0, 0.1)"
    },
    "transitions": { "defaultTransition": "all 0.2s ease-in-out" },
    "blockquote": {
        "blockquotePadding": "0.8em 1.2em",
        "blockquoteBorderRadius": "4px",
        "blockquoteBorderWidth": "4px",
        "blockquoteMargin": "1em 0"
    },
    "table": { "tableBorderOpacity": 0.2, "tableCellPadding": "0.4em 0.8em" },
    "positioning": { "slideMarginTop15": "15%", "slideMarginTop25": "25%", "centerVertical": "50%" },
    "slides": { "slidePadding": "1em" }
}
"#;

/// Every artifact a full run writes, relative to the project root.
pub const ARTIFACTS: [&str; 8] = [
    "slides/_brand-colors.scss",
    "exercises/_brand-colors.scss",
    "slides/_brand-typography.scss",
    "exercises/_brand-typography.scss",
    "_includes/brand-fonts.html",
    "R/brand-theme.R",
    "slides/brand-slides.scss",
    "exercises/brand-exercise.scss",
];

/// Writes `contents` to `<root>/config/<name>`.
pub fn write_config(root: &Path, name: &str, contents: &str) -> PathBuf {
    let dir = root.join("config");
    fs::create_dir_all(&dir).expect("Failed to create config dir");
    let path = dir.join(name);
    fs::write(&path, contents).expect("Failed to write config file");
    path
}

/// Creates a project with the given color file plus fonts and theme.
pub fn temp_project_with_colors(colors: &str) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_config(temp_dir.path(), "colors.json", colors);
    write_config(temp_dir.path(), "fonts.json", FONTS);
    write_config(temp_dir.path(), "theme.json", THEME);
    temp_dir
}

/// Creates a complete project using the grouped palette.
pub fn temp_project() -> TempDir {
    temp_project_with_colors(SEMANTIC_COLORS)
}

/// Reads an artifact relative to the project root.
pub fn read_artifact(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative))
        .unwrap_or_else(|err| panic!("Failed to read {relative}: {err}"))
}
