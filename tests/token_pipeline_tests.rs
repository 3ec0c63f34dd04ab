//! Library-level tests across loaders, resolver and emitters.

use brandkit::export::{
    generate_color_stylesheet, generate_plot_theme, generate_slide_theme,
    generate_typography_stylesheet,
};
use brandkit::models::rgb::pick_discrete_colors;
use brandkit::models::{RgbColor, SizeMode};
use brandkit::parser::{parse_color_model, parse_theme_overrides, parse_typography};
use brandkit::services::ResolvedPalette;

mod fixtures;

use fixtures::*;

fn palette(colors: &str) -> ResolvedPalette {
    let model = parse_color_model(colors, "config/colors.json").unwrap();
    ResolvedPalette::resolve(&model, "config/colors.json").unwrap()
}

#[test]
fn test_flat_and_nested_inputs_resolve_identically() {
    let flat = generate_color_stylesheet(&palette(FLAT_COLORS), &["config/colors.json"]).unwrap();
    let nested =
        generate_color_stylesheet(&palette(NESTED_COLORS), &["config/colors.json"]).unwrap();
    assert_eq!(flat, nested);
}

#[test]
fn test_semantic_references_stay_symbolic() {
    let css =
        generate_color_stylesheet(&palette(SEMANTIC_COLORS), &["config/colors.json"]).unwrap();
    assert!(css.contains("$headingColor: $midnightGreen;\n"));
    assert!(css.contains("$codeBackground: #F4F7F5;\n"));
    assert!(css.contains("$alertColor: #C0392B;\n"));
    assert!(css.contains("$brand-heading: $headingColor;\n"));

    let primary = css.find("// Primary colors").unwrap();
    let semantic = css.find("// Semantic colors").unwrap();
    let aliases = css.find("// Brand aliases").unwrap();
    assert!(primary < semantic && semantic < aliases);
}

#[test]
fn test_contrast_follows_background_luma() {
    let resolved = palette(SEMANTIC_COLORS);
    let contrast = |id: &str| resolved.get(id).unwrap().contrast.as_css();

    assert_eq!(contrast("white"), "black");
    assert_eq!(contrast("black"), "white");
    assert_eq!(contrast("midnightGreen"), "white");
    assert_eq!(contrast("cambridgeBlue"), "black");
    assert_eq!(contrast("headingColor"), contrast("midnightGreen"));
}

#[test]
fn test_size_modes_differ_in_tables_and_layout() {
    let default = parse_typography(FONTS, SizeMode::Default, "config/fonts.json").unwrap();
    let html = parse_typography(FONTS, SizeMode::Html, "config/fonts.json").unwrap();

    let slides = generate_typography_stylesheet(&default, &["config/fonts.json"]);
    let exercises = generate_typography_stylesheet(&html, &["config/fonts.json"]);

    assert!(slides.contains("$mainFontSize: 28px;\n"));
    assert!(exercises.contains("$mainFontSize: 18px;\n"));

    assert!(slides.contains("$maxContentWidth: 800px;\n"));
    assert!(slides.contains("$blockMargin: 1.5em;\n"));
    assert!(exercises.contains("$maxContentWidth: 860px;\n"));
    assert!(exercises.contains("$blockMargin: 1.25em;\n"));
    assert!(exercises.contains("$smallMargin: 0.5em;\n"));

    assert!(slides.contains(".text-tiny {\n  font-size: 0.65em;\n}"));
    assert!(exercises.contains(".text-tiny {\n  font-size: 0.7em;\n}"));

    assert!(slides.contains("$bodyFont: \"Open Sans\", sans-serif;\n"));
    assert!(exercises.contains("$bodyFont: \"Open Sans\", sans-serif;\n"));
}

#[test]
fn test_discrete_picker_prefix_and_ramp() {
    let resolved = palette(FLAT_COLORS);
    let primaries = resolved.primary_palette();

    let two = pick_discrete_colors(&primaries, 2);
    assert_eq!(two, primaries[..2].to_vec());

    let eight = pick_discrete_colors(&primaries, 8);
    assert_eq!(eight.len(), 8);
    assert_eq!(eight[0], RgbColor::new(0, 0, 0));
    assert_eq!(eight[7], RgbColor::new(0xD6, 0x8E, 0x00));
}

#[test]
fn test_plot_theme_agrees_with_color_sheet() {
    let resolved = palette(SEMANTIC_COLORS);
    let typography = parse_typography(FONTS, SizeMode::Default, "config/fonts.json").unwrap();
    let script = generate_plot_theme(
        &resolved,
        &typography,
        &["config/colors.json", "config/fonts.json"],
    )
    .unwrap();

    for color in resolved.group(brandkit::models::TokenGroup::Primary) {
        assert!(script.contains(&format!("  \"{}\" = \"{}\"", color.id, color.value.to_hex())));
    }
    assert!(script.contains("brand_heading <- \"#254D32\"\n"));
    assert!(script.contains("brand_base_size <- 21\n"));
    assert!(script.contains("brand_base_family <- \"Open Sans\"\n"));
}

#[test]
fn test_slide_theme_resolves_code_background() {
    let resolved = palette(SEMANTIC_COLORS);
    let theme = parse_theme_overrides(THEME, "config/theme.json").unwrap();
    let css = generate_slide_theme(&theme, &resolved, &["config/theme.json"]);

    assert!(css.contains("$theme-code-background: $codeBackground;\n"));
    assert!(css.contains("@import \"brand-colors\";"));
    assert!(css.contains("@import \"brand-typography\";"));
}
