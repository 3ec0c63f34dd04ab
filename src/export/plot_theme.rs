//! Plotting theme script generator (R / ggplot2).

use std::fmt::Write as _;

use crate::branding::{generated_banner, CommentStyle};
use crate::constants::{
    BRAND_ALIASES, PLOT_DIVERGING, PLOT_REFERENCE_RAMP, PLOT_SEQUENTIAL, PX_TO_PT,
};
use crate::error::{GenerateError, Result};
use crate::models::css_value::format_number;
use crate::models::rgb::pick_discrete_colors;
use crate::models::{CssValue, RgbColor, TokenGroup, TypographyModel};
use crate::services::ResolvedPalette;

/// Quotes `value` as an R string literal.
fn r_string(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

/// `c("a", "b", "c")`
fn r_vector<'a>(values: impl IntoIterator<Item = &'a str>) -> String {
    let items: Vec<String> = values.into_iter().map(r_string).collect();
    format!("c({})", items.join(", "))
}

/// Base text size in points, derived from the main font size in pixels.
///
/// ```
/// use brandkit::export::plot_theme::base_size_points;
/// use brandkit::models::CssValue;
///
/// assert_eq!(base_size_points(&CssValue::new("28px")).unwrap(), 21.0);
/// assert_eq!(base_size_points(&CssValue::new("16")).unwrap(), 12.0);
/// assert!(base_size_points(&CssValue::new("1.2em")).is_err());
/// ```
pub fn base_size_points(main_font_size: &CssValue) -> Result<f64> {
    main_font_size
        .as_pixels()
        .map(|pixels| pixels * PX_TO_PT)
        .ok_or_else(|| {
            GenerateError::malformed(
                "fonts",
                format!("sizes.mainFontSize '{main_font_size}' is not a pixel value"),
            )
        })
}

/// Generates the plotting theme script.
///
/// Fails when a primary color used by the fixed palettes is missing or the
/// main font size is not a pixel value.
pub fn generate_plot_theme(
    palette: &ResolvedPalette,
    typography: &TypographyModel,
    sources: &[&str],
) -> Result<String> {
    for id in PLOT_SEQUENTIAL.iter().chain(PLOT_DIVERGING.iter()) {
        palette.primary_value(id)?;
    }
    let base_size = base_size_points(&typography.sizes.main_font_size)?;

    let mut output = generated_banner(CommentStyle::Hash, sources);
    output.push_str("library(ggplot2)\n\n");

    output.push_str("# Brand palette\nbrand_colors <- c(\n");
    let primaries: Vec<_> = palette.group(TokenGroup::Primary).collect();
    for (index, color) in primaries.iter().enumerate() {
        let separator = if index + 1 < primaries.len() { "," } else { "" };
        let _ = writeln!(
            output,
            "  {} = {}{}",
            r_string(&color.id),
            r_string(&color.value.to_hex()),
            separator
        );
    }
    output.push_str(")\n\n");

    output.push_str("# Fixed-order palettes\n");
    let _ = writeln!(
        output,
        "brand_sequential <- unname(brand_colors[{}])",
        r_vector(PLOT_SEQUENTIAL)
    );
    let _ = writeln!(
        output,
        "brand_diverging <- unname(brand_colors[{}])\n",
        r_vector(PLOT_DIVERGING)
    );

    output.push_str("# Roles\n");
    for alias in &BRAND_ALIASES {
        let target = palette.brand_alias_target(alias)?;
        let _ = writeln!(
            output,
            "brand_{} <- {}",
            alias.name,
            r_string(&target.value.to_hex())
        );
    }
    output.push('\n');

    let _ = writeln!(
        output,
        "# Typography ({} * {})",
        typography.sizes.main_font_size,
        format_number(PX_TO_PT)
    );
    let _ = writeln!(output, "brand_base_size <- {}", format_number(base_size));
    let _ = writeln!(
        output,
        "brand_base_family <- {}",
        r_string(&typography.families.body)
    );
    let _ = writeln!(
        output,
        "brand_heading_family <- {}\n",
        r_string(&typography.families.heading)
    );

    output.push_str(THEME_FUNCTION);
    output.push('\n');
    output.push_str(PICKER_FUNCTION);

    let ramp = pick_discrete_colors(&palette.primary_palette(), PLOT_REFERENCE_RAMP);
    let _ = writeln!(
        output,
        "\n# brand_pick_colors({PLOT_REFERENCE_RAMP}) ramps across the palette, approximately:"
    );
    let hexes: Vec<String> = ramp.iter().map(RgbColor::to_hex).collect();
    let _ = writeln!(output, "#   {}", r_vector(hexes.iter().map(String::as_str)));
    output.push('\n');

    output.push_str(SCALE_FUNCTIONS);
    Ok(output)
}

const THEME_FUNCTION: &str = r#"theme_brand <- function(base_size = brand_base_size, base_family = brand_base_family) {
  ggplot2::theme_minimal(base_size = base_size, base_family = base_family) +
    ggplot2::theme(
      text = ggplot2::element_text(colour = brand_text),
      plot.title = ggplot2::element_text(colour = brand_heading, family = brand_heading_family, face = "bold"),
      plot.subtitle = ggplot2::element_text(colour = brand_muted),
      plot.caption = ggplot2::element_text(colour = brand_muted),
      axis.text = ggplot2::element_text(colour = brand_text),
      panel.grid.minor = ggplot2::element_blank(),
      panel.grid.major = ggplot2::element_line(colour = brand_muted, linewidth = 0.25),
      plot.background = ggplot2::element_rect(fill = brand_background, colour = NA),
      strip.text = ggplot2::element_text(colour = brand_heading, face = "bold"),
      legend.position = "bottom"
    )
}
"#;

const PICKER_FUNCTION: &str = r#"brand_pick_colors <- function(n, palette = unname(brand_colors)) {
  if (n <= length(palette)) {
    return(palette[seq_len(n)])
  }
  grDevices::colorRampPalette(palette)(n)
}
"#;

const SCALE_FUNCTIONS: &str = r#"scale_colour_brand_d <- function(...) {
  ggplot2::discrete_scale("colour", palette = brand_pick_colors, ...)
}

scale_fill_brand_d <- function(...) {
  ggplot2::discrete_scale("fill", palette = brand_pick_colors, ...)
}

scale_colour_brand_c <- function(...) {
  ggplot2::scale_colour_gradientn(colours = brand_sequential, ...)
}

scale_fill_brand_c <- function(...) {
  ggplot2::scale_fill_gradientn(colours = brand_sequential, ...)
}

scale_fill_brand_div <- function(...) {
  ggplot2::scale_fill_gradient2(
    low = brand_diverging[1], mid = brand_diverging[2], high = brand_diverging[3], ...
  )
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SizeMode;
    use crate::parser::{parse_color_model, parse_typography};

    const COLORS: &str = r##"{
        "black": "#000000",
        "white": "#FFFFFF",
        "midnightGreen": "#254D32",
        "persianGreen": "#1A936F",
        "cambridgeBlue": "#A1C3B3",
        "satinSheenGold": "#D68E00"
    }"##;

    fn fonts(main_font_size: &str) -> String {
        format!(
            r#"{{
            "body": "Open Sans", "heading": "Montserrat", "monospace": "Fira Code",
            "sizes": {{
                "mainFontSize": "{main_font_size}", "heading1Size": "2em", "heading2Size": "1.5em",
                "heading3Size": "1.25em", "heading4Size": "1.1em", "bodyLineHeight": 1.4,
                "headingLineHeight": 1.2, "textSizeSmall": 0.8, "textSizeTiny": 0.7, "textSizeLarge": 1.2
            }},
            "weights": {{ "headingFontWeight": 600, "bodyFontWeight": 400, "boldFontWeight": 700 }},
            "spacing": {{ "headingLetterSpacing": "0", "bodyLetterSpacing": "0" }}
        }}"#
        )
    }

    fn script(colors: &str, main_font_size: &str) -> Result<String> {
        let model = parse_color_model(colors, "colors.json")?;
        let palette = ResolvedPalette::resolve(&model, "colors.json")?;
        let typography = parse_typography(&fonts(main_font_size), SizeMode::Default, "fonts.json")?;
        generate_plot_theme(&palette, &typography, &["config/colors.json", "config/fonts.json"])
    }

    #[test]
    fn test_named_palette() {
        let r = script(COLORS, "28px").unwrap();
        assert!(
            r.starts_with("# AUTO-GENERATED by brandkit from config/colors.json, config/fonts.json.")
        );
        assert!(r.contains(
            "brand_colors <- c(\n  \"black\" = \"#000000\",\n  \"white\" = \"#FFFFFF\",\n  \"midnightGreen\" = \"#254D32\",\n  \"persianGreen\" = \"#1A936F\",\n  \"cambridgeBlue\" = \"#A1C3B3\",\n  \"satinSheenGold\" = \"#D68E00\"\n)\n"
        ));
    }

    #[test]
    fn test_fixed_palettes() {
        let r = script(COLORS, "28px").unwrap();
        assert!(r.contains(
            "brand_sequential <- unname(brand_colors[c(\"midnightGreen\", \"persianGreen\", \"cambridgeBlue\")])\n"
        ));
        assert!(r.contains(
            "brand_diverging <- unname(brand_colors[c(\"persianGreen\", \"white\", \"satinSheenGold\")])\n"
        ));
    }

    #[test]
    fn test_base_size_in_points() {
        let r = script(COLORS, "28px").unwrap();
        assert!(r.contains("# Typography (28px * 0.75)\nbrand_base_size <- 21\n"));
        assert!(script(COLORS, "18px").unwrap().contains("brand_base_size <- 13.5\n"));
        assert!(r.contains("brand_base_family <- \"Open Sans\"\n"));
    }

    #[test]
    fn test_roles_use_alias_targets() {
        let r = script(COLORS, "28px").unwrap();
        assert!(r.contains("brand_text <- \"#000000\"\n"));
        assert!(r.contains("brand_heading <- \"#254D32\"\n"));
        assert!(r.contains("brand_muted <- \"#A1C3B3\"\n"));
    }

    #[test]
    fn test_helpers_and_reference_ramp() {
        let r = script(COLORS, "28px").unwrap();
        assert!(
            r.contains("theme_brand <- function(base_size = brand_base_size, base_family = brand_base_family) {")
        );
        assert!(r.contains("brand_pick_colors <- function(n, palette = unname(brand_colors)) {"));
        assert!(r.contains("grDevices::colorRampPalette(palette)(n)"));

        let ramp_line = r
            .lines()
            .find(|line| line.starts_with("#   c("))
            .unwrap();
        assert_eq!(ramp_line.matches("\"#").count(), 8);
        assert!(ramp_line.starts_with("#   c(\"#000000\""));
        assert!(ramp_line.ends_with("\"#D68E00\")"));
    }

    #[test]
    fn test_missing_palette_primary_fails() {
        let colors = r##"{ "black": "#000000", "white": "#FFFFFF", "midnightGreen": "#254D32",
                           "persianGreen": "#1A936F", "satinSheenGold": "#D68E00" }"##;
        let err = script(colors, "28px").unwrap_err();
        assert!(err.is_malformed());
        assert!(err.to_string().contains("cambridgeBlue"));
    }

    #[test]
    fn test_non_pixel_font_size_fails() {
        let err = script(COLORS, "2em").unwrap_err();
        assert!(err.to_string().contains("mainFontSize"));
    }

    #[test]
    fn test_non_syntactic_ids_are_quoted() {
        let colors = r##"{
            "black": "#000000", "white": "#FFFFFF", "midnightGreen": "#254D32",
            "persianGreen": "#1A936F", "cambridgeBlue": "#A1C3B3", "satinSheenGold": "#D68E00",
            "brand-red": "#C0392B", "2ndAccent": "#123456"
        }"##;
        let r = script(colors, "28px").unwrap();
        assert!(r.contains("  \"brand-red\" = \"#C0392B\",\n"));
        assert!(r.contains("  \"2ndAccent\" = \"#123456\"\n)\n"));
        assert!(!r.lines().any(|line| line.trim_start().starts_with("brand-red")));
    }

    #[test]
    fn test_r_string_escapes() {
        assert_eq!(r_string("a \"b\""), "\"a \\\"b\\\"\"");
    }
}
