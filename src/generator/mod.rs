//! Generation orchestrator.
//!
//! Runs the four stages in order, loading each input once and handing the
//! resolved models to the emitters. The first failure aborts the run; files
//! written by earlier stages stay on disk.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::Config;
use crate::constants::{
    COLORS_PARTIAL_FILE, EXERCISE_THEME_FILE, FONT_INCLUDE_FILE, PLOT_THEME_FILE,
    SLIDE_THEME_FILE, TYPOGRAPHY_PARTIAL_FILE,
};
use crate::error::{GenerateError, Result};
use crate::export::{
    generate_color_stylesheet, generate_document_theme, generate_font_include,
    generate_plot_theme, generate_slide_theme, generate_typography_stylesheet,
};
use crate::models::{SizeMode, TypographyModel};
use crate::parser::{load_color_model, load_theme_overrides, load_typography};
use crate::services::ResolvedPalette;

/// Generation stage, in run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Color partials
    Colors,
    /// Typography partials and the font include
    Typography,
    /// Plotting theme script
    PlotTheme,
    /// Slide and exercise themes
    Themes,
}

impl Stage {
    /// All stages in run order.
    pub const ALL: [Self; 4] = [Self::Colors, Self::Typography, Self::PlotTheme, Self::Themes];
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Colors => write!(f, "colors"),
            Self::Typography => write!(f, "typography"),
            Self::PlotTheme => write!(f, "plot theme"),
            Self::Themes => write!(f, "themes"),
        }
    }
}

/// Files written by a successful run, in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Absolute (root-joined) artifact paths
    pub artifacts: Vec<PathBuf>,
}

/// Drives one generation run for a project root.
pub struct Generator {
    root: PathBuf,
    config: Config,
}

impl Generator {
    /// Creates a generator for `root` with the given project configuration.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Runs every stage.
    pub fn run(&self) -> Result<GenerationReport> {
        self.run_with(|_| {})
    }

    /// Runs every stage, calling `on_artifact` after each file is written.
    pub fn run_with(&self, mut on_artifact: impl FnMut(&Path)) -> Result<GenerationReport> {
        let mut report = GenerationReport::default();
        let mut record = |written: Vec<PathBuf>| {
            for path in written {
                on_artifact(&path);
                report.artifacts.push(path);
            }
        };

        info!("Running {} stage", Stage::Colors);
        let (palette, written) = self.colors_stage()?;
        record(written);

        info!("Running {} stage", Stage::Typography);
        let (typography, written) = self.typography_stage()?;
        record(written);

        info!("Running {} stage", Stage::PlotTheme);
        record(self.plot_theme_stage(&palette, &typography)?);

        info!("Running {} stage", Stage::Themes);
        record(self.themes_stage(&palette)?);

        info!("Generated {} artifacts", report.artifacts.len());
        Ok(report)
    }

    fn colors_stage(&self) -> Result<(ResolvedPalette, Vec<PathBuf>)> {
        let source = Config::source_label(&self.config.inputs.colors);
        let model = load_color_model(&self.input(&self.config.inputs.colors))?;
        let palette = ResolvedPalette::resolve(&model, &source)?;
        debug!("Resolved {} color tokens", palette.iter().count());

        let stylesheet = generate_color_stylesheet(&palette, &[&source])?;
        let written = vec![
            self.write_artifact(
                &self.config.outputs.slides_dir,
                COLORS_PARTIAL_FILE,
                &stylesheet,
            )?,
            self.write_artifact(
                &self.config.outputs.exercises_dir,
                COLORS_PARTIAL_FILE,
                &stylesheet,
            )?,
        ];

        Ok((palette, written))
    }

    fn typography_stage(&self) -> Result<(TypographyModel, Vec<PathBuf>)> {
        let source = Config::source_label(&self.config.inputs.fonts);
        let path = self.input(&self.config.inputs.fonts);
        let presentation = load_typography(&path, SizeMode::Default)?;
        let document = load_typography(&path, SizeMode::Html)?;

        let presentation_sheet = generate_typography_stylesheet(&presentation, &[&source]);
        let document_sheet = generate_typography_stylesheet(&document, &[&source]);
        let font_include = generate_font_include(&presentation.families, &[&source]);

        let written = vec![
            self.write_artifact(
                &self.config.outputs.slides_dir,
                TYPOGRAPHY_PARTIAL_FILE,
                &presentation_sheet,
            )?,
            self.write_artifact(
                &self.config.outputs.exercises_dir,
                TYPOGRAPHY_PARTIAL_FILE,
                &document_sheet,
            )?,
            self.write_artifact(
                &self.config.outputs.includes_dir,
                FONT_INCLUDE_FILE,
                &font_include,
            )?,
        ];

        Ok((presentation, written))
    }

    fn plot_theme_stage(
        &self,
        palette: &ResolvedPalette,
        typography: &TypographyModel,
    ) -> Result<Vec<PathBuf>> {
        let colors = Config::source_label(&self.config.inputs.colors);
        let fonts = Config::source_label(&self.config.inputs.fonts);

        let script = generate_plot_theme(palette, typography, &[&colors, &fonts])?;
        Ok(vec![self.write_artifact(
            &self.config.outputs.plot_dir,
            PLOT_THEME_FILE,
            &script,
        )?])
    }

    fn themes_stage(&self, palette: &ResolvedPalette) -> Result<Vec<PathBuf>> {
        let theme_source = Config::source_label(&self.config.inputs.theme);
        let theme = load_theme_overrides(&self.input(&self.config.inputs.theme))?;
        let colors = Config::source_label(&self.config.inputs.colors);
        let fonts = Config::source_label(&self.config.inputs.fonts);

        let slide_theme =
            generate_slide_theme(&theme, palette, &[&theme_source, &colors, &fonts]);
        let document_theme = generate_document_theme(&[&colors, &fonts]);

        Ok(vec![
            self.write_artifact(
                &self.config.outputs.slides_dir,
                SLIDE_THEME_FILE,
                &slide_theme,
            )?,
            self.write_artifact(
                &self.config.outputs.exercises_dir,
                EXERCISE_THEME_FILE,
                &document_theme,
            )?,
        ])
    }

    fn input(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }

    /// Writes one fully rendered artifact, creating its directory first.
    fn write_artifact(&self, dir: &Path, file_name: &str, contents: &str) -> Result<PathBuf> {
        let dir = self.root.join(dir);
        fs::create_dir_all(&dir).map_err(|source| GenerateError::Write {
            path: dir.clone(),
            source,
        })?;

        let path = dir.join(file_name);
        fs::write(&path, contents).map_err(|source| GenerateError::Write {
            path: path.clone(),
            source,
        })?;

        debug!("Wrote {} ({} bytes)", path.display(), contents.len());
        Ok(path)
    }
}
