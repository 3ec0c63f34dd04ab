//! End-to-end tests for the `brandkit` binary.
#![allow(unused_variables)] // Temp dirs must be kept alive even if not directly accessed

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

mod fixtures;

use fixtures::*;

/// Path to the brandkit binary
fn brandkit_bin() -> &'static str {
    env!("CARGO_BIN_EXE_brandkit")
}

fn run_in(root: &Path) -> Output {
    Command::new(brandkit_bin())
        .current_dir(root)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_generate_writes_every_artifact() {
    let project = temp_project();
    let output = run_in(project.path());

    assert_eq!(
        output.status.code(),
        Some(0),
        "Generation should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    for artifact in ARTIFACTS {
        assert!(
            project.path().join(artifact).is_file(),
            "{artifact} should be created"
        );
        assert!(
            stdout.contains(&format!("✓ Generated {artifact}")),
            "stdout should report {artifact}"
        );
    }
}

#[test]
fn test_generate_is_idempotent() {
    let project = temp_project();
    assert!(run_in(project.path()).status.success());
    let first: Vec<String> = ARTIFACTS
        .iter()
        .map(|artifact| read_artifact(project.path(), artifact))
        .collect();

    assert!(run_in(project.path()).status.success());
    let second: Vec<String> = ARTIFACTS
        .iter()
        .map(|artifact| read_artifact(project.path(), artifact))
        .collect();

    assert_eq!(first, second, "Re-running must not change any artifact");
}

#[test]
fn test_flat_and_nested_colors_give_identical_sheets() {
    let flat = temp_project_with_colors(FLAT_COLORS);
    let nested = temp_project_with_colors(NESTED_COLORS);
    assert!(run_in(flat.path()).status.success());
    assert!(run_in(nested.path()).status.success());

    for artifact in [
        "slides/_brand-colors.scss",
        "exercises/_brand-colors.scss",
        "R/brand-theme.R",
    ] {
        assert_eq!(
            read_artifact(flat.path(), artifact),
            read_artifact(nested.path(), artifact),
            "{artifact} differs between flat and nested input"
        );
    }
}

#[test]
fn test_every_artifact_starts_with_banner() {
    let project = temp_project();
    assert!(run_in(project.path()).status.success());

    for artifact in ARTIFACTS {
        let first_line = read_artifact(project.path(), artifact)
            .lines()
            .next()
            .unwrap_or_default()
            .to_string();
        assert!(
            first_line.contains("AUTO-GENERATED by brandkit from config/"),
            "{artifact} banner: {first_line}"
        );
    }
}

#[test]
fn test_missing_theme_config_fails_after_earlier_stages() {
    let project = temp_project();
    fs::remove_file(project.path().join("config/theme.json")).unwrap();

    let output = run_in(project.path());
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Configuration file not found"), "stderr: {stderr}");
    assert!(stderr.contains("theme.json"), "stderr: {stderr}");

    assert!(project.path().join("slides/_brand-colors.scss").is_file());
    assert!(project.path().join("R/brand-theme.R").is_file());
    assert!(!project.path().join("slides/brand-slides.scss").exists());
    assert!(!project.path().join("exercises/brand-exercise.scss").exists());
}

#[test]
fn test_missing_fonts_config_writes_no_typography() {
    let project = temp_project();
    fs::remove_file(project.path().join("config/fonts.json")).unwrap();

    let output = run_in(project.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("fonts.json"));

    assert!(project.path().join("slides/_brand-colors.scss").is_file());
    assert!(!project.path().join("slides/_brand-typography.scss").exists());
    assert!(!project.path().join("_includes/brand-fonts.html").exists());
}

#[test]
fn test_unknown_semantic_reference_fails() {
    let colors = SEMANTIC_COLORS.replace(
        "\"mutedColor\": \"cambridgeBlue\"",
        "\"mutedColor\": \"headingColor\"",
    );
    let project = temp_project_with_colors(&colors);

    let output = run_in(project.path());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Malformed configuration"), "stderr: {stderr}");
    assert!(stderr.contains("mutedColor"), "stderr: {stderr}");
    assert!(!project.path().join("slides").exists());
}

#[test]
fn test_project_config_redirects_outputs() {
    let project = temp_project();
    fs::write(
        project.path().join("brandkit.toml"),
        "[outputs]\nslides_dir = \"deck\"\nplot_dir = \"analysis\"\n",
    )
    .unwrap();

    let output = run_in(project.path());
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(project.path().join("deck/brand-slides.scss").is_file());
    assert!(project.path().join("analysis/brand-theme.R").is_file());
    assert!(!project.path().join("slides").exists());
}

#[test]
fn test_malformed_project_config_fails() {
    let project = temp_project();
    fs::write(project.path().join("brandkit.toml"), "[outputs\n").unwrap();

    let output = run_in(project.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("brandkit.toml"));
    assert!(!project.path().join("slides").exists());
}

#[test]
fn test_help_succeeds() {
    let output = Command::new(brandkit_bin())
        .arg("--help")
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("brandkit"));
}
