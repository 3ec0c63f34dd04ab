//! brandkit - design-token generator
//!
//! Reads the project's token files and regenerates every derived artifact.

use anyhow::{Context, Result};
use brandkit::branding::APP_DESCRIPTION;
use brandkit::config::Config;
use brandkit::Generator;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Command-line interface. Generation takes no arguments.
#[derive(Parser, Debug)]
#[command(author, version, about = APP_DESCRIPTION, long_about = None)]
struct Cli {}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let _cli = Cli::parse();
    init_logging();

    let root = std::env::current_dir().context("Failed to determine the project root")?;
    let config = Config::load(&root)?;

    let report = Generator::new(&root, config).run_with(|path| {
        let shown = path.strip_prefix(&root).unwrap_or(path);
        println!("✓ Generated {}", Config::source_label(shown));
    })?;

    println!();
    println!("{} artifacts up to date.", report.artifacts.len());
    Ok(())
}

