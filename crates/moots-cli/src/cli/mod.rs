//! CLI for moots.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use moots_core::config;

/// Top-level CLI: extract mutuals from followers exports and download their
/// profile pictures.
#[derive(Debug, Parser)]
#[command(name = "moots")]
#[command(about = "moots: download profile pictures of your mutuals", long_about = None)]
pub struct Cli {
    /// Folder to save profile pictures into (defaults to the configured
    /// folder, usually "mutuals").
    #[arg(long, value_name = "FOLDER")]
    pub folder: Option<PathBuf>,

    /// Followers export JSON file(s) to process.
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,
}

pub fn run_from_args() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);

    if cli.files.is_empty() {
        println!("Usage: moots [--folder FOLDER] FILES...");
        return Ok(());
    }

    let folder = cli
        .folder
        .unwrap_or_else(|| PathBuf::from(cfg.default_folder));
    commands::run_fetch(&folder, &cli.files)
}

#[cfg(test)]
mod tests;
