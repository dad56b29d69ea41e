//! fontchars CLI - dump the characters a font's cmap encodes

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use fontchars_fontdb::Font;

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level());

    let config = cli.to_config();

    // Load first so a bad font never touches the output file
    let font = Font::from_file_index(&config.input_path, config.face_index)
        .with_context(|| format!("Failed to load {}", config.input_path.display()))?;
    if font.face_count() > 1 {
        info!(
            "{} is a collection of {} faces, using face {}",
            config.input_path.display(),
            font.face_count(),
            font.face_index()
        );
    }

    let count = fontchars_core::run(&font, &config)
        .with_context(|| format!("Failed to extract {}", config.input_path.display()))?;

    println!("Total characters: {count}");
    Ok(())
}

/// Initialize logging; RUST_LOG still wins for specific modules
fn init_logger(level: log::LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
