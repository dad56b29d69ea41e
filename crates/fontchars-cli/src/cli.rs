//! CLI argument definitions using Clap v4

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use fontchars_core::{ExtractConfig, OutputFormat};

/// fontchars - List every character a font's cmap encodes
#[derive(Parser, Debug)]
#[command(name = "fontchars")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Font file path (.ttf, .otf, .ttc, .otc)
    pub font_file: PathBuf,

    /// Output file path (default: <font name>_chars.txt)
    #[arg(short = 'o', long = "output-file")]
    pub output_file: Option<PathBuf>,

    /// Face index for TTC/OTC collections
    #[arg(short = 'y', long = "face-index", default_value = "0")]
    pub face_index: u32,

    /// Output format
    #[arg(short = 'O', long = "format", default_value = "text")]
    pub format: FormatArg,

    /// Only report errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose output
    #[arg(long = "verbose")]
    pub verbose: bool,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FormatArg {
    /// All characters concatenated, no separators
    Text,
    /// One "U+XXXX<TAB>char<TAB>glyph name" line per character
    List,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::List => OutputFormat::List,
        }
    }
}

impl Cli {
    pub fn to_config(&self) -> ExtractConfig {
        let config = ExtractConfig::new(&self.font_file)
            .with_face_index(self.face_index)
            .with_format(self.format.into());
        match &self.output_file {
            Some(path) => config.with_output_path(path),
            None => config,
        }
    }

    pub fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            log::LevelFilter::Error
        } else if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        }
    }
}
