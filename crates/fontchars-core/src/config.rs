//! What to read, where to write, and how

use std::path::{Path, PathBuf};

/// Suffix appended to the font's file stem for the default output name
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_chars.txt";

/// Layout of the output file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// All characters concatenated, nothing in between
    #[default]
    Text,
    /// One `U+XXXX<TAB>char<TAB>glyph` line per character
    List,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::List => "list",
        }
    }
}

/// Options for a single extraction run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// Face inside a TTC/OTC collection, 0 for plain fonts
    pub face_index: u32,
    pub format: OutputFormat,
}

impl ExtractConfig {
    /// Reads `input_path`, writes next to the working directory under the
    /// default name
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        let input_path = input_path.into();
        let output_path = default_output_path(&input_path);
        Self {
            input_path,
            output_path,
            face_index: 0,
            format: OutputFormat::default(),
        }
    }

    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    pub fn with_face_index(mut self, face_index: u32) -> Self {
        self.face_index = face_index;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

/// `fonts/Foo-Regular.ttf` becomes `Foo-Regular_chars.txt`
pub fn default_output_path(input_path: &Path) -> PathBuf {
    let stem = input_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "font".to_string());
    PathBuf::from(format!("{stem}{DEFAULT_OUTPUT_SUFFIX}"))
}
