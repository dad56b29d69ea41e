//! Serializing a character set to disk
//!
//! Output is UTF-8 with no BOM and no trailing newline in text mode.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use log::info;

use crate::{
    config::OutputFormat,
    error::{FontCharsError, Result},
    types::CharacterSet,
};

/// Renders the set into the string that ends up in the file
pub fn render(set: &CharacterSet, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => set.to_text(),
        OutputFormat::List => {
            let mut out = String::new();
            for c in set {
                // Control characters would break the line structure
                if c.ch.is_control() {
                    let _ = writeln!(
                        out,
                        "U+{:04X}\t{}\t{}",
                        c.code_point(),
                        c.ch.escape_unicode(),
                        c.glyph_name
                    );
                } else {
                    let _ = writeln!(out, "U+{:04X}\t{}\t{}", c.code_point(), c.ch, c.glyph_name);
                }
            }
            out
        },
    }
}

/// Writes the set to `path` and returns how many characters went out
///
/// The count includes duplicates. The parent directory must already exist.
pub fn write_characters(
    set: &CharacterSet,
    path: impl AsRef<Path>,
    format: OutputFormat,
) -> Result<usize> {
    let path = path.as_ref();
    let contents = render(set, format);

    fs::write(path, contents.as_bytes()).map_err(|source| FontCharsError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        "Wrote {} characters ({} bytes, {}) to {}",
        set.len(),
        contents.len(),
        format.as_str(),
        path.display()
    );

    Ok(set.len())
}
