//! fontchars core: from cmap entries to a text file
//!
//! Three steps, one direction:
//!
//! 1. **Tables** - a [`CharacterMap`] lists the font's cmap subtables
//! 2. **Extraction** - [`extract`] keeps every entry whose code point is a
//!    Unicode scalar value, in table order, duplicates and all
//! 3. **Writing** - [`write_characters`] stores the result as UTF-8
//!
//! Font parsing lives in `fontchars-fontdb`; this crate never sees font bytes.
//!
//! ```rust
//! use fontchars_core::{extract, CmapTable, CodePointEntry};
//!
//! let tables = vec![CmapTable::new(3, 1, 4).with_entries(vec![
//!     CodePointEntry::new(65, 1, "A"),
//!     CodePointEntry::new(97, 2, "a"),
//! ])];
//!
//! let set = extract(&tables)?;
//! assert_eq!(set.to_text(), "Aa");
//! # Ok::<(), fontchars_core::FontCharsError>(())
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod traits;
pub mod types;
pub mod writer;

pub use config::{default_output_path, ExtractConfig, OutputFormat};
pub use error::{FontCharsError, FontLoadError, Result};
pub use extract::{extract, extract_tables, is_valid_code_point, to_char};
pub use traits::CharacterMap;
pub use types::{CharacterSet, CmapTable, CodePointEntry, ExtractedChar};
pub use writer::{render, write_characters};

/// Extracts from `map` and writes the result, returning the character count
pub fn run(map: &impl CharacterMap, config: &ExtractConfig) -> Result<usize> {
    let set = extract(map)?;
    write_characters(&set, &config.output_path, config.format)
}
