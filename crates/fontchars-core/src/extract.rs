//! Turning cmap entries into characters
//!
//! Code points that cannot be a `char` (surrogates, anything past
//! U+10FFFF) are dropped by a plain range check before conversion.

use log::debug;

use crate::{
    error::Result,
    traits::CharacterMap,
    types::{CharacterSet, CmapTable},
};

/// Highest Unicode scalar value
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

/// UTF-16 surrogate range, never valid on its own
pub const SURROGATES: std::ops::RangeInclusive<u32> = 0xD800..=0xDFFF;

/// True when `code_point` is a Unicode scalar value
pub fn is_valid_code_point(code_point: u32) -> bool {
    code_point <= MAX_CODE_POINT && !SURROGATES.contains(&code_point)
}

/// Converts a code point, or `None` if it fails [`is_valid_code_point`]
pub fn to_char(code_point: u32) -> Option<char> {
    if is_valid_code_point(code_point) {
        char::from_u32(code_point)
    } else {
        None
    }
}

/// Pulls every valid character out of every table, in order
pub fn extract(map: &impl CharacterMap) -> Result<CharacterSet> {
    let tables = map.tables()?;
    Ok(extract_tables(&tables))
}

/// Same as [`extract`] for tables already in hand
pub fn extract_tables(tables: &[CmapTable]) -> CharacterSet {
    let mut set = CharacterSet::new();

    for table in tables {
        let before = set.len();
        for entry in &table.entries {
            if let Some(ch) = to_char(entry.code_point) {
                set.push(ch, entry.glyph_name.as_str());
            }
        }
        debug!(
            "cmap ({}, {}) format {}: {} entries, {} characters",
            table.platform_id,
            table.encoding_id,
            table.format,
            table.entries.len(),
            set.len() - before
        );
    }

    set
}
