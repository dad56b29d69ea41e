//! The seam between font parsing and extraction
//!
//! The extractor never touches font bytes. Anything that can list its
//! character-map subtables can be fed to it: a parsed font file, or a
//! hand-built table in a test.

use crate::{error::Result, types::CmapTable};

/// Exposes the character-map subtables of a font
///
/// ```
/// use fontchars_core::{CharacterMap, CmapTable, CodePointEntry, Result};
///
/// struct OneTable;
///
/// impl CharacterMap for OneTable {
///     fn tables(&self) -> Result<Vec<CmapTable>> {
///         Ok(vec![CmapTable::new(3, 1, 4)
///             .with_entries(vec![CodePointEntry::new(65, 1, "A")])])
///     }
/// }
///
/// let set = fontchars_core::extract(&OneTable)?;
/// assert_eq!(set.to_text(), "A");
/// # Ok::<(), fontchars_core::FontCharsError>(())
/// ```
pub trait CharacterMap {
    /// Subtables in the order the font lists them
    fn tables(&self) -> Result<Vec<CmapTable>>;
}

impl<T: CharacterMap + ?Sized> CharacterMap for &T {
    fn tables(&self) -> Result<Vec<CmapTable>> {
        (**self).tables()
    }
}

impl CharacterMap for [CmapTable] {
    fn tables(&self) -> Result<Vec<CmapTable>> {
        Ok(self.to_vec())
    }
}

impl CharacterMap for Vec<CmapTable> {
    fn tables(&self) -> Result<Vec<CmapTable>> {
        Ok(self.clone())
    }
}
