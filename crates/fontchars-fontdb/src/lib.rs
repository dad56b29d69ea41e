//! Where font bytes turn into cmap tables
//!
//! Loads a font file (or one face of a TTC/OTC collection) with
//! `read-fonts` and exposes its character maps through
//! [`fontchars_core::CharacterMap`].
//!
//! ## Memory Management
//!
//! Fonts store their raw data and create a `FontRef` on demand for parsing,
//! so the file is read once and released when the [`Font`] is dropped.

pub mod cmap;
pub mod names;

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use read_fonts::{FileRef, FontRef as ReadFontRef};

use fontchars_core::{
    error::{FontLoadError, Result},
    traits::CharacterMap,
    types::CmapTable,
};

/// A font that's been read into memory, ready to have its cmap walked
pub struct Font {
    data: Vec<u8>,
    face_index: u32,
    path: Option<PathBuf>,
}

impl Font {
    /// Opens a font file from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_file_index(path, 0)
    }

    /// Opens a specific face from a font file (for TTC collections)
    pub fn from_file_index(path: impl AsRef<Path>, face_index: u32) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|source| FontLoadError::FileNotFound {
            path: path.to_path_buf(),
            source,
        })?;

        let mut font = Self::from_data_index(data, face_index)?;
        font.path = Some(path.to_path_buf());
        debug!(
            "Loaded {} (face {}, {} bytes)",
            path.display(),
            face_index,
            font.data.len()
        );
        Ok(font)
    }

    /// Turns raw font bytes into something we can work with
    pub fn from_data(data: Vec<u8>) -> Result<Self> {
        Self::from_data_index(data, 0)
    }

    /// Turns raw font bytes into a specific face (for TTC collections)
    pub fn from_data_index(data: Vec<u8>, face_index: u32) -> Result<Self> {
        // Validate up front so later parsing can't fail on the header
        ReadFontRef::from_index(&data, face_index).map_err(|err| {
            FontLoadError::InvalidData(format!("face {face_index}: {err}"))
        })?;

        Ok(Font {
            data,
            face_index,
            path: None,
        })
    }

    /// Returns the face index for TTC collections (0 for single fonts)
    pub fn face_index(&self) -> u32 {
        self.face_index
    }

    /// File this font came from, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Number of faces in the underlying file (1 unless it is a collection)
    pub fn face_count(&self) -> u32 {
        match FileRef::new(&self.data) {
            Ok(FileRef::Collection(collection)) => collection.len(),
            _ => 1,
        }
    }

    /// Creates a FontRef on demand for parsing operations
    fn font_ref(&self) -> Result<ReadFontRef<'_>> {
        ReadFontRef::from_index(&self.data, self.face_index)
            .map_err(|err| FontLoadError::InvalidData(err.to_string()).into())
    }
}

impl CharacterMap for Font {
    fn tables(&self) -> Result<Vec<CmapTable>> {
        cmap::read_tables(&self.font_ref()?)
    }
}
