//! The data that flows from a font's cmap to the output file

/// One mapping read from a character-map subtable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodePointEntry {
    /// Raw code as stored in the subtable, not yet validated
    pub code_point: u32,
    /// Glyph the code maps to
    pub glyph_id: u32,
    /// Name of that glyph (from `post`, or synthesized)
    pub glyph_name: String,
}

impl CodePointEntry {
    pub fn new(code_point: u32, glyph_id: u32, glyph_name: impl Into<String>) -> Self {
        Self {
            code_point,
            glyph_id,
            glyph_name: glyph_name.into(),
        }
    }
}

/// A single character-map subtable, in the order the font lists it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CmapTable {
    pub platform_id: u16,
    pub encoding_id: u16,
    /// Subtable format number (0, 4, 12, ...)
    pub format: u16,
    pub entries: Vec<CodePointEntry>,
}

impl CmapTable {
    pub fn new(platform_id: u16, encoding_id: u16, format: u16) -> Self {
        Self {
            platform_id,
            encoding_id,
            format,
            entries: Vec::new(),
        }
    }

    /// Builder-style helper, handy for tests and synthetic tables
    pub fn with_entries(mut self, entries: Vec<CodePointEntry>) -> Self {
        self.entries = entries;
        self
    }
}

/// A character that survived extraction, plus where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedChar {
    pub ch: char,
    pub glyph_name: String,
}

impl ExtractedChar {
    pub fn code_point(&self) -> u32 {
        self.ch as u32
    }
}

/// Ordered characters pulled out of a font, duplicates included
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterSet {
    chars: Vec<ExtractedChar>,
}

impl CharacterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, ch: char, glyph_name: impl Into<String>) {
        self.chars.push(ExtractedChar {
            ch,
            glyph_name: glyph_name.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExtractedChar> {
        self.chars.iter()
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().map(|c| c.ch)
    }

    /// All characters joined with no separator
    pub fn to_text(&self) -> String {
        self.chars().collect()
    }
}

impl<'a> IntoIterator for &'a CharacterSet {
    type Item = &'a ExtractedChar;
    type IntoIter = std::slice::Iter<'a, ExtractedChar>;

    fn into_iter(self) -> Self::IntoIter {
        self.chars.iter()
    }
}
