//! Glyph names for cmap entries
//!
//! Names come from the `post` table when it carries them (version 2.0).
//! Everything else gets `glyphNNNNN`, the same placeholder font tools use
//! for unnamed glyphs.

use read_fonts::{
    tables::post::Post,
    types::GlyphId16,
    FontRef, TableProvider,
};

/// Looks up glyph names for one face
pub struct GlyphNames<'a> {
    post: Option<Post<'a>>,
}

impl<'a> GlyphNames<'a> {
    pub fn new(font: &FontRef<'a>) -> Self {
        Self {
            post: font.post().ok(),
        }
    }

    #[cfg(test)]
    fn synthetic() -> Self {
        Self { post: None }
    }

    pub fn get(&self, glyph_id: u32) -> String {
        self.post_name(glyph_id)
            .map(str::to_owned)
            .unwrap_or_else(|| synthetic_name(glyph_id))
    }

    fn post_name(&self, glyph_id: u32) -> Option<&str> {
        let post = self.post.as_ref()?;
        let gid = GlyphId16::new(u16::try_from(glyph_id).ok()?);
        post.glyph_name(gid).filter(|name| !name.is_empty())
    }
}

/// `glyph00042` for glyph 42
pub fn synthetic_name(glyph_id: u32) -> String {
    format!("glyph{glyph_id:05}")
}
