// this_file: crates/fontchars-fontdb/tests/support/mod.rs
//
// Tiny sfnt builder for tests. Produces fonts with just enough tables
// (cmap, maxp, optionally post) for read-fonts to parse the character maps.

#![allow(dead_code)]

use std::path::PathBuf;

/// One cmap subtable to encode
pub enum Subtable {
    /// Format 4 with one segment per (code, glyph) pair, BMP only
    Format4(Vec<(u16, u16)>),
    /// Format 12 with one group per (code, glyph) pair
    Format12(Vec<(u32, u32)>),
    /// Format 13, (start, end, glyph) groups
    Format13(Vec<(u32, u32, u32)>),
    /// Format 0, 256 byte slots
    Format0(Vec<(u8, u8)>),
    /// Format 2: single-byte codes `(first_code, glyphs)` through subHeader 0,
    /// plus `(high_byte, first_low_byte, glyphs)` two-byte runs
    Format2 {
        single: (u8, Vec<u16>),
        double: Vec<(u8, u8, Vec<u16>)>,
    },
}

impl Subtable {
    fn encode(&self) -> Vec<u8> {
        match self {
            Subtable::Format4(pairs) => format4(pairs),
            Subtable::Format12(pairs) => format12(pairs),
            Subtable::Format13(groups) => format13(groups),
            Subtable::Format0(pairs) => format0(pairs),
            Subtable::Format2 { single, double } => format2(single, double),
        }
    }
}

/// Builder for a test font
pub struct TestFont {
    records: Vec<(u16, u16, usize)>,
    subtables: Vec<Subtable>,
    num_glyphs: u16,
    post_names: Option<Vec<u16>>,
}

impl TestFont {
    pub fn new(num_glyphs: u16) -> Self {
        Self {
            records: Vec::new(),
            subtables: Vec::new(),
            num_glyphs,
            post_names: None,
        }
    }

    /// Adds an encoding record pointing at a new subtable
    pub fn subtable(mut self, platform_id: u16, encoding_id: u16, subtable: Subtable) -> Self {
        self.subtables.push(subtable);
        self.records
            .push((platform_id, encoding_id, self.subtables.len() - 1));
        self
    }

    /// Adds an encoding record that reuses an earlier subtable
    pub fn shared_record(mut self, platform_id: u16, encoding_id: u16, index: usize) -> Self {
        self.records.push((platform_id, encoding_id, index));
        self
    }

    /// Adds a version 2.0 `post` table using standard Macintosh name indices
    pub fn post_names(mut self, indices: Vec<u16>) -> Self {
        self.post_names = Some(indices);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut tables: Vec<([u8; 4], Vec<u8>)> = vec![(*b"cmap", self.cmap()), (*b"maxp", self.maxp())];
        if let Some(indices) = &self.post_names {
            tables.push((*b"post", post(self.num_glyphs, indices)));
        }
        sfnt(&tables)
    }

    /// Writes the font to a unique temp file and returns its path
    pub fn write_temp(&self, tag: &str) -> PathBuf {
        let path = temp_path(tag, "ttf");
        std::fs::write(&path, self.build()).expect("write test font");
        path
    }

    fn cmap(&self) -> Vec<u8> {
        let encoded: Vec<Vec<u8>> = self.subtables.iter().map(Subtable::encode).collect();
        let header_len = 4 + 8 * self.records.len();

        let mut offsets = Vec::with_capacity(encoded.len());
        let mut offset = header_len;
        for data in &encoded {
            offsets.push(offset as u32);
            offset += data.len();
        }

        let mut out = Vec::new();
        push_u16(&mut out, 0);
        push_u16(&mut out, self.records.len() as u16);
        for &(platform_id, encoding_id, index) in &self.records {
            push_u16(&mut out, platform_id);
            push_u16(&mut out, encoding_id);
            push_u32(&mut out, offsets[index]);
        }
        for data in encoded {
            out.extend(data);
        }
        out
    }

    fn maxp(&self) -> Vec<u8> {
        let mut out = Vec::new();
        push_u32(&mut out, 0x0000_5000);
        push_u16(&mut out, self.num_glyphs);
        out
    }
}

/// A unique path under the temp dir
pub fn temp_path(tag: &str, ext: &str) -> PathBuf {
    let id = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos();
    std::env::temp_dir().join(format!(
        "fontchars_test_{}_{}_{}.{}",
        tag,
        std::process::id(),
        id,
        ext
    ))
}

fn push_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_be_bytes());
}

fn push_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_be_bytes());
}

fn sfnt(tables: &[([u8; 4], Vec<u8>)]) -> Vec<u8> {
    let num_tables = tables.len() as u16;
    let entry_selector = 15 - num_tables.leading_zeros() as u16;
    let search_range = (1u16 << entry_selector) * 16;
    let range_shift = num_tables * 16 - search_range;

    let mut out = Vec::new();
    push_u32(&mut out, 0x0001_0000);
    push_u16(&mut out, num_tables);
    push_u16(&mut out, search_range);
    push_u16(&mut out, entry_selector);
    push_u16(&mut out, range_shift);

    let mut offset = 12 + 16 * tables.len();
    let mut body = Vec::new();
    for (tag, data) in tables {
        out.extend_from_slice(tag);
        push_u32(&mut out, 0);
        push_u32(&mut out, offset as u32);
        push_u32(&mut out, data.len() as u32);

        body.extend_from_slice(data);
        while body.len() % 4 != 0 {
            body.push(0);
        }
        offset = 12 + 16 * tables.len() + body.len();
    }
    out.extend(body);
    out
}

fn format0(pairs: &[(u8, u8)]) -> Vec<u8> {
    let mut glyphs = [0u8; 256];
    for &(code, gid) in pairs {
        glyphs[code as usize] = gid;
    }
    let mut out = Vec::new();
    push_u16(&mut out, 0);
    push_u16(&mut out, 6 + 256);
    push_u16(&mut out, 0);
    out.extend_from_slice(&glyphs);
    out
}

fn format2(single: &(u8, Vec<u16>), double: &[(u8, u8, Vec<u16>)]) -> Vec<u8> {
    // (first_code, glyphs) per subHeader; index 0 is the single-byte one
    let mut headers: Vec<(u8, &[u16])> = vec![(single.0, single.1.as_slice())];
    let mut keys = [0u16; 256];
    for (i, (high, first, glyphs)) in double.iter().enumerate() {
        keys[*high as usize] = 8 * (i as u16 + 1);
        headers.push((*first, glyphs.as_slice()));
    }

    let headers_start = 6 + 512;
    let arrays_start = headers_start + 8 * headers.len();
    let glyph_count: usize = headers.iter().map(|h| h.1.len()).sum();
    let length = arrays_start + 2 * glyph_count;

    let mut out = Vec::new();
    push_u16(&mut out, 2);
    push_u16(&mut out, length as u16);
    push_u16(&mut out, 0);
    for key in keys {
        push_u16(&mut out, key);
    }
    let mut array_pos = arrays_start;
    for (k, (first, glyphs)) in headers.iter().enumerate() {
        let range_offset_field = headers_start + 8 * k + 6;
        push_u16(&mut out, *first as u16);
        push_u16(&mut out, glyphs.len() as u16);
        push_u16(&mut out, 0); // idDelta
        push_u16(&mut out, (array_pos - range_offset_field) as u16);
        array_pos += 2 * glyphs.len();
    }
    for (_, glyphs) in &headers {
        for &gid in glyphs.iter() {
            push_u16(&mut out, gid);
        }
    }
    out
}

fn format4(pairs: &[(u16, u16)]) -> Vec<u8> {
    let mut segments: Vec<(u16, u16, i16)> = pairs
        .iter()
        .map(|&(code, gid)| (code, code, gid.wrapping_sub(code) as i16))
        .collect();
    segments.sort_by_key(|s| s.0);
    segments.push((0xFFFF, 0xFFFF, 1));

    let seg_count = segments.len() as u16;
    let entry_selector = 15 - seg_count.leading_zeros() as u16;
    let search_range = 2 * (1u16 << entry_selector);
    let range_shift = 2 * seg_count - search_range;
    let length = 16 + 8 * seg_count;

    let mut out = Vec::new();
    push_u16(&mut out, 4);
    push_u16(&mut out, length);
    push_u16(&mut out, 0);
    push_u16(&mut out, seg_count * 2);
    push_u16(&mut out, search_range);
    push_u16(&mut out, entry_selector);
    push_u16(&mut out, range_shift);
    for s in &segments {
        push_u16(&mut out, s.1);
    }
    push_u16(&mut out, 0);
    for s in &segments {
        push_u16(&mut out, s.0);
    }
    for s in &segments {
        push_u16(&mut out, s.2 as u16);
    }
    for _ in &segments {
        push_u16(&mut out, 0);
    }
    out
}

fn format12(pairs: &[(u32, u32)]) -> Vec<u8> {
    let groups: Vec<(u32, u32, u32)> = pairs.iter().map(|&(cp, gid)| (cp, cp, gid)).collect();
    groups_subtable(12, &groups)
}

fn format13(groups: &[(u32, u32, u32)]) -> Vec<u8> {
    groups_subtable(13, groups)
}

fn groups_subtable(format: u16, groups: &[(u32, u32, u32)]) -> Vec<u8> {
    let mut out = Vec::new();
    push_u16(&mut out, format);
    push_u16(&mut out, 0);
    push_u32(&mut out, 16 + 12 * groups.len() as u32);
    push_u32(&mut out, 0);
    push_u32(&mut out, groups.len() as u32);
    for &(start, end, gid) in groups {
        push_u32(&mut out, start);
        push_u32(&mut out, end);
        push_u32(&mut out, gid);
    }
    out
}

fn post(num_glyphs: u16, indices: &[u16]) -> Vec<u8> {
    let mut out = Vec::new();
    push_u32(&mut out, 0x0002_0000);
    push_u32(&mut out, 0); // italicAngle
    push_u16(&mut out, 0); // underlinePosition
    push_u16(&mut out, 0); // underlineThickness
    for _ in 0..5 {
        push_u32(&mut out, 0); // isFixedPitch, min/max memory
    }
    push_u16(&mut out, num_glyphs);
    for i in 0..num_glyphs as usize {
        push_u16(&mut out, indices.get(i).copied().unwrap_or(0));
    }
    out
}
