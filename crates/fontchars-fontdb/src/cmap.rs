//! Reading every cmap subtable of a face
//!
//! Each encoding record becomes its own [`CmapTable`], in record order.
//! Records that share one subtable still yield two tables, so their
//! characters show up twice downstream.
//!
//! Every code a subtable lists is kept, including codes mapped to glyph 0.
//! Within one table a code appears at most once.

use log::{debug, warn};
use read_fonts::{
    tables::cmap::{Cmap2, Cmap4, CmapSubtable, EncodingRecord, SubHeader},
    FontRef, ReadError, TableProvider,
};

use fontchars_core::{
    error::{FontLoadError, Result},
    extract::MAX_CODE_POINT,
    types::{CmapTable, CodePointEntry},
};

use crate::names::GlyphNames;

/// All subtables of `font`'s cmap, with glyph names resolved
pub fn read_tables(font: &FontRef) -> Result<Vec<CmapTable>> {
    let cmap = font.cmap().map_err(|err| match err {
        ReadError::TableIsMissing(_) => FontLoadError::MissingTable("cmap"),
        other => FontLoadError::InvalidData(format!("cmap: {other}")),
    })?;

    let records = cmap.encoding_records();
    if records.is_empty() {
        warn!("cmap table has no encoding records");
    }

    let names = GlyphNames::new(font);
    let mut tables = Vec::with_capacity(records.len());

    for record in records {
        let subtable = record.subtable(cmap.offset_data()).map_err(|err| {
            FontLoadError::InvalidData(format!(
                "cmap subtable ({}, {}): {err}",
                record.platform_id() as u16,
                record.encoding_id()
            ))
        })?;
        tables.push(read_subtable(record, &subtable, &names));
    }

    Ok(tables)
}

fn read_subtable(record: &EncodingRecord, subtable: &CmapSubtable, names: &GlyphNames) -> CmapTable {
    let format = subtable_format(subtable);
    let mut table = CmapTable::new(record.platform_id() as u16, record.encoding_id(), format);

    table.entries = mappings(subtable)
        .into_iter()
        .map(|(code_point, gid)| CodePointEntry::new(code_point, gid, names.get(gid)))
        .collect();

    debug!(
        "cmap ({}, {}) format {}: {} mappings",
        table.platform_id,
        table.encoding_id,
        format,
        table.entries.len()
    );
    table
}

/// Format number of a parsed subtable
pub fn subtable_format(subtable: &CmapSubtable) -> u16 {
    match subtable {
        CmapSubtable::Format0(_) => 0,
        CmapSubtable::Format2(_) => 2,
        CmapSubtable::Format4(_) => 4,
        CmapSubtable::Format6(_) => 6,
        CmapSubtable::Format8(_) => 8,
        CmapSubtable::Format10(_) => 10,
        CmapSubtable::Format12(_) => 12,
        CmapSubtable::Format13(_) => 13,
        CmapSubtable::Format14(_) => 14,
    }
}

/// Raw (code, glyph) pairs in subtable order, `.notdef` included
fn mappings(subtable: &CmapSubtable) -> Vec<(u32, u32)> {
    match subtable {
        CmapSubtable::Format0(table) => table
            .glyph_id_array()
            .iter()
            .enumerate()
            .map(|(code, &gid)| (code as u32, gid as u32))
            .collect(),
        CmapSubtable::Format2(table) => format2(table),
        CmapSubtable::Format4(table) => format4(table),
        CmapSubtable::Format6(table) => {
            let first = table.first_code() as u32;
            table
                .glyph_id_array()
                .iter()
                .enumerate()
                .map(|(i, gid)| (first + i as u32, gid.get() as u32))
                .collect()
        },
        CmapSubtable::Format8(table) => expand_groups(table.groups().iter().map(|g| {
            (
                g.start_char_code(),
                g.end_char_code(),
                GroupGlyphs::Sequential(g.start_glyph_id()),
            )
        })),
        CmapSubtable::Format10(table) => {
            let start = table.start_char_code();
            table
                .glyph_id_array()
                .iter()
                .enumerate()
                .filter_map(|(i, gid)| Some((start.checked_add(i as u32)?, gid.get() as u32)))
                .collect()
        },
        CmapSubtable::Format12(table) => expand_groups(table.groups().iter().map(|g| {
            (
                g.start_char_code(),
                g.end_char_code(),
                GroupGlyphs::Sequential(g.start_glyph_id()),
            )
        })),
        CmapSubtable::Format13(table) => expand_groups(table.groups().iter().map(|g| {
            (
                g.start_char_code(),
                g.end_char_code(),
                GroupGlyphs::Constant(g.glyph_id()),
            )
        })),
        // Variation sequences only, no plain code mappings
        CmapSubtable::Format14(_) => Vec::new(),
    }
}

/// Byte offset of the first subHeader in a format 2 subtable
const FORMAT2_SUB_HEADERS_START: usize = 6 + 256 * 2;
const FORMAT2_SUB_HEADER_LEN: usize = 8;
/// Offset of `idRangeOffset` inside one subHeader
const FORMAT2_ID_RANGE_OFFSET_FIELD: usize = 6;

/// High-byte mapping: single-byte codes through subHeader 0, two-byte
/// codes `high << 8 | low` through the others
fn format2(table: &Cmap2) -> Vec<(u32, u32)> {
    let data = table.offset_data();
    let header_count =
        data.len().saturating_sub(FORMAT2_SUB_HEADERS_START) / FORMAT2_SUB_HEADER_LEN;
    let headers: &[SubHeader] = data
        .read_array(
            FORMAT2_SUB_HEADERS_START
                ..FORMAT2_SUB_HEADERS_START + header_count * FORMAT2_SUB_HEADER_LEN,
        )
        .unwrap_or(&[]);
    let mut out = Vec::new();

    for (high, key) in table.sub_header_keys().iter().enumerate() {
        let index = (key.get() / 8) as usize;
        let Some(header) = headers.get(index) else {
            continue;
        };
        let first = header.first_code() as usize;
        let count = header.entry_count() as usize;
        let delta = header.id_delta() as i32;
        // idRangeOffset counts from its own position in the subtable
        let array_start = FORMAT2_SUB_HEADERS_START
            + index * FORMAT2_SUB_HEADER_LEN
            + FORMAT2_ID_RANGE_OFFSET_FIELD
            + header.id_range_offset() as usize;
        let glyph_at = |i: usize| -> Option<u32> {
            let raw = data.read_at::<u16>(array_start + 2 * i).ok()?;
            Some(if raw == 0 { 0 } else { (raw as i32 + delta) as u16 as u32 })
        };

        if index == 0 {
            if high < first || high >= first + count {
                continue;
            }
            if let Some(gid) = glyph_at(high - first) {
                out.push((high as u32, gid));
            }
        } else {
            for i in 0..count {
                if let Some(gid) = glyph_at(i) {
                    out.push(((high * 256 + first + i) as u32, gid));
                }
            }
        }
    }

    out
}

/// Segment mapping. The last segment is the 0xFFFF terminator and is
/// not walked.
fn format4(table: &Cmap4) -> Vec<(u32, u32)> {
    let starts = table.start_code();
    let ends = table.end_code();
    let deltas = table.id_delta();
    let range_offsets = table.id_range_offsets();
    let glyph_ids = table.glyph_id_array();
    let seg_count = starts.len().min(ends.len());

    let mut out = Vec::new();
    let mut floor = 0u32;

    for seg in 0..seg_count.saturating_sub(1) {
        let start = starts[seg].get() as u32;
        let end = ends[seg].get() as u32;
        let delta = deltas.get(seg).map(|d| d.get() as i32).unwrap_or(0);
        let range_offset = range_offsets.get(seg).map(|r| r.get() as usize).unwrap_or(0);

        for code in start.max(floor)..=end {
            let gid = if range_offset == 0 {
                (code as i32 + delta) as u16 as u32
            } else {
                // Offset is relative to this segment's idRangeOffset slot
                let index = (range_offset / 2 + (code - start) as usize + seg)
                    .checked_sub(range_offsets.len());
                match index.and_then(|i| glyph_ids.get(i)) {
                    Some(raw) if raw.get() != 0 => (raw.get() as i32 + delta) as u16 as u32,
                    Some(_) => 0,
                    None => continue,
                }
            };
            out.push((code, gid));
        }
        floor = floor.max(end + 1);
    }

    out
}

/// How a group assigns glyphs to its codes
#[derive(Clone, Copy)]
enum GroupGlyphs {
    /// Glyph ids count up from this one (formats 8, 12)
    Sequential(u32),
    /// Every code maps to this glyph (format 13)
    Constant(u32),
}

/// Expands inclusive `(start, end, glyphs)` groups into pairs
///
/// Groups are clamped to U+10FFFF and never revisit a code an earlier group
/// covered, so one table yields at most 0x110000 pairs however malformed.
fn expand_groups(groups: impl IntoIterator<Item = (u32, u32, GroupGlyphs)>) -> Vec<(u32, u32)> {
    let mut out = Vec::new();
    let mut floor = 0u32;

    for (start, end, glyphs) in groups {
        let first = start.max(floor);
        let last = end.min(MAX_CODE_POINT);
        if first > last {
            continue;
        }
        out.extend((first..=last).map(|cp| {
            let gid = match glyphs {
                GroupGlyphs::Sequential(base) => base.wrapping_add(cp - start),
                GroupGlyphs::Constant(gid) => gid,
            };
            (cp, gid)
        }));
        if last == MAX_CODE_POINT {
            break;
        }
        floor = last + 1;
    }

    out
}
