use crate::{
    refs::{ObjectReferences, RefType},
    PDFError, Pt,
};
use owned_ttf_parser::{AsFaceRef, Face, GlyphId, OwnedFace};
use pdf_writer::{
    types::{CidFontType, FontFlags, SystemInfo},
    Filter, Finish, Name, Pdf, Ref, Str,
};
use std::collections::{BTreeMap, HashMap};

/// A parsed TTF or OTF font. Fonts are embedded in their entirety in the generated PDF, so
/// large fonts will noticeably increase its size.
pub struct Font {
    pub face: OwnedFace,
}

/// Advance width and height of a glyph, in font units
#[derive(Copy, Clone)]
struct GlyphSize {
    advance: u16,
    height: i16,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, PDFError> {
        let face = OwnedFace::from_vec(bytes, 0)?;
        Ok(Font { face })
    }

    fn face(&self) -> &Face<'_> {
        self.face.as_face_ref()
    }

    fn name_entry(&self, name_id: u16) -> Option<String> {
        self.face()
            .names()
            .into_iter()
            .find(|name| name.name_id == name_id && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// The full name of the font, if it has one
    pub fn name(&self) -> Option<String> {
        self.name_entry(owned_ttf_parser::name_id::FULL_NAME)
    }

    /// The family name of the font, if it has one
    pub fn family(&self) -> Option<String> {
        self.name_entry(owned_ttf_parser::name_id::FAMILY)
    }

    fn scaling(&self, size: Pt) -> Pt {
        size / self.face().units_per_em() as f32
    }

    /// Width of `text` set at `size`. Characters the font has no glyph for take up no space.
    pub fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        let scaling = self.scaling(size);
        text.chars()
            .filter_map(|ch| self.face().glyph_index(ch))
            .map(|gid| scaling * self.face().glyph_hor_advance(gid).unwrap_or_default() as f32)
            .sum()
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face().glyph_index(ch).map(|i| i.0)
    }

    /// The glyph drawn for `ch`: its own, else the replacement character, else `?`, else
    /// `.notdef`
    pub fn glyph_id_or_replacement(&self, ch: char) -> u16 {
        self.glyph_id(ch)
            .or_else(|| self.glyph_id('\u{FFFD}'))
            .or_else(|| self.glyph_id('?'))
            .unwrap_or(0)
    }

    /// Every glyph reachable through a unicode cmap subtable, with the first character that
    /// maps to it
    fn glyph_chars(&self) -> BTreeMap<u16, char> {
        let mut map: BTreeMap<u16, char> = BTreeMap::new();
        let Some(cmap) = self.face().tables().cmap else {
            return map;
        };

        for subtable in cmap.subtables.into_iter().filter(|t| t.is_unicode()) {
            subtable.codepoints(|codepoint: u32| {
                let Ok(ch) = char::try_from(codepoint) else {
                    return;
                };
                if let Some(index) = subtable.glyph_index(codepoint).filter(|index| index.0 > 0) {
                    map.entry(index.0).or_insert(ch);
                }
            });
        }

        map
    }

    fn glyph_sizes(&self, glyphs: &BTreeMap<u16, char>) -> BTreeMap<u16, GlyphSize> {
        let face = self.face();
        glyphs
            .keys()
            .filter_map(|&id| {
                let gid = GlyphId(id);
                let advance = face.glyph_hor_advance(gid)?;
                let height = face
                    .glyph_bounding_box(gid)
                    .map(|bbox| bbox.y_max - bbox.y_min - face.descender())
                    .unwrap_or(1000);
                Some((id, GlyphSize { advance, height }))
            })
            .collect()
    }

    fn write_font_data(&self, refs: &mut ObjectReferences, index: usize, writer: &mut Pdf) -> Ref {
        let id = refs.gen(RefType::FontData(index));
        writer
            .stream(id, self.face.as_slice())
            .pair(Name(b"Length1"), self.face.as_slice().len() as i32);
        id
    }

    fn write_descriptor(
        &self,
        refs: &mut ObjectReferences,
        index: usize,
        sizes: &BTreeMap<u16, GlyphSize>,
        writer: &mut Pdf,
    ) -> Ref {
        let font_data = self.write_font_data(refs, index, writer);
        let face = self.face();
        let scaling = 1000.0 / face.units_per_em() as f32;

        let max_width = sizes.values().map(|s| s.advance).max().unwrap_or_default() as f32;
        let max_height = sizes.values().map(|s| s.height).max().unwrap_or_default() as f32;
        let sum_width: f32 = sizes.values().map(|s| s.advance as f32).sum();
        let avg_width = sum_width / sizes.len().max(1) as f32;

        let id = refs.gen(RefType::FontDescriptor(index));
        let mut descriptor = writer.font_descriptor(id);
        let name = self.name().unwrap_or_else(|| format!("F{index}"));
        descriptor.name(Name(name.as_bytes()));
        if let Some(family) = self.family() {
            descriptor.family(Str(family.as_bytes()));
        }
        descriptor.weight(face.weight().to_number());

        let mut flags = FontFlags::NON_SYMBOLIC;
        if face.is_monospaced() {
            flags.insert(FontFlags::FIXED_PITCH);
        }
        if face.is_italic() {
            flags.insert(FontFlags::ITALIC);
        }
        descriptor.flags(flags);

        descriptor.bbox(pdf_writer::Rect {
            x1: 0.0,
            y1: face.descender() as f32 * scaling,
            x2: max_width * scaling,
            y2: max_height * scaling,
        });
        descriptor.italic_angle(face.italic_angle());
        descriptor.ascent(face.ascender() as f32 * scaling);
        descriptor.descent(face.descender() as f32 * scaling);
        descriptor.leading(face.line_gap() as f32 * scaling);
        let cap_height = face.capital_height().unwrap_or(face.ascender());
        descriptor.cap_height(cap_height as f32 * scaling);
        descriptor.x_height(face.x_height().unwrap_or(cap_height) as f32 * scaling);
        // TODO: derive the stem width from the OS/2 weight class instead of a fixed value
        descriptor.stem_v(80.0);
        descriptor.avg_width(avg_width * scaling);
        descriptor.max_width(max_width * scaling);
        descriptor.missing_width(max_width * scaling);
        descriptor.font_file2(font_data);

        id
    }

    fn write_cid(
        &self,
        refs: &mut ObjectReferences,
        index: usize,
        sizes: &BTreeMap<u16, GlyphSize>,
        writer: &mut Pdf,
    ) -> Ref {
        let descriptor = self.write_descriptor(refs, index, sizes, writer);
        let scaling = 1000.0 / self.face().units_per_em() as f32;

        // the most common advance makes the best default width
        let mut counts: HashMap<u16, usize> = HashMap::new();
        for size in sizes.values() {
            *counts.entry(size.advance).or_insert(0) += 1;
        }
        let default_width = counts
            .iter()
            .max_by_key(|&(&advance, &count)| (count, advance))
            .map(|(&advance, _)| advance as f32 * scaling)
            .unwrap_or(1000.0);

        let id = refs.gen(RefType::CidFont(index));
        let mut cid_font = writer.cid_font(id);
        cid_font.subtype(CidFontType::Type2);
        cid_font.base_font(Name(format!("F{index}").as_bytes()));
        cid_font.system_info(SystemInfo {
            registry: Str(b"Adobe"),
            ordering: Str(b"Identity"),
            supplement: 0,
        });
        cid_font.font_descriptor(descriptor);
        cid_font.default_width(default_width);

        // group consecutive glyph ids into blocks so each block is written once
        let mut widths = cid_font.widths();
        let mut block: Option<(u16, Vec<f32>)> = None;
        for (&cid, size) in sizes.iter() {
            let width = size.advance as f32 * scaling;
            let extends = matches!(&block, Some((start, run)) if *start as usize + run.len() == cid as usize);
            if extends {
                if let Some((_, run)) = block.as_mut() {
                    run.push(width);
                }
            } else if let Some((start, run)) = block.replace((cid, vec![width])) {
                widths.consecutive(start, run);
            }
        }
        if let Some((start, run)) = block {
            widths.consecutive(start, run);
        }
        widths.finish();

        cid_font.cid_to_gid_map_predefined(Name(b"Identity"));
        id
    }

    fn write_to_unicode(
        &self,
        refs: &mut ObjectReferences,
        index: usize,
        glyphs: &BTreeMap<u16, char>,
        writer: &mut Pdf,
    ) -> Ref {
        let id = refs.gen(RefType::ToUnicode(index));

        let mut map = String::from(
            "/CIDInit /ProcSet findresource begin\n\
             12 dict begin\n\
             begincmap\n\
             /CIDSystemInfo << /Registry (Adobe) /Ordering (UCS) /Supplement 0 >> def\n\
             /CMapName /Adobe-Identity-UCS def\n\
             /CMapType 2 def\n\
             1 begincodespacerange\n\
             <0000> <FFFF>\n\
             endcodespacerange\n",
        );

        // bfchar blocks hold at most 100 entries and share a high byte
        let entries: Vec<(u16, char)> = glyphs.iter().map(|(&id, &ch)| (id, ch)).collect();
        for block in entries.chunk_by(|a, b| a.0 >> 8 == b.0 >> 8) {
            for chunk in block.chunks(100) {
                map.push_str(&format!("{} beginbfchar\n", chunk.len()));
                for &(id, ch) in chunk {
                    let mut utf16 = [0u16; 2];
                    let units: String = ch
                        .encode_utf16(&mut utf16)
                        .iter()
                        .map(|unit| format!("{unit:04x}"))
                        .collect();
                    map.push_str(&format!("<{id:04x}> <{units}>\n"));
                }
                map.push_str("endbfchar\n");
            }
        }
        map.push_str("endcmap CMapName currentdict /CMap defineresource pop end end\n");

        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(map.as_bytes(), 6);
        writer
            .stream(id, compressed.as_slice())
            .filter(Filter::FlateDecode);

        id
    }

    /// Embed the font as a Type0 font with an identity encoding, so content streams address
    /// glyphs by their glyph id
    pub(crate) fn write(&self, refs: &mut ObjectReferences, index: usize, writer: &mut Pdf) {
        let glyphs = self.glyph_chars();
        let sizes = self.glyph_sizes(&glyphs);

        let font_id = refs.get_or_gen(RefType::Font(index));
        let cid_font = self.write_cid(refs, index, &sizes, writer);
        let to_unicode = self.write_to_unicode(refs, index, &glyphs, writer);

        let mut font = writer.type0_font(font_id);
        font.base_font(Name(format!("F{index}").as_bytes()));
        font.encoding_predefined(Name(b"Identity-H"));
        font.descendant_font(cid_font);
        font.to_unicode(to_unicode);
    }
}
