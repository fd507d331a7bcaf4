use crate::encoding::win_ansi_char;
use crate::{LayoutError, Pt};
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};
use std::path::Path;

/// A parsed TrueType or OpenType font. The font is only used for metrics here:
/// glyph advances to measure encoded text, and the vertical metrics that drive
/// how far apart consecutive lines are placed.
pub struct Font {
    pub face: OwnedFace,
    /// average advance of the printable WinAnsi characters, in font units
    avg_advance: f32,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, LayoutError> {
        let face = OwnedFace::from_vec(bytes, 0)?;
        let avg_advance = average_advance(face.as_face_ref());

        Ok(Font { face, avg_advance })
    }

    /// Read and parse a font file from disk
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Font, LayoutError> {
        let bytes = std::fs::read(path)?;
        Font::load(bytes)
    }

    fn scaling(&self, size: Pt) -> Pt {
        size / self.face.as_face_ref().units_per_em() as f32
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given font size
    pub fn ascent(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face.as_face_ref().ascender() as f32
    }

    /// Calculate the descent (distance from the baseline to the bottom of the font) for the given font size.
    /// Note: this is usually negative
    pub fn descent(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face.as_face_ref().descender() as f32
    }

    /// Calculate the leading (extra space between lines) for the given font size
    pub fn leading(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face.as_face_ref().line_gap() as f32
    }

    /// Calculate the default line height of the font for the given size. The returned value is
    /// how much to vertically offset a second row of text below a first row of text.
    pub fn line_height(&self, size: Pt) -> Pt {
        self.leading(size) + self.ascent(size) - self.descent(size)
    }

    /// Average horizontal advance of the printable WinAnsi characters at the given size
    pub fn avg_char_width(&self, size: Pt) -> Pt {
        self.scaling(size) * self.avg_advance
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face.as_face_ref().glyph_index(ch).map(|i| i.0)
    }

    /// Glyph for a character, falling back to the replacement character and then to '?'
    fn glyph_or_fallback(&self, ch: char) -> Option<u16> {
        self.glyph_id(ch)
            .or_else(|| self.glyph_id('\u{FFFD}'))
            .or_else(|| self.glyph_id('?'))
    }

    /// Calculate the width of WinAnsi-encoded text at the given font size. Bytes
    /// with no glyph in the font are measured as the glyph that will be drawn in
    /// their place.
    pub fn width_of_encoded(&self, bytes: &[u8], size: Pt) -> Pt {
        let face = self.face.as_face_ref();
        let units: f32 = bytes
            .iter()
            .filter_map(|&b| self.glyph_or_fallback(win_ansi_char(b)))
            .map(|gid| face.glyph_hor_advance(GlyphId(gid)).unwrap_or_default() as f32)
            .sum();
        self.scaling(size) * units
    }
}

fn average_advance(face: &owned_ttf_parser::Face<'_>) -> f32 {
    let advances: Vec<f32> = (0x20u8..=0x7E)
        .chain(0xA1u8..=0xFF)
        .filter_map(|b| face.glyph_index(win_ansi_char(b)))
        .filter_map(|gid| face.glyph_hor_advance(gid))
        .map(|adv| adv as f32)
        .collect();

    if advances.is_empty() {
        return 0.0;
    }
    advances.iter().sum::<f32>() / advances.len() as f32
}
