//! Normalization of arbitrary text into the single-byte WinAnsi encoding.
//!
//! Text is encoded exactly once, when a [`Text`](crate::layout::Text) is
//! created, and the encoded bytes are what get both measured and drawn. Measuring
//! one form and drawing another would let the measured widths drift from the
//! glyphs that actually end up on the page.

use std::fmt;

/// Text in a single-byte encoding, one byte per glyph
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct EncodedText(Vec<u8>);

impl EncodedText {
    pub fn from_bytes(bytes: Vec<u8>) -> EncodedText {
        EncodedText(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decode back into a Rust string, for display and debugging
    pub fn decode(&self) -> String {
        decode_win_ansi(&self.0)
    }
}

impl fmt::Display for EncodedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.decode())
    }
}

/// Maps arbitrary text into the encoding the drawing backend understands
pub trait TextEncoder {
    fn encode(&self, raw: &str) -> EncodedText;
}

/// Windows-1252 ("WinAnsiEncoding" in PDF parlance)
#[derive(Debug, Default, Copy, Clone)]
pub struct WinAnsi;

/// Unicode code points of bytes 0x80..=0x9F; [None] marks the five undefined slots
const CP1252_HIGH: [Option<char>; 32] = [
    Some('\u{20AC}'),
    None,
    Some('\u{201A}'),
    Some('\u{0192}'),
    Some('\u{201E}'),
    Some('\u{2026}'),
    Some('\u{2020}'),
    Some('\u{2021}'),
    Some('\u{02C6}'),
    Some('\u{2030}'),
    Some('\u{0160}'),
    Some('\u{2039}'),
    Some('\u{0152}'),
    None,
    Some('\u{017D}'),
    None,
    None,
    Some('\u{2018}'),
    Some('\u{2019}'),
    Some('\u{201C}'),
    Some('\u{201D}'),
    Some('\u{2022}'),
    Some('\u{2013}'),
    Some('\u{2014}'),
    Some('\u{02DC}'),
    Some('\u{2122}'),
    Some('\u{0161}'),
    Some('\u{203A}'),
    Some('\u{0153}'),
    None,
    Some('\u{017E}'),
    Some('\u{0178}'),
];

const NO_BREAK_SPACE: u8 = 0xA0;

/// Characters without a WinAnsi code point that still have a reasonable stand-in
fn substitute(ch: char) -> Option<&'static [u8]> {
    let sub: &'static [u8] = match ch {
        // hyphens, non-breaking hyphen, figure dash, minus sign
        '\u{2010}' | '\u{2012}' | '\u{2212}' => b"-",
        '\u{2011}' => b"-",
        '\u{2015}' => &[0x97],
        // en/em/thin/hair spaces and friends
        '\u{2000}'..='\u{2006}' | '\u{2008}' | '\u{2009}' | '\u{200A}' | '\u{205F}' | '\u{3000}' => b" ",
        // spaces that must not break a line
        '\u{2007}' | '\u{202F}' => &[NO_BREAK_SPACE],
        '\u{2032}' => b"'",
        '\u{2033}' => b"\"",
        '\u{2024}' => b".",
        '\u{2044}' | '\u{2215}' => b"/",
        '\u{2190}' => b"<-",
        '\u{2192}' => b"->",
        '\u{2194}' => b"<->",
        '\u{21D2}' => b"=>",
        '\u{2260}' => b"!=",
        '\u{2264}' => b"<=",
        '\u{2265}' => b">=",
        '\u{2248}' => b"~",
        '\u{FB00}' => b"ff",
        '\u{FB01}' => b"fi",
        '\u{FB02}' => b"fl",
        '\u{FB03}' => b"ffi",
        '\u{FB04}' => b"ffl",
        // zero-width characters carry no glyph at all
        '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{2060}' | '\u{FEFF}' => b"",
        _ => return None,
    };
    Some(sub)
}

fn encode_char(ch: char, out: &mut Vec<u8>) {
    let cp = ch as u32;
    match cp {
        0x00..=0x7F => out.push(cp as u8),
        0xA0..=0xFF => out.push(cp as u8),
        _ => {
            if let Some(i) = CP1252_HIGH.iter().position(|c| *c == Some(ch)) {
                out.push(0x80 + i as u8);
            } else if let Some(sub) = substitute(ch) {
                out.extend_from_slice(sub);
            } else {
                log::trace!("no WinAnsi equivalent for {ch:?}, substituting '?'");
                out.push(b'?');
            }
        }
    }
}

impl TextEncoder for WinAnsi {
    fn encode(&self, raw: &str) -> EncodedText {
        let mut out = Vec::with_capacity(raw.len());
        for ch in raw.chars() {
            encode_char(ch, &mut out);
        }
        EncodedText(out)
    }
}

/// The character a single WinAnsi byte stands for. Undefined bytes decode
/// to U+FFFD.
pub fn win_ansi_char(byte: u8) -> char {
    match byte {
        0x80..=0x9F => CP1252_HIGH[(byte - 0x80) as usize].unwrap_or('\u{FFFD}'),
        _ => byte as char,
    }
}

fn decode_win_ansi(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| win_ansi_char(b)).collect()
}

/// Whether a byte separates words. This mirrors the ASCII-range whitespace of
/// most line breakers but deliberately excludes the no-break space.
pub fn is_break_space(byte: u8) -> bool {
    matches!(byte, b'\t' | b'\n' | 0x0B | 0x0C | b'\r' | 0x1C..=0x1F | b' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_and_latin1_pass_through() {
        let encoded = WinAnsi.encode("Caf\u{e9} 42");
        assert_eq!(encoded.as_bytes(), b"Caf\xe9 42");
        assert_eq!(encoded.decode(), "Caf\u{e9} 42");
    }

    #[test]
    fn windows_specials_map_into_high_range() {
        let encoded = WinAnsi.encode("\u{201C}hi\u{201D} \u{2014} \u{20AC}5");
        assert_eq!(encoded.as_bytes(), &[0x93, b'h', b'i', 0x94, b' ', 0x97, b' ', 0x80, b'5']);
        assert_eq!(encoded.to_string(), "\u{201C}hi\u{201D} \u{2014} \u{20AC}5");
    }

    #[test]
    fn substitutions_may_expand_or_vanish() {
        let encoded = WinAnsi.encode("a\u{2192}b\u{200B}c \u{FB01}x");
        assert_eq!(encoded.as_bytes(), b"a->bc fix");
    }

    #[test]
    fn unmappable_characters_become_question_marks() {
        let encoded = WinAnsi.encode("\u{65e5}\u{672c}");
        assert_eq!(encoded.as_bytes(), b"??");
    }

    #[test]
    fn narrow_spaces_stay_unbreakable() {
        let encoded = WinAnsi.encode("10\u{202F}km");
        assert_eq!(encoded.as_bytes(), &[b'1', b'0', NO_BREAK_SPACE, b'k', b'm']);
        assert!(!encoded.as_bytes().iter().any(|&b| is_break_space(b)));
        assert!(is_break_space(b'\t'));
    }

    #[test]
    fn undefined_bytes_decode_to_replacement() {
        assert_eq!(win_ansi_char(0x81), '\u{FFFD}');
        assert_eq!(win_ansi_char(0x41), 'A');
    }
}
