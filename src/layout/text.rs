use crate::encoding::{is_break_space, EncodedText, TextEncoder, WinAnsi};
use crate::geometry::{Point, Size};
use crate::layout::Align;
use crate::page::DrawSink;
use crate::style::{TextMetrics, TextStyle};
use crate::units::Pt;
use crate::LayoutError;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::rc::Rc;

/// Tuning for the wrap engine
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WrapConfig {
    /// Scales the first guess at how many characters fit on a line,
    /// `max_width / avg_char_width`. Both widths are in points at the style's
    /// size, so the ratio is a character count. A font's average is taken over
    /// all of its glyphs, which runs wider than typical prose, so the guess is
    /// widened to land nearer the real break. Only affects how many
    /// measurements are made, never where lines break.
    pub guess_widening: f32,
}

impl Default for WrapConfig {
    fn default() -> Self {
        WrapConfig {
            guess_widening: 1.22,
        }
    }
}

impl WrapConfig {
    pub fn with_guess_widening(mut self, guess_widening: f32) -> WrapConfig {
        self.guess_widening = guess_widening;
        self
    }
}

/// One physical line of wrapped text
#[derive(Debug, Clone, PartialEq)]
pub struct WrappedLine {
    pub text: EncodedText,
    /// measured width of `text`
    pub width: Pt,
    pub line_height: Pt,
}

/// All lines of a text wrapped at a single width, and the box they fill
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WrappedBlock {
    pub lines: Vec<WrappedLine>,
    pub size: Size,
}

/// How rendered lines reach the page
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DrawMode {
    /// Drawn at the same page coordinates on every page, e.g. headers and footers
    Overlay,
    /// Flowed through document space, each line landing on whichever page owns it
    Paginated,
}

/// Wrapped blocks, keyed on the bit pattern of the width they were wrapped at
#[derive(Debug, Default, Clone)]
struct WrapCache {
    blocks: HashMap<u32, WrappedBlock>,
}

/// An immutable run of text in a single style.
///
/// Wrapping the text to a width is memoized: the first call for a width does
/// the work, and every later call (whether asking for dimensions or rendering)
/// reuses that exact block. The cache is never evicted; a document layout only
/// ever tries a handful of widths for any given text.
pub struct Text<S = TextStyle> {
    style: Option<Rc<S>>,
    content: String,
    encoded: EncodedText,
    align: Align,
    config: WrapConfig,
    cache: WrapCache,
}

impl<S> Default for Text<S> {
    fn default() -> Self {
        Text {
            style: None,
            content: String::new(),
            encoded: EncodedText::default(),
            align: Align::default(),
            config: WrapConfig::default(),
            cache: WrapCache::default(),
        }
    }
}

impl<S> PartialEq for Text<S> {
    fn eq(&self, other: &Self) -> bool {
        let same_style = match (&self.style, &other.style) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        same_style && self.content == other.content && self.align == other.align
    }
}

impl<S> std::fmt::Debug for Text<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Text({})", self.content)
    }
}

impl<S: TextMetrics> Text<S> {
    /// Styled text, encoded as WinAnsi
    pub fn new<T: Into<String>>(style: Rc<S>, content: T) -> Text<S> {
        Text::with_encoder(Some(style), content, &WinAnsi)
    }

    /// Text with an optional style. Empty, unstyled text is the same as
    /// [Text::empty].
    pub fn of<T: Into<String>>(style: Option<Rc<S>>, content: T) -> Text<S> {
        Text::with_encoder(style, content, &WinAnsi)
    }

    /// Text encoded with a specific encoder. The encoding happens once, here;
    /// the encoded bytes are what is measured and drawn.
    pub fn with_encoder<T: Into<String>, E: TextEncoder>(
        style: Option<Rc<S>>,
        content: T,
        encoder: &E,
    ) -> Text<S> {
        let content = content.into();
        if content.is_empty() && style.is_none() {
            return Text::empty();
        }
        let encoded = encoder.encode(&content);
        Text {
            style,
            content,
            encoded,
            ..Text::default()
        }
    }

    /// The canonical empty text, with no content and no style
    pub fn empty() -> Text<S> {
        Text::default()
    }

    pub fn with_align(mut self, align: Align) -> Text<S> {
        self.align = align;
        self
    }

    pub fn with_config(mut self, config: WrapConfig) -> Text<S> {
        self.config = config;
        self.cache = WrapCache::default();
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn style(&self) -> Option<&Rc<S>> {
        self.style.as_ref()
    }

    pub fn encoded(&self) -> &EncodedText {
        &self.encoded
    }

    pub fn align(&self) -> Align {
        self.align
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Width of the whole text on a single line, ignoring leading and trailing
    /// whitespace
    pub fn natural_width(&self) -> Result<Pt, LayoutError> {
        let trimmed = trim(self.encoded.as_bytes());
        if trimmed.is_empty() {
            return Ok(Pt::ZERO);
        }
        let style = self.style.as_ref().ok_or(LayoutError::MissingStyle)?;
        Ok(style.width_of(trimmed))
    }

    /// Roughly how many characters fit in `width`, used as the first guess at
    /// each line break
    pub fn avg_chars_for_width(&self, width: Pt) -> usize {
        match &self.style {
            Some(style) => guess_chars(&**style, width, &self.config),
            None => 0,
        }
    }

    /// Wrap the text to `max_width`, or fetch the block from a previous call
    /// with the same width
    pub fn compute_block(&mut self, max_width: Pt) -> Result<&WrappedBlock, LayoutError> {
        if !(max_width.is_finite() && max_width > Pt::ZERO) {
            return Err(LayoutError::InvalidWidth(max_width));
        }

        match self.cache.blocks.entry(max_width.to_bits()) {
            Entry::Occupied(entry) => {
                log::trace!("wrap cache hit for {:?} at {max_width}", self.content);
                let block: &WrappedBlock = entry.into_mut();
                Ok(block)
            }
            Entry::Vacant(entry) => {
                let block = wrap(
                    self.encoded.as_bytes(),
                    self.style.as_deref(),
                    max_width,
                    &self.config,
                )?;
                log::debug!(
                    "wrapped {} bytes into {} lines at {max_width} ({} x {})",
                    self.encoded.len(),
                    block.lines.len(),
                    block.size.width,
                    block.size.height
                );
                let block: &WrappedBlock = entry.insert(block);
                Ok(block)
            }
        }
    }

    /// The size the text takes up when wrapped to `max_width`
    pub fn calc_dimensions(&mut self, max_width: Pt) -> Result<Size, LayoutError> {
        self.compute_block(max_width).map(|block| block.size)
    }

    /// Draws the text wrapped to the width of `outer`, positioned inside `outer`
    /// according to the text's alignment. Each line is drawn at its baseline,
    /// with consecutive baselines one line pitch (ascent + descent + leading)
    /// apart. Returns the size of the wrapped block, which is always the same as
    /// [Text::calc_dimensions] for the same width.
    pub fn render<D: DrawSink<S>>(
        &mut self,
        surface: &mut D,
        top_left: Point,
        outer: Size,
        mode: DrawMode,
    ) -> Result<Size, LayoutError> {
        let style = self.style.clone();
        let align = self.align;
        let block = self.compute_block(outer.width)?;
        if block.lines.is_empty() {
            return Ok(block.size);
        }
        let style = style.ok_or(LayoutError::MissingStyle)?;

        let padding = align.padding(outer, block.size);
        let x = top_left.x + padding.left;
        let mut y = top_left.y - padding.top;

        for line in block.lines.iter() {
            let line_x = x + align.left_offset(block.size.width, line.width);
            y -= style.ascent();

            match mode {
                DrawMode::Overlay => surface.draw_overlay_text(line_x, y, &line.text, &style),
                DrawMode::Paginated => {
                    let (page, local_y) = surface.resolve(y)?;
                    surface.draw_text(page, line_x, local_y, &line.text, &style)?;
                }
            }

            y -= style.descent() + style.leading();
        }

        Ok(block.size)
    }
}

fn guess_chars<S: TextMetrics + ?Sized>(style: &S, width: Pt, config: &WrapConfig) -> usize {
    let avg = style.avg_char_width();
    if !(avg.is_finite() && avg > Pt::ZERO) {
        return 0;
    }
    // float to int casts saturate, so absurd ratios clamp rather than wrap
    (width / avg * config.guess_widening).floor() as usize
}

fn skip_while<P: Fn(u8) -> bool>(bytes: &[u8], mut start: usize, pred: P) -> usize {
    while start < bytes.len() && pred(bytes[start]) {
        start += 1;
    }
    start
}

fn rewind_while<P: Fn(u8) -> bool>(bytes: &[u8], mut end: usize, pred: P) -> usize {
    while end > 0 && pred(bytes[end - 1]) {
        end -= 1;
    }
    end
}

fn is_word_byte(byte: u8) -> bool {
    !is_break_space(byte)
}

fn trim(bytes: &[u8]) -> &[u8] {
    let start = skip_while(bytes, 0, is_break_space);
    let end = rewind_while(bytes, bytes.len(), is_break_space);
    if start >= end {
        &[]
    } else {
        &bytes[start..end]
    }
}

/// `end` falls between two bytes of the same word
fn splits_word(bytes: &[u8], end: usize) -> bool {
    end > 0 && end < bytes.len() && is_word_byte(bytes[end - 1]) && is_word_byte(bytes[end])
}

/// Find where the first line of `rest` ends. `rest` must be non-empty and must
/// neither start nor end with whitespace. Returns the line's length in bytes,
/// which is never zero, and its width.
fn next_line<S: TextMetrics + ?Sized>(
    rest: &[u8],
    style: &S,
    max_width: Pt,
    guess: usize,
) -> (usize, Pt) {
    let len = rest.len();
    let mut end = guess.min(len);
    let mut width = style.width_of(&rest[..end]);

    // grow a word at a time until the candidate no longer fits
    while width < max_width && end < len {
        end = skip_while(rest, end, is_break_space);
        end = skip_while(rest, end, is_word_byte);
        width = style.width_of(&rest[..end]);
    }

    // shrink a word at a time until it fits without cutting a word in two
    while width > max_width || splits_word(rest, end) {
        let word_start = rewind_while(rest, end, is_word_byte);
        let prev_end = rewind_while(rest, word_start, is_break_space);
        if prev_end == 0 {
            // a single word wider than the line: let it overflow rather than split it
            end = skip_while(rest, 0, is_word_byte);
            width = style.width_of(&rest[..end]);
            log::debug!("word of {end} bytes overflows {max_width} at {width}");
            break;
        }
        end = prev_end;
        width = style.width_of(&rest[..end]);
    }

    let trimmed = rewind_while(rest, end, is_break_space);
    if trimmed != end {
        end = trimmed;
        width = style.width_of(&rest[..end]);
    }

    (end, width)
}

fn wrap<S: TextMetrics + ?Sized>(
    text: &[u8],
    style: Option<&S>,
    max_width: Pt,
    config: &WrapConfig,
) -> Result<WrappedBlock, LayoutError> {
    let mut rest = trim(text);
    if rest.is_empty() {
        return Ok(WrappedBlock::default());
    }
    let style = style.ok_or(LayoutError::MissingStyle)?;

    let line_height = style.line_height();
    let guess = guess_chars(style, max_width, config);

    let mut lines: Vec<WrappedLine> = Vec::new();
    while !rest.is_empty() {
        let (end, width) = next_line(rest, style, max_width, guess);
        debug_assert!(end > 0, "every line consumes at least one byte");

        lines.push(WrappedLine {
            text: EncodedText::from_bytes(rest[..end].to_vec()),
            width,
            line_height,
        });
        rest = &rest[skip_while(rest, end, is_break_space)..];
    }

    let width = lines.iter().map(|line| line.width).fold(Pt::ZERO, Pt::max);
    let height: Pt = lines.iter().map(|line| line.line_height).sum();

    Ok(WrappedBlock {
        lines,
        size: Size { width, height },
    })
}
