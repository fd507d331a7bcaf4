use crate::colour::Colour;
use crate::encoding::EncodedText;
use crate::font::Font;
use crate::units::Pt;
use std::rc::Rc;

/// Everything the layout engine needs to know about how a run of text is styled.
///
/// All of these must behave as pure functions of the style: the wrap cache
/// assumes measuring the same bytes twice gives the same answer.
pub trait TextMetrics {
    /// Width of the encoded text when drawn in this style
    fn width_of(&self, text: &[u8]) -> Pt;

    /// Vertical space each wrapped line takes up when measuring a block
    fn line_height(&self) -> Pt;

    /// Distance from the top of a line down to its baseline
    fn ascent(&self) -> Pt;

    /// Distance from the baseline down to the bottom of the line, as a positive number
    fn descent(&self) -> Pt;

    /// Extra space between the bottom of one line and the top of the next
    fn leading(&self) -> Pt;

    /// Average width of a character, used to guess where lines will break
    fn avg_char_width(&self) -> Pt;
}

/// A font at a particular size and colour
#[derive(Clone)]
pub struct TextStyle {
    pub font: Rc<Font>,
    pub size: Pt,
    pub colour: Colour,
}

impl TextStyle {
    pub fn new(font: Rc<Font>, size: Pt) -> TextStyle {
        TextStyle {
            font,
            size,
            colour: Colour::default(),
        }
    }

    pub fn with_colour(mut self, colour: Colour) -> TextStyle {
        self.colour = colour;
        self
    }

    pub fn width_of_text(&self, text: &EncodedText) -> Pt {
        self.width_of(text.as_bytes())
    }
}

impl TextMetrics for TextStyle {
    fn width_of(&self, text: &[u8]) -> Pt {
        self.font.width_of_encoded(text, self.size)
    }

    fn line_height(&self) -> Pt {
        self.font.line_height(self.size)
    }

    fn ascent(&self) -> Pt {
        self.font.ascent(self.size)
    }

    fn descent(&self) -> Pt {
        // fonts report descent below the baseline as a negative number
        -self.font.descent(self.size)
    }

    fn leading(&self) -> Pt {
        self.font.leading(self.size)
    }

    fn avg_char_width(&self) -> Pt {
        self.font.avg_char_width(self.size)
    }
}

impl std::fmt::Debug for TextStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextStyle")
            .field("size", &self.size)
            .field("colour", &self.colour)
            .finish_non_exhaustive()
    }
}
