//! Turning a finished page buffer into a PDF content stream.

use crate::colour::Colour;
use crate::font::Font;
use crate::page::PageBuffer;
use crate::units::Pt;
use pdf_writer::{Content, Name, Str};
use std::rc::Rc;

/// A page's content stream, along with the fonts it refers to. The font at
/// index `i` is the one the stream selects as `/F{i}`, so the page's resource
/// dictionary must map those names in the same order.
pub struct RenderedContent {
    pub stream: Vec<u8>,
    pub fonts: Vec<Rc<Font>>,
}

fn font_index(fonts: &mut Vec<Rc<Font>>, font: &Rc<Font>) -> usize {
    match fonts.iter().position(|f| Rc::ptr_eq(f, font)) {
        Some(index) => index,
        None => {
            fonts.push(Rc::clone(font));
            fonts.len() - 1
        }
    }
}

impl PageBuffer {
    /// Render every span on the page into PDF text operators. Text is shown as
    /// the raw WinAnsi bytes it was measured with, so the fonts need to be
    /// declared with `WinAnsiEncoding` when the page is written out.
    pub fn render_content(&self) -> RenderedContent {
        let mut fonts: Vec<Rc<Font>> = Vec::new();
        if self.spans.is_empty() {
            return RenderedContent {
                stream: Vec::default(),
                fonts,
            };
        }

        let mut content = Content::new();
        content.save_state();

        let mut current_font: Option<(usize, Pt)> = None;
        let mut current_colour: Option<Colour> = None;

        for span in self.spans.iter() {
            let font = (font_index(&mut fonts, &span.style.font), span.style.size);
            if current_font != Some(font) {
                let name = format!("F{}", font.0);
                content.set_font(Name(name.as_bytes()), *font.1);
                current_font = Some(font);
            }
            if current_colour != Some(span.style.colour) {
                span.style.colour.apply_fill(&mut content);
                current_colour = Some(span.style.colour);
            }

            content.begin_text();
            content.next_line(*span.coords.0, *span.coords.1);
            content.show(Str(span.text.as_bytes()));
            content.end_text();
        }

        content.restore_state();

        RenderedContent {
            stream: content.finish(),
            fonts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;
    use crate::layout::Padding;

    #[test]
    fn empty_page_has_empty_stream() {
        let page: PageBuffer = PageBuffer::new(Size::A4, &Padding::all(Pt(36.0)));
        let rendered = page.render_content();
        assert!(rendered.stream.is_empty());
        assert!(rendered.fonts.is_empty());
    }
}
