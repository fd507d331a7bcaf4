//! Wrapping styled text into lines and placing those lines on pages.
//!
//! A [`Text`](crate::layout::Text) is an immutable run of text in one style.
//! Layout happens in two passes over the same value:
//!
//! 1. a _measure_ pass, where callers ask how big the text would be at some
//!    width with [`calc_dimensions`](crate::layout::Text::calc_dimensions). The
//!    text is wrapped greedily, breaking only at whitespace, and the result is
//!    cached per width.
//! 2. a _render_ pass, where [`render`](crate::layout::Text::render) draws the
//!    cached lines into a box, aligned per the text's [`Align`](crate::layout::Align),
//!    either onto every page at once ([`DrawMode::Overlay`](crate::layout::DrawMode))
//!    or flowed through the pages of a [`PageSet`](crate::PageSet)
//!    ([`DrawMode::Paginated`](crate::layout::DrawMode)).
//!
//! Words are never split: a single word wider than the available width is put
//! on a line of its own and allowed to overflow.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use pdf_flow::layout::{DrawMode, Padding, Text};
//! use pdf_flow::{PageSet, Pt, Size, TextMetrics};
//!
//! // a stand-in for a real font: every character is 6pt wide
//! #[derive(Clone)]
//! struct Typewriter;
//!
//! impl TextMetrics for Typewriter {
//!     fn width_of(&self, text: &[u8]) -> Pt { Pt(6.0 * text.len() as f32) }
//!     fn line_height(&self) -> Pt { Pt(12.0) }
//!     fn ascent(&self) -> Pt { Pt(9.0) }
//!     fn descent(&self) -> Pt { Pt(3.0) }
//!     fn leading(&self) -> Pt { Pt(0.0) }
//!     fn avg_char_width(&self) -> Pt { Pt(6.0) }
//! }
//!
//! let mut pages: PageSet<Typewriter> = PageSet::new(Size::LETTER, Padding::all(Pt(72.0)));
//! let mut text = Text::new(Rc::new(Typewriter), "The quick brown fox jumps over the lazy dog");
//!
//! let size = text.calc_dimensions(Pt(120.0))?;
//! assert_eq!(size.height, Pt(36.0));
//!
//! let top_left = pages.top_left();
//! let outer = Size::new(Pt(120.0), size.height);
//! let rendered = text.render(&mut pages, top_left, outer, DrawMode::Paginated)?;
//! assert_eq!(rendered, size);
//! assert_eq!(pages.page_count(), 1);
//! # Ok::<(), pdf_flow::LayoutError>(())
//! ```

mod align;
mod padding;
mod text;

pub use align::*;
pub use padding::*;
pub use text::*;
