use crate::encoding::EncodedText;
use crate::geometry::{Point, Rect, Size};
use crate::layout::Padding;
use crate::style::TextStyle;
use crate::units::Pt;
use crate::LayoutError;
use id_arena::{Arena, Id};
use std::rc::Rc;

/// Maps a vertical position in document space onto a page.
///
/// Document space is one tall column: it starts at the top of the first page's
/// body and keeps going downward through the bodies of every following page.
pub trait PageResolver {
    /// Handle to a page, as understood by the implementor
    type Page: Copy;

    /// Find the page that owns the absolute position `y` and the position that
    /// becomes on that page. May allocate pages.
    fn resolve(&mut self, y: Pt) -> Result<(Self::Page, Pt), LayoutError>;
}

/// Receives draw commands for text in style `S`
pub trait DrawSink<S>: PageResolver {
    /// Draw text at a baseline on a page previously returned by [PageResolver::resolve]
    fn draw_text(
        &mut self,
        page: Self::Page,
        x: Pt,
        y: Pt,
        text: &EncodedText,
        style: &Rc<S>,
    ) -> Result<(), LayoutError>;

    /// Draw text at the same page coordinates on every page
    fn draw_overlay_text(&mut self, x: Pt, y: Pt, text: &EncodedText, style: &Rc<S>);
}

/// A single run of text positioned at its baseline
#[derive(Clone, Debug)]
pub struct SpanLayout<S = TextStyle> {
    pub text: EncodedText,
    pub style: Rc<S>,
    pub coords: (Pt, Pt),
}

/// The draw commands collected for one page
#[derive(Clone, Debug)]
pub struct PageBuffer<S = TextStyle> {
    /// The size of the page
    pub media_box: Rect,
    /// Where flowed content lives, i.e. within the margins
    pub content_box: Rect,
    /// The laid out text, in the order it was drawn
    pub spans: Vec<SpanLayout<S>>,
}

impl<S> PageBuffer<S> {
    pub fn new(size: Size, margins: &Padding) -> PageBuffer<S> {
        let media_box = Rect::from_size(size);
        PageBuffer {
            media_box,
            content_box: media_box.inset(margins),
            spans: Vec::default(),
        }
    }

    pub fn add_span(&mut self, span: SpanLayout<S>) {
        self.spans.push(span);
    }
}

/// A growing run of identically-sized pages that text can be flowed onto.
///
/// Pages are created on demand as content is drawn further down document
/// space. Overlay text (headers, footers, page decorations) is kept aside and
/// stamped onto every page by [PageSet::into_pages].
pub struct PageSet<S = TextStyle> {
    page_size: Size,
    margins: Padding,
    pub pages: Arena<PageBuffer<S>>,
    pub page_order: Vec<Id<PageBuffer<S>>>,
    overlay: Vec<SpanLayout<S>>,
}

impl<S: Clone> PageSet<S> {
    pub fn new(page_size: Size, margins: Padding) -> PageSet<S> {
        PageSet {
            page_size,
            margins,
            pages: Arena::new(),
            page_order: Vec::new(),
            overlay: Vec::new(),
        }
    }

    fn body(&self) -> Rect {
        Rect::from_size(self.page_size).inset(&self.margins)
    }

    /// Top left corner of the first page's body, where document space begins
    pub fn top_left(&self) -> Point {
        self.body().top_left()
    }

    /// Width available to flowed content on every page
    pub fn body_width(&self) -> Pt {
        self.body().width()
    }

    pub fn page_count(&self) -> usize {
        self.page_order.len()
    }

    /// Get the page Id of a page at the given index
    pub fn id_of_page_index(&self, page_index: usize) -> Option<Id<PageBuffer<S>>> {
        self.page_order.get(page_index).copied()
    }

    pub fn page(&self, page_index: usize) -> Option<&PageBuffer<S>> {
        self.id_of_page_index(page_index).map(|id| &self.pages[id])
    }

    pub fn overlay(&self) -> &[SpanLayout<S>] {
        &self.overlay
    }

    fn ensure_page(&mut self, page_index: usize) -> Id<PageBuffer<S>> {
        while self.page_order.len() <= page_index {
            log::debug!("allocating page {}", self.page_order.len() + 1);
            let id = self.pages.alloc(PageBuffer::new(self.page_size, &self.margins));
            self.page_order.push(id);
        }
        self.page_order[page_index]
    }

    /// Finish the set, returning pages in order with the overlay drawn on each
    pub fn into_pages(mut self) -> Vec<PageBuffer<S>> {
        let overlay = std::mem::take(&mut self.overlay);
        let order = std::mem::take(&mut self.page_order);
        order
            .into_iter()
            .map(|id| {
                let page = &mut self.pages[id];
                PageBuffer {
                    media_box: page.media_box,
                    content_box: page.content_box,
                    spans: std::mem::take(&mut page.spans)
                        .into_iter()
                        .chain(overlay.iter().cloned())
                        .collect(),
                }
            })
            .collect()
    }
}

impl<S: Clone> PageResolver for PageSet<S> {
    type Page = Id<PageBuffer<S>>;

    fn resolve(&mut self, y: Pt) -> Result<(Id<PageBuffer<S>>, Pt), LayoutError> {
        let body = self.body();
        let body_height = body.height();
        let depth = body.y2 - y;

        let page_index = if body_height <= Pt::ZERO || depth <= Pt::ZERO {
            0
        } else {
            (depth / body_height).floor() as usize
        };

        let id = self.ensure_page(page_index);
        Ok((id, y + body_height.max(Pt::ZERO) * page_index as f32))
    }
}

impl<S: Clone> DrawSink<S> for PageSet<S> {
    fn draw_text(
        &mut self,
        page: Id<PageBuffer<S>>,
        x: Pt,
        y: Pt,
        text: &EncodedText,
        style: &Rc<S>,
    ) -> Result<(), LayoutError> {
        let page = self.pages.get_mut(page).ok_or(LayoutError::PageMissing)?;
        page.add_span(SpanLayout {
            text: text.clone(),
            style: Rc::clone(style),
            coords: (x, y),
        });
        Ok(())
    }

    fn draw_overlay_text(&mut self, x: Pt, y: Pt, text: &EncodedText, style: &Rc<S>) {
        self.overlay.push(SpanLayout {
            text: text.clone(),
            style: Rc::clone(style),
            coords: (x, y),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::{TextEncoder, WinAnsi};

    fn page_set() -> PageSet {
        // 180pt tall body on each page, starting at y = 190
        PageSet::new(Size::new(Pt(100.0), Pt(200.0)), Padding::symmetric(Pt(10.0), Pt(10.0)))
    }

    #[test]
    fn first_page_is_allocated_lazily() {
        let mut pages = page_set();
        assert_eq!(pages.page_count(), 0);

        let (id, local) = pages.resolve(Pt(150.0)).expect("can resolve");
        assert_eq!(pages.page_count(), 1);
        assert_eq!(pages.id_of_page_index(0), Some(id));
        assert_eq!(local, Pt(150.0));
    }

    #[test]
    fn positions_below_the_first_body_land_on_later_pages() {
        let mut pages = page_set();
        let body_height = Pt(180.0);

        // 10pt into the second page's body
        let y = Pt(190.0) - body_height - Pt(10.0);
        let (id, local) = pages.resolve(y).expect("can resolve");

        assert_eq!(pages.page_count(), 2);
        assert_eq!(pages.id_of_page_index(1), Some(id));
        assert_eq!(local, Pt(180.0));
    }

    #[test]
    fn positions_above_the_first_body_stay_on_the_first_page() {
        let mut pages = page_set();
        let (id, local) = pages.resolve(Pt(195.0)).expect("can resolve");
        assert_eq!(pages.id_of_page_index(0), Some(id));
        assert_eq!(local, Pt(195.0));
    }

    #[derive(Clone, Debug)]
    struct Marker;

    #[test]
    fn overlay_is_stamped_onto_every_page() {
        let mut pages: PageSet<Marker> =
            PageSet::new(Size::new(Pt(100.0), Pt(200.0)), Padding::all(Pt(10.0)));
        let style = Rc::new(Marker);

        let (id, local) = pages.resolve(Pt(0.0)).expect("can resolve");
        pages
            .draw_text(id, Pt(10.0), local, &WinAnsi.encode("hello"), &style)
            .expect("page exists");
        pages.draw_overlay_text(Pt(10.0), Pt(5.0), &WinAnsi.encode("footer"), &style);

        let finished = pages.into_pages();
        assert_eq!(finished.len(), 2);
        assert_eq!(finished[0].spans.len(), 1);
        assert_eq!(finished[1].spans.len(), 2);
        assert_eq!(finished[1].spans[0].text.decode(), "hello");
        assert_eq!(finished[1].spans[0].coords, (Pt(10.0), Pt(180.0)));
        assert_eq!(finished[0].spans[0].text.decode(), "footer");
        assert_eq!(finished[1].spans[1].coords, (Pt(10.0), Pt(5.0)));
    }

    #[test]
    fn drawing_onto_a_foreign_page_fails() {
        let mut ours: PageSet<Marker> = PageSet::new(Size::A5, Padding::empty());
        let mut theirs: PageSet<Marker> = PageSet::new(Size::A5, Padding::empty());
        let (foreign, y) = theirs.resolve(Pt(100.0)).expect("can resolve");

        let result = ours.draw_text(foreign, Pt(0.0), y, &WinAnsi.encode("x"), &Rc::new(Marker));
        assert!(matches!(result, Err(LayoutError::PageMissing)));
    }

    #[test]
    fn geometry_follows_margins() {
        let pages = page_set();
        assert_eq!(pages.top_left(), Point::new(Pt(10.0), Pt(190.0)));
        assert_eq!(pages.body_width(), Pt(80.0));
    }
}
