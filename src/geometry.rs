use crate::layout::Padding;
use crate::units::*;
use derive_more::{Add, Sub};

/// A position on a page or in document space. PDF coordinates grow upward,
/// so moving down a page _decreases_ `y`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Add, Sub)]
pub struct Point {
    pub x: Pt,
    pub y: Pt,
}

impl Point {
    pub fn new<X: Into<Pt>, Y: Into<Pt>>(x: X, y: Y) -> Point {
        Point {
            x: x.into(),
            y: y.into(),
        }
    }
}

/// A width and a height, with no position attached
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Size {
    pub width: Pt,
    pub height: Pt,
}

impl Size {
    // north american paper
    pub const LETTER: Size = Size::portrait(8.5 * 72.0, 11.0 * 72.0);
    pub const HALF_LETTER: Size = Size::portrait(5.5 * 72.0, 8.5 * 72.0);
    pub const LEGAL: Size = Size::portrait(8.5 * 72.0, 14.0 * 72.0);

    // iso a-series, converted from mm
    pub const A4: Size = Size::portrait(210.0 * 72.0 / 25.4, 297.0 * 72.0 / 25.4);
    pub const A5: Size = Size::portrait(148.0 * 72.0 / 25.4, 210.0 * 72.0 / 25.4);

    const fn portrait(width: f32, height: f32) -> Size {
        Size {
            width: Pt(width),
            height: Pt(height),
        }
    }

    pub fn new<W: Into<Pt>, H: Into<Pt>>(width: W, height: H) -> Size {
        Size {
            width: width.into(),
            height: height.into(),
        }
    }

    /// The size of an empty block of text
    pub fn zero() -> Size {
        Size::default()
    }

    /// Swap width and height, turning a portrait page into a landscape one
    pub fn landscape(self) -> Size {
        if self.width >= self.height {
            self
        } else {
            Size {
                width: self.height,
                height: self.width,
            }
        }
    }
}

/// A rectangle, specified by two opposite corners.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the lower-left corner.
    pub x1: Pt,
    /// The y-coordinate of the lower-left corner.
    pub y1: Pt,
    /// The x-coordinate of the upper-right corner.
    pub x2: Pt,
    /// The y-coordinate of the upper-right corner.
    pub y2: Pt,
}

impl Rect {
    /// The rectangle covering a whole page of the given size
    pub fn from_size(size: Size) -> Rect {
        Rect {
            x1: Pt(0.0),
            y1: Pt(0.0),
            x2: size.width,
            y2: size.height,
        }
    }

    /// Shrink the rectangle by the given padding on each side
    pub fn inset(&self, padding: &Padding) -> Rect {
        Rect {
            x1: self.x1 + padding.left,
            y1: self.y1 + padding.bottom,
            x2: self.x2 - padding.right,
            y2: self.y2 - padding.top,
        }
    }

    pub fn width(&self) -> Pt {
        self.x2 - self.x1
    }

    pub fn height(&self) -> Pt {
        self.y2 - self.y1
    }

    pub fn top_left(&self) -> Point {
        Point {
            x: self.x1,
            y: self.y2,
        }
    }
}

impl From<Rect> for pdf_writer::Rect {
    fn from(r: Rect) -> Self {
        pdf_writer::Rect {
            x1: r.x1.into(),
            y1: r.y1.into(),
            x2: r.x2.into(),
            y2: r.y2.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_shrinks_every_side() {
        let page = Rect::from_size(Size::new(Pt(100.0), Pt(200.0)));
        let body = page.inset(&Padding::trbl(Pt(10.0), Pt(5.0), Pt(20.0), Pt(15.0)));
        assert_eq!(body.x1, Pt(15.0));
        assert_eq!(body.x2, Pt(95.0));
        assert_eq!(body.y1, Pt(20.0));
        assert_eq!(body.y2, Pt(190.0));
        assert_eq!(body.width(), Pt(80.0));
        assert_eq!(body.height(), Pt(170.0));
        assert_eq!(body.top_left(), Point::new(Pt(15.0), Pt(190.0)));
    }

    #[test]
    fn landscape_swaps_portrait_dimensions() {
        let landscape = Size::LETTER.landscape();
        assert_eq!(landscape.width, Pt(11.0 * 72.0));
        assert_eq!(landscape.height, Pt(8.5 * 72.0));
        assert_eq!(landscape.landscape(), landscape);
    }
}
