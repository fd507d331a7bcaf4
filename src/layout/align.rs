use crate::geometry::Size;
use crate::layout::Padding;
use crate::units::Pt;

/// Where a block of text sits inside the box it is rendered into, and where
/// each row sits within the block's own width.
///
/// The vertical component only ever affects the block as a whole; the horizontal
/// component is applied twice: once to place the block inside the outer box, and
/// once more to place every row inside the block (so a centered paragraph has
/// each of its rows centered as well).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Align {
    #[default]
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum Horizontal {
    Left,
    Center,
    Right,
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum Vertical {
    Top,
    Middle,
    Bottom,
}

impl Align {
    fn horizontal(self) -> Horizontal {
        match self {
            Align::TopLeft | Align::MiddleLeft | Align::BottomLeft => Horizontal::Left,
            Align::TopCenter | Align::MiddleCenter | Align::BottomCenter => Horizontal::Center,
            Align::TopRight | Align::MiddleRight | Align::BottomRight => Horizontal::Right,
        }
    }

    fn vertical(self) -> Vertical {
        match self {
            Align::TopLeft | Align::TopCenter | Align::TopRight => Vertical::Top,
            Align::MiddleLeft | Align::MiddleCenter | Align::MiddleRight => Vertical::Middle,
            Align::BottomLeft | Align::BottomCenter | Align::BottomRight => Vertical::Bottom,
        }
    }

    /// Distributes the space `outer` has left over around `inner`. Where `inner`
    /// is as large or larger than `outer` in a dimension, that dimension gets no
    /// padding at all (overflow is never turned into negative padding).
    pub fn padding(self, outer: Size, inner: Size) -> Padding {
        let spare_x = (outer.width - inner.width).max(Pt::ZERO);
        let spare_y = (outer.height - inner.height).max(Pt::ZERO);

        let left = match self.horizontal() {
            Horizontal::Left => Pt::ZERO,
            Horizontal::Center => spare_x / 2.0,
            Horizontal::Right => spare_x,
        };
        let top = match self.vertical() {
            Vertical::Top => Pt::ZERO,
            Vertical::Middle => spare_y / 2.0,
            Vertical::Bottom => spare_y,
        };

        Padding {
            top,
            right: spare_x - left,
            bottom: spare_y - top,
            left,
        }
    }

    /// Horizontal offset of an item `item` wide within a row `total` wide
    pub fn left_offset(self, total: Pt, item: Pt) -> Pt {
        match self.horizontal() {
            Horizontal::Left => Pt::ZERO,
            Horizontal::Center => (total - item) / 2.0,
            Horizontal::Right => total - item,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_left_never_pads_above_or_left() {
        let padding = Align::TopLeft.padding(Size::new(Pt(100.0), Pt(50.0)), Size::new(Pt(60.0), Pt(20.0)));
        assert_eq!(padding, Padding::trbl(Pt(0.0), Pt(40.0), Pt(30.0), Pt(0.0)));
    }

    #[test]
    fn middle_center_splits_leftover_space() {
        let padding =
            Align::MiddleCenter.padding(Size::new(Pt(100.0), Pt(50.0)), Size::new(Pt(60.0), Pt(20.0)));
        assert_eq!(padding, Padding::trbl(Pt(15.0), Pt(20.0), Pt(15.0), Pt(20.0)));
    }

    #[test]
    fn bottom_right_pushes_to_far_corner() {
        let padding =
            Align::BottomRight.padding(Size::new(Pt(100.0), Pt(50.0)), Size::new(Pt(60.0), Pt(20.0)));
        assert_eq!(padding.left, Pt(40.0));
        assert_eq!(padding.top, Pt(30.0));
        assert_eq!(padding.right, Pt(0.0));
        assert_eq!(padding.bottom, Pt(0.0));
    }

    #[test]
    fn overflowing_content_gets_no_padding() {
        let padding =
            Align::MiddleCenter.padding(Size::new(Pt(50.0), Pt(10.0)), Size::new(Pt(80.0), Pt(30.0)));
        assert_eq!(padding, Padding::empty());
    }

    #[test]
    fn rows_are_offset_by_horizontal_component() {
        assert_eq!(Align::MiddleLeft.left_offset(Pt(100.0), Pt(40.0)), Pt(0.0));
        assert_eq!(Align::BottomCenter.left_offset(Pt(100.0), Pt(40.0)), Pt(30.0));
        assert_eq!(Align::TopRight.left_offset(Pt(100.0), Pt(40.0)), Pt(60.0));
    }
}
