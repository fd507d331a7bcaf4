use crate::units::Pt;

/// Padding is the space left between the edges of an outer box and whatever
/// is placed inside of it. It is used both for page margins (to derive the body
/// of every page in a [`PageSet`](crate::PageSet)) and for the inset an
/// [`Align`](crate::layout::Align) computes when a wrapped block of text is
/// smaller than the box it is rendered into.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Padding {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Padding {
    /// Create padding by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS padding)
    pub fn trbl(top: Pt, right: Pt, bottom: Pt, left: Pt) -> Padding {
        Padding {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create padding where all values are equal
    pub fn all<D: Into<Pt>>(value: D) -> Padding {
        let value: Pt = value.into();
        Padding::trbl(value, value, value, value)
    }

    /// Create padding by specifying different values for vertical (top and bottom)
    /// and horizontal (left and right) sides
    pub fn symmetric(vertical: Pt, horizontal: Pt) -> Padding {
        Padding::trbl(vertical, horizontal, vertical, horizontal)
    }

    /// Padding where all values are 0.0
    pub fn empty() -> Padding {
        Padding::default()
    }

    /// Total horizontal padding (left + right)
    pub fn horizontal(&self) -> Pt {
        self.left + self.right
    }

    /// Total vertical padding (top + bottom)
    pub fn vertical(&self) -> Pt {
        self.top + self.bottom
    }
}
