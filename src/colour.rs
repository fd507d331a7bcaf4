use pdf_writer::Content;

/// Fill colour for a run of text. Components are in `0.0..=1.0` and are clamped
/// into that range when written to a content stream.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// DeviceGray
    Grey(f32),
    /// DeviceRGB
    Rgb(f32, f32, f32),
    /// DeviceCMYK
    Cmyk(f32, f32, f32, f32),
}

impl Default for Colour {
    fn default() -> Self {
        Colour::BLACK
    }
}

impl Colour {
    pub const BLACK: Colour = Colour::Grey(0.0);
    pub const GREY: Colour = Colour::Grey(0.5);
    pub const RED: Colour = Colour::Rgb(1.0, 0.0, 0.0);
    pub const BLUE: Colour = Colour::Rgb(0.0, 0.0, 1.0);

    /// RGB from 8-bit channels, as in `#rrggbb`
    pub fn from_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::Rgb(channel(r), channel(g), channel(b))
    }

    /// Select this colour for filling glyphs in `content`
    pub(crate) fn apply_fill(&self, content: &mut Content) {
        let c = |v: f32| v.clamp(0.0, 1.0);
        match *self {
            Colour::Grey(g) => content.set_fill_gray(c(g)),
            Colour::Rgb(r, g, b) => content.set_fill_rgb(c(r), c(g), c(b)),
            Colour::Cmyk(cy, m, y, k) => content.set_fill_cmyk(c(cy), c(m), c(y), c(k)),
        };
    }
}

fn channel(byte: u8) -> f32 {
    byte as f32 / 255.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_black_by_default() {
        assert_eq!(Colour::default(), Colour::Grey(0.0));
    }

    #[test]
    fn byte_channels_scale_to_unit_range() {
        assert_eq!(Colour::from_rgb_bytes(255, 0, 51), Colour::Rgb(1.0, 0.0, 0.2));
    }

    #[test]
    fn out_of_range_components_are_clamped_in_the_stream() {
        let mut clamped = Content::new();
        Colour::Rgb(2.0, -1.0, 0.5).apply_fill(&mut clamped);

        let mut expected = Content::new();
        expected.set_fill_rgb(1.0, 0.0, 0.5);

        assert_eq!(clamped.finish(), expected.finish());
    }
}
