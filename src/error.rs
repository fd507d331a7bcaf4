use crate::units::Pt;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error("text has content but no style to measure it with")]
    /// Non-empty text was measured or rendered without a style
    MissingStyle,

    #[error("wrap width must be positive and finite, got {0}")]
    /// Text was wrapped to a zero, negative, or non-finite width
    InvalidWidth(Pt),

    #[error("page is not part of this page set")]
    /// A draw command referred to a page that the page set doesn't own
    PageMissing,
}
