mod colour;
pub use colour::*;

mod content;
pub use content::*;

mod encoding;
pub use encoding::*;

mod font;
pub use font::*;

mod geometry;
pub use geometry::*;

/// Wrapping text into lines and placing those lines on pages
pub mod layout;

mod page;
pub use page::*;

mod style;
pub use style::*;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export PDF-writer functionality, mostly for assembling rendered page content into documents
pub use pdf_writer;
