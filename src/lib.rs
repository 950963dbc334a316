mod canvas;
pub use canvas::*;

mod document;
pub use document::*;

mod font;
pub use font::*;

/// Paragraph layout of mixed-direction, mixed-weight text onto a [`Canvas`]
pub mod layout;

mod page;
pub use page::*;

/// Common paper sizes
pub mod pagesize;

mod pdf_canvas;
pub use pdf_canvas::*;

pub(crate) mod refs;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export PDF-writer functionality, mostly for custom [pdf_writer::Content] generation
pub use pdf_writer;
