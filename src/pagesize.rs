//! Common paper sizes for [`PdfCanvas`](crate::PdfCanvas) pages, in portrait orientation.
//!
//! ```
//! use pdf_bidi::pagesize::{PageOrientation, A4};
//!
//! let (width, height) = A4.landscape();
//! assert!(width > height);
//! ```

use crate::units::*;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

pub const LETTER: PageSize = (Pt(8.5 * 72.0), Pt(11.0 * 72.0));
pub const LEGAL: PageSize = (Pt(8.5 * 72.0), Pt(14.0 * 72.0));
pub const A4: PageSize = (Pt(210.0 * 72.0 / 25.4), Pt(297.0 * 72.0 / 25.4));
pub const A5: PageSize = (Pt(148.0 * 72.0 / 25.4), Pt(210.0 * 72.0 / 25.4));

/// Flip page sizes between portrait and landscape
pub trait PageOrientation {
    /// Width ≤ height
    fn portrait(self) -> Self;
    /// Width ≥ height
    fn landscape(self) -> Self;
}

impl PageOrientation for PageSize {
    fn portrait(self) -> Self {
        let (width, height) = self;
        (width.min(height), width.max(height))
    }

    fn landscape(self) -> Self {
        let (width, height) = self;
        (width.max(height), width.min(height))
    }
}
