use super::margins::Margins;
use crate::units::Pt;

/// Horizontal alignment of the lines of a paragraph
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Align {
    Left,
    Center,
    Right,
}

impl Align {
    /// The alignment to use when none was requested: right-to-left paragraphs hug the right
    /// margin, everything else the left
    pub fn default_for(paragraph_rtl: bool) -> Align {
        if paragraph_rtl {
            Align::Right
        } else {
            Align::Left
        }
    }

    /// The requested alignment, or the paragraph direction's default
    pub fn resolve(align: Option<Align>, paragraph_rtl: bool) -> Align {
        align.unwrap_or_else(|| Align::default_for(paragraph_rtl))
    }
}

/// Calculates where a line of `line_width` starts on a page of `page_width`. Centred lines
/// never start left of the left margin, even when they overflow the content width.
pub fn resolve_x(
    page_width: Pt,
    margins: &Margins,
    line_width: Pt,
    align: Option<Align>,
    paragraph_rtl: bool,
) -> Pt {
    match Align::resolve(align, paragraph_rtl) {
        Align::Left => margins.left,
        Align::Right => page_width - margins.right - line_width,
        Align::Center => {
            let free = page_width - margins.left - margins.right - line_width;
            margins.left + (free / 2.0).max(Pt(0.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn margins() -> Margins {
        Margins::symmetric(Pt(0.0), Pt(20.0))
    }

    #[test]
    fn explicit_alignments() {
        let x = |align| resolve_x(Pt(200.0), &margins(), Pt(50.0), Some(align), false);
        assert_eq!(x(Align::Center), Pt(75.0));
        assert_eq!(x(Align::Right), Pt(130.0));
        assert_eq!(x(Align::Left), Pt(20.0));
    }

    #[test]
    fn centre_splits_free_space_after_left_margin() {
        let margins = Margins::trbl(Pt(0.0), Pt(20.0), Pt(0.0), Pt(40.0));
        let x = |align| resolve_x(Pt(200.0), &margins, Pt(50.0), Some(align), false);
        // free space is 200 - 40 - 20 - 50 = 90, half of it lands after the left margin
        assert_eq!(x(Align::Center), Pt(85.0));
        assert_eq!(x(Align::Right), Pt(130.0));
        assert_eq!(x(Align::Left), Pt(40.0));
    }

    #[test]
    fn explicit_alignment_ignores_direction() {
        let x = resolve_x(Pt(200.0), &margins(), Pt(50.0), Some(Align::Left), true);
        assert_eq!(x, Pt(20.0));
    }

    #[test]
    fn default_follows_direction() {
        assert_eq!(
            resolve_x(Pt(200.0), &margins(), Pt(50.0), None, false),
            Pt(20.0)
        );
        assert_eq!(
            resolve_x(Pt(200.0), &margins(), Pt(50.0), None, true),
            Pt(130.0)
        );
    }

    #[test]
    fn centre_never_left_of_margin() {
        let x = resolve_x(Pt(200.0), &margins(), Pt(300.0), Some(Align::Center), false);
        assert_eq!(x, Pt(20.0));
    }
}
