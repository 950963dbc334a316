use crate::units::Pt;

/// Page margins used when laying out paragraphs. Nothing prevents content from being drawn
/// outside of them; they bound the content width lines are packed into and the vertical
/// range lines are placed in before breaking to a new page.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: Pt, right: Pt, bottom: Pt, left: Pt) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all<D: Into<Pt>>(value: D) -> Margins {
        let value: Pt = value.into();
        Margins::trbl(value, value, value, value)
    }

    /// Create margins by specifying different values for vertical (top and bottom)
    /// and horizontal (left and right) margins
    pub fn symmetric(vertical: Pt, horizontal: Pt) -> Margins {
        Margins::trbl(vertical, horizontal, vertical, horizontal)
    }

    /// Create margins where all values are 0.0
    pub fn empty() -> Margins {
        Margins::all(Pt(0.0))
    }

    /// Horizontal space left for content on a page of the given width. May be zero or
    /// negative if the margins are wider than the page.
    pub fn content_width(&self, page_width: Pt) -> Pt {
        page_width - self.left - self.right
    }

    /// The lowest baseline a line may start at before it has to move to the next page
    pub fn bottom_boundary(&self, page_height: Pt) -> Pt {
        page_height - self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::In;

    #[test]
    fn constructors() {
        assert_eq!(
            Margins::symmetric(Pt(1.0), Pt(2.0)),
            Margins::trbl(Pt(1.0), Pt(2.0), Pt(1.0), Pt(2.0))
        );
        assert_eq!(Margins::all(In(1.0)).left, Pt(72.0));
        assert_eq!(Margins::empty(), Margins::default());
    }

    #[test]
    fn content_width_can_go_negative() {
        let margins = Margins::symmetric(Pt(0.0), Pt(60.0));
        assert_eq!(margins.content_width(Pt(200.0)), Pt(80.0));
        assert_eq!(margins.content_width(Pt(100.0)), Pt(-20.0));
        assert_eq!(Margins::all(Pt(20.0)).bottom_boundary(Pt(100.0)), Pt(80.0));
    }
}
