use super::lines::Line;
use super::margins::Margins;
use crate::units::Pt;

/// Page geometry and font-derived spacing for a single paragraph. Computed once when the
/// paragraph starts and left untouched while it is laid out.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LayoutMetrics {
    pub line_height: Pt,
    pub page_width: Pt,
    pub page_height: Pt,
    /// Width lines are packed into; page width less the horizontal margins
    pub content_width: Pt,
    /// Width of a single space in the regular weight of the paragraph's font
    pub space_width: Pt,
    pub margins: Margins,
}

impl LayoutMetrics {
    pub fn new(
        page_width: Pt,
        page_height: Pt,
        margins: Margins,
        line_height: Pt,
        space_width: Pt,
    ) -> LayoutMetrics {
        LayoutMetrics {
            line_height,
            page_width,
            page_height,
            content_width: margins.content_width(page_width),
            space_width,
            margins,
        }
    }

    /// Once the cursor is past this, the next line goes on a new page
    pub fn bottom_boundary(&self) -> Pt {
        self.margins.bottom_boundary(self.page_height)
    }

    /// Where the cursor restarts on a fresh page: the top margin, kept within the page
    fn page_top(&self) -> Pt {
        self.margins.top.min(self.bottom_boundary()).max(Pt(0.0))
    }
}

/// Receives the placement decisions of [`layout_lines`]
pub trait LineSink {
    /// The next line doesn't fit on the current page; a new one should be started
    fn page_break(&mut self);

    /// `line` has been placed with its baseline at `y`
    fn line(&mut self, line: &Line, y: Pt);
}

/// Places lines down the page starting at `start_y`, breaking to a new page whenever the
/// cursor has passed the bottom margin, and returns the cursor after the last line.
///
/// A paragraph without lines still takes up one line of vertical space. A page break may
/// happen before the very first line if `start_y` is already past the boundary.
pub fn layout_lines<K: LineSink>(
    lines: &[Line],
    metrics: &LayoutMetrics,
    start_y: Pt,
    sink: &mut K,
) -> Pt {
    if lines.is_empty() {
        return start_y + metrics.line_height;
    }

    let boundary = metrics.bottom_boundary();
    let mut cursor = start_y;
    for line in lines {
        if cursor > boundary {
            sink.page_break();
            cursor = metrics.page_top();
        }
        sink.line(line, cursor);
        cursor += metrics.line_height;
    }

    cursor
}
