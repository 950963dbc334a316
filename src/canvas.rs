use crate::units::Pt;

/// The weight of a font face within a family
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

impl FontWeight {
    pub fn from_bold(bold: bool) -> FontWeight {
        if bold {
            FontWeight::Bold
        } else {
            FontWeight::Regular
        }
    }
}

/// The slant of a font face within a family
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// Hint passed along with drawn text indicating the direction its characters are stored in
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn from_rtl(rtl: bool) -> TextDirection {
        if rtl {
            TextDirection::Rtl
        } else {
            TextDirection::Ltr
        }
    }
}

/// A paginated drawing surface that paragraph layout draws onto.
///
/// Coordinates are top-down: `y = 0` is the top edge of the page and grows towards the
/// bottom, `x = 0` is the left edge. `y` passed to [`Canvas::draw_text`] is the baseline.
///
/// Measurements must reflect the currently selected font, size and weight, as layout
/// switches weights between words and measures after each switch.
pub trait Canvas {
    /// Width of `text` in the current font state
    fn measure_width(&self, text: &str) -> Pt;

    /// Draw `text` with its left edge at `x` and its baseline at `y` on the current page
    fn draw_text(&mut self, text: &str, x: Pt, y: Pt, direction: TextDirection);

    /// Select a face from a font family
    fn set_font(&mut self, name: &str, style: FontStyle, weight: FontWeight);

    fn set_font_size(&mut self, size: Pt);

    /// Start a new page; subsequent drawing goes to it
    fn add_page(&mut self);

    fn font_size(&self) -> Pt;

    /// Name of the currently selected font family
    fn font_name(&self) -> String;

    fn page_width(&self) -> Pt;

    fn page_height(&self) -> Pt;
}
