use crate::canvas::{Canvas, FontStyle, FontWeight, TextDirection};
use crate::document::Document;
use crate::font::Font;
use crate::layout::swap_parentheses;
use crate::page::{Page, SpanFont, SpanLayout};
use crate::pagesize::PageSize;
use crate::units::Pt;
use crate::PDFError;
use id_arena::Id;
use std::collections::HashMap;
use std::io::Write;

/// The faces of a registered font family. Families without a bold face draw bold words with
/// the regular face.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FontFamily {
    pub regular: Id<Font>,
    pub bold: Option<Id<Font>>,
}

impl FontFamily {
    fn face(&self, weight: FontWeight) -> Id<Font> {
        match weight {
            FontWeight::Bold => self.bold.unwrap_or(self.regular),
            FontWeight::Regular => self.regular,
        }
    }
}

/// A [`Canvas`] that collects drawn text into a PDF [`Document`].
///
/// Every page has the same size. Text is drawn with the fonts of registered families;
/// selecting a family that was never registered leaves the current one in place. Words hinted
/// as right-to-left are stored in logical order, so they're reversed into visual order (with
/// their parentheses mirrored) before being placed on the page.
pub struct PdfCanvas {
    document: Document,
    page_size: PageSize,
    current_page: Id<Page>,
    families: HashMap<String, FontFamily>,
    family_name: String,
    family: FontFamily,
    weight: FontWeight,
    style: FontStyle,
    font_size: Pt,
}

impl PdfCanvas {
    /// Start a document with a single empty page, drawing in `family` at 12pt
    pub fn new<S: Into<String>>(
        page_size: PageSize,
        family: S,
        regular: Font,
        bold: Option<Font>,
    ) -> PdfCanvas {
        let mut document = Document::default();
        let faces = FontFamily {
            regular: document.add_font(regular),
            bold: bold.map(|font| document.add_font(font)),
        };
        PdfCanvas::with_family(document, page_size, family.into(), faces)
    }

    /// Start on a fresh page of `document` with `faces` already in its font arena
    fn with_family(
        mut document: Document,
        page_size: PageSize,
        family_name: String,
        faces: FontFamily,
    ) -> PdfCanvas {
        let current_page = document.add_page(Page::new(page_size));

        let mut families = HashMap::new();
        families.insert(family_name.clone(), faces);

        PdfCanvas {
            document,
            page_size,
            current_page,
            families,
            family_name,
            family: faces,
            weight: FontWeight::Regular,
            style: FontStyle::Normal,
            font_size: Pt(12.0),
        }
    }

    /// Make another font family available to [`Canvas::set_font`]
    pub fn add_family<S: Into<String>>(
        &mut self,
        name: S,
        regular: Font,
        bold: Option<Font>,
    ) -> FontFamily {
        let faces = FontFamily {
            regular: self.document.add_font(regular),
            bold: bold.map(|font| self.document.add_font(font)),
        };
        self.register(name.into(), faces);
        faces
    }

    fn register(&mut self, name: String, faces: FontFamily) {
        self.families.insert(name, faces);
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn page_count(&self) -> usize {
        self.document.page_order.len()
    }

    /// The style last requested through [`Canvas::set_font`]. Only upright faces are
    /// registered, so it doesn't affect what gets drawn.
    pub fn style(&self) -> FontStyle {
        self.style
    }

    fn current_font(&self) -> &Font {
        &self.document.fonts[self.family.face(self.weight)]
    }

    /// Write out the PDF
    pub fn write<W: Write>(self, w: W) -> Result<(), PDFError> {
        self.document.write(w)
    }
}

/// The order the characters of a word are placed on the page in. Right-to-left words arrive
/// in logical order and are laid out reversed, which also flips which way their parentheses
/// face.
fn visual_order(text: &str, direction: TextDirection) -> String {
    match direction {
        TextDirection::Ltr => text.to_string(),
        TextDirection::Rtl => swap_parentheses(&text.chars().rev().collect::<String>()),
    }
}

impl Canvas for PdfCanvas {
    fn measure_width(&self, text: &str) -> Pt {
        self.current_font().width_of_text(text, self.font_size)
    }

    fn draw_text(&mut self, text: &str, x: Pt, y: Pt, direction: TextDirection) {
        let span = SpanLayout {
            text: visual_order(text, direction),
            font: SpanFont {
                id: self.family.face(self.weight),
                size: self.font_size,
            },
            coords: (x, self.page_size.1 - y),
        };
        self.document.pages[self.current_page].add_span(span);
    }

    fn set_font(&mut self, name: &str, style: FontStyle, weight: FontWeight) {
        match self.families.get(name) {
            Some(&family) => {
                self.family = family;
                self.family_name = name.to_string();
            }
            None => log::warn!(
                "font family {name:?} is not registered, keeping {:?}",
                self.family_name
            ),
        }
        self.style = style;
        self.weight = weight;
    }

    fn set_font_size(&mut self, size: Pt) {
        self.font_size = size;
    }

    fn add_page(&mut self) {
        self.current_page = self.document.add_page(Page::new(self.page_size));
    }

    fn font_size(&self) -> Pt {
        self.font_size
    }

    fn font_name(&self) -> String {
        self.family_name.clone()
    }

    fn page_width(&self) -> Pt {
        self.page_size.0
    }

    fn page_height(&self) -> Pt {
        self.page_size.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagesize::A5;
    use id_arena::Arena;

    // font ids from throwaway arenas: distinct, and never resolved by these tests
    fn faces(bold: bool) -> FontFamily {
        FontFamily {
            regular: Arena::<Font>::new().next_id(),
            bold: bold.then(|| Arena::<Font>::new().next_id()),
        }
    }

    fn spans(canvas: &PdfCanvas, page: usize) -> &[SpanLayout] {
        let id = canvas.document().page_order[page];
        &canvas.document().pages[id].spans
    }

    #[test]
    fn right_to_left_words_are_reversed_and_mirrored() {
        assert_eq!(visual_order("f(x)", TextDirection::Ltr), "f(x)");
        assert_eq!(visual_order("שלום(1)", TextDirection::Rtl), "(1)םולש");
        assert_eq!(visual_order("", TextDirection::Rtl), "");
    }

    #[test]
    fn spans_are_placed_bottom_up() {
        let body = faces(true);
        let mut canvas = PdfCanvas::with_family(Document::default(), A5, "Body".into(), body);
        canvas.set_font_size(Pt(10.0));
        canvas.draw_text("hello", Pt(20.0), Pt(100.0), TextDirection::Ltr);
        canvas.set_font("Body", FontStyle::Normal, FontWeight::Bold);
        canvas.draw_text("(مرحبا)", Pt(60.0), Pt(100.0), TextDirection::Rtl);

        let spans = spans(&canvas, 0);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].text, "hello");
        assert_eq!(spans[0].coords, (Pt(20.0), A5.1 - Pt(100.0)));
        assert_eq!(
            spans[0].font,
            SpanFont {
                id: body.regular,
                size: Pt(10.0)
            }
        );
        assert_eq!(spans[1].text, "(ابحرم)");
        assert_eq!(spans[1].font.id, body.bold.unwrap());
    }

    #[test]
    fn bold_without_bold_face_uses_regular() {
        let body = faces(false);
        let mut canvas = PdfCanvas::with_family(Document::default(), A5, "Body".into(), body);
        canvas.set_font("Body", FontStyle::Normal, FontWeight::Bold);
        canvas.draw_text("x", Pt(0.0), Pt(0.0), TextDirection::Ltr);
        assert_eq!(spans(&canvas, 0)[0].font.id, body.regular);
    }

    #[test]
    fn unknown_family_keeps_face_but_takes_weight() {
        let heading = faces(true);
        let mut canvas =
            PdfCanvas::with_family(Document::default(), A5, "Body".into(), faces(true));
        canvas.register("Heading".into(), heading);

        canvas.set_font("Heading", FontStyle::Normal, FontWeight::Bold);
        canvas.set_font("Missing", FontStyle::Italic, FontWeight::Regular);
        assert_eq!(canvas.font_name(), "Heading");
        assert_eq!(canvas.style(), FontStyle::Italic);

        canvas.draw_text("x", Pt(0.0), Pt(0.0), TextDirection::Ltr);
        assert_eq!(spans(&canvas, 0)[0].font.id, heading.regular);
    }

    #[test]
    fn drawing_follows_the_newest_page() {
        let mut canvas =
            PdfCanvas::with_family(Document::default(), A5, "Body".into(), faces(false));
        assert_eq!(canvas.page_count(), 1);
        canvas.draw_text("one", Pt(0.0), Pt(10.0), TextDirection::Ltr);
        canvas.add_page();
        canvas.draw_text("two", Pt(0.0), Pt(10.0), TextDirection::Ltr);

        assert_eq!(canvas.page_count(), 2);
        assert_eq!(spans(&canvas, 0)[0].text, "one");
        assert_eq!(spans(&canvas, 1)[0].text, "two");
        assert_eq!((canvas.page_width(), canvas.page_height()), A5);
    }

    #[test]
    fn writes_every_page() {
        let mut canvas =
            PdfCanvas::with_family(Document::default(), A5, "Body".into(), faces(false));
        canvas.add_page();
        canvas.add_page();

        let mut out = Vec::new();
        canvas.write(&mut out).unwrap();
        let pdf = String::from_utf8_lossy(&out);
        assert!(pdf.starts_with("%PDF-"));
        assert!(pdf.contains("/Count 3"));
        assert_eq!(pdf.matches("/MediaBox").count(), 3);
    }
}
