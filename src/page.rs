use crate::font::Font;
use crate::pagesize::PageSize;
use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use crate::PDFError;
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Name, Pdf};
use std::io::Write;

/// A font at a given size
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub id: Id<Font>,
    pub size: Pt,
}

/// A run of text placed on a page. Coordinates are PDF user space: the origin is the bottom
/// left corner of the page and `coords` is the start of the baseline.
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub coords: (Pt, Pt),
}

/// A single page and the text laid out on it
pub struct Page {
    pub size: PageSize,
    pub spans: Vec<SpanLayout>,
}

impl Page {
    pub fn new(size: PageSize) -> Page {
        Page {
            size,
            spans: Vec::default(),
        }
    }

    pub fn width(&self) -> Pt {
        self.size.0
    }

    pub fn height(&self) -> Pt {
        self.size.1
    }

    pub fn add_span(&mut self, span: SpanLayout) {
        self.spans.push(span);
    }

    /// Render the page's spans into a content stream, switching fonts only when needed
    #[allow(clippy::write_with_newline)]
    fn render(&self, fonts: &Arena<Font>) -> Result<Vec<u8>, std::io::Error> {
        let mut content: Vec<u8> = Vec::default();
        let Some(first) = self.spans.first() else {
            return Ok(content);
        };

        let mut current_font = first.font;
        write!(&mut content, "q\n")?;
        write!(
            &mut content,
            "/F{} {} Tf\n",
            current_font.id.index(),
            current_font.size
        )?;

        for span in self.spans.iter() {
            if span.font != current_font {
                current_font = span.font;
                write!(
                    &mut content,
                    "/F{} {} Tf\n",
                    current_font.id.index(),
                    current_font.size
                )?;
            }

            let font = &fonts[current_font.id];
            write!(&mut content, "BT\n")?;
            write!(&mut content, "{} {} Td\n", span.coords.0, span.coords.1)?;
            write!(&mut content, "<")?;
            for ch in span.text.chars() {
                write!(&mut content, "{:04x}", font.glyph_id_or_replacement(ch))?;
            }
            write!(&mut content, "> Tj\n")?;
            write!(&mut content, "ET\n")?;
        }
        write!(&mut content, "Q\n")?;

        Ok(content)
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        fonts: &Arena<Font>,
        writer: &mut Pdf,
    ) -> Result<(), PDFError> {
        let id = refs.get_or_gen(RefType::Page(page_index));
        let parent = refs.get_or_gen(RefType::PageTree);
        let content_id = refs.gen(RefType::ContentForPage(page_index));
        let font_refs: Vec<(usize, pdf_writer::Ref)> = fonts
            .iter()
            .map(|(font_id, _)| (font_id.index(), refs.get_or_gen(RefType::Font(font_id.index()))))
            .collect();

        let mut page = writer.page(id);
        page.media_box(pdf_writer::Rect {
            x1: 0.0,
            y1: 0.0,
            x2: self.width().into(),
            y2: self.height().into(),
        });
        page.parent(parent);

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for (index, font_ref) in font_refs {
            resource_fonts.pair(Name(format!("F{index}").as_bytes()), font_ref);
        }
        resource_fonts.finish();
        resources.finish();

        page.contents(content_id);
        page.finish();

        let rendered = self.render(fonts)?;
        writer.stream(content_id, rendered.as_slice());
        Ok(())
    }
}
