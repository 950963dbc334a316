//! Lays out a few mixed-direction paragraphs into `mixed-paragraph.pdf`.
//!
//! Usage: `cargo run --example mixed-paragraph -- <regular.ttf> [bold.ttf]`
//!
//! The font needs Latin and Arabic/Hebrew coverage (e.g. Noto Sans Arabic UI) for every word
//! to show up.

use pdf_bidi::layout::{layout_paragraph, Align, ClassificationContext, ParagraphOptions, TextFragment};
use pdf_bidi::pagesize::A5;
use pdf_bidi::{Font, In, PdfCanvas, Pt};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let mut args = std::env::args().skip(1);
    let regular = args.next().expect("usage: mixed-paragraph <regular.ttf> [bold.ttf]");
    let regular = Font::load(std::fs::read(regular).expect("can read font")).expect("can load font");
    let bold = args
        .next()
        .map(|path| Font::load(std::fs::read(path).expect("can read font")).expect("can load font"));

    let mut canvas = PdfCanvas::new(A5, "Body", regular, bold);
    let context = ClassificationContext::heuristic();

    let base = ParagraphOptions::default().with_margin(In(0.5)).with_font_size(Pt(11.0));
    let paragraphs = [
        (
            vec![
                TextFragment::bold("Greetings: "),
                TextFragment::regular("the word مرحبا means hello (roughly) and שלום means peace."),
            ],
            base.clone(),
        ),
        (
            vec![
                TextFragment::regular("مرحبا بالعالم "),
                TextFragment::bold("PDF"),
                TextFragment::regular(" هذا نص تجريبي (مثال)"),
            ],
            base.clone().with_rtl(true),
        ),
        (
            vec![TextFragment::regular(lipsum::lipsum(120))],
            base.clone().with_align(Align::Center),
        ),
    ];

    let mut y = Pt::from(In(0.5)) + Pt(11.0);
    for (fragments, options) in paragraphs.iter() {
        y = layout_paragraph(&mut canvas, &context, fragments, y, options).await;
        y += Pt(6.0);
    }

    println!("laid out {} page(s)", canvas.page_count());
    let out = std::fs::File::create("mixed-paragraph.pdf").expect("can create output");
    canvas.write(out).expect("can write pdf");
}
