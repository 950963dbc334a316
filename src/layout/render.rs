use super::align::{resolve_x, Align};
use super::lines::Line;
use super::paginate::LayoutMetrics;
use super::words::Word;
use crate::canvas::{Canvas, FontStyle, FontWeight, TextDirection};
use crate::units::Pt;

/// Width of `word` in `font` at the weight of the word. Leaves the canvas on that weight.
pub fn measure_word<C: Canvas>(canvas: &mut C, font: &str, word: &Word) -> Pt {
    canvas.set_font(font, FontStyle::Normal, FontWeight::from_bold(word.bold));
    canvas.measure_width(&word.text)
}

/// Draws a single line with its baseline at `y`.
///
/// Right-to-left paragraphs mirror the whole line, so the first word packed ends up
/// rightmost. The line is measured word by word at each word's own weight, positioned
/// according to `align`, then drawn left to right with one space between words. Each word
/// carries its own direction as a hint to the canvas. The line itself is left untouched.
pub fn render_line<C: Canvas>(
    canvas: &mut C,
    line: &Line,
    y: Pt,
    paragraph_rtl: bool,
    align: Option<Align>,
    metrics: &LayoutMetrics,
    font: &str,
) {
    let mut visual: Vec<(&Word, Pt)> = line
        .words
        .iter()
        .map(|word| (word, measure_word(canvas, font, word)))
        .collect();
    if paragraph_rtl {
        visual.reverse();
    }

    let gaps = visual.len().saturating_sub(1) as f32;
    let line_width: Pt =
        visual.iter().map(|&(_, width)| width).sum::<Pt>() + metrics.space_width * gaps;

    let mut x = resolve_x(
        metrics.page_width,
        &metrics.margins,
        line_width,
        align,
        paragraph_rtl,
    );

    let last = visual.len().saturating_sub(1);
    for (i, (word, width)) in visual.into_iter().enumerate() {
        canvas.set_font(font, FontStyle::Normal, FontWeight::from_bold(word.bold));
        canvas.draw_text(&word.text, x, y, TextDirection::from_rtl(word.rtl));
        x += width;
        if i < last {
            x += metrics.space_width;
        }
    }
}
