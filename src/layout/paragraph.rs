use super::align::Align;
use super::direction::{ClassificationContext, DirectionTable, IdentifierSource};
use super::lines::{build_lines, Line};
use super::margins::Margins;
use super::paginate::{layout_lines, LayoutMetrics, LineSink};
use super::render::{measure_word, render_line};
use super::reorder::reorder_runs;
use super::words::{extract_words, TextFragment};
use crate::canvas::{Canvas, FontStyle, FontWeight};
use crate::units::Pt;

/// Line height as a multiple of the font size when no explicit line height is given
pub const DEFAULT_LINE_HEIGHT_FACTOR: f32 = 1.15;

/// How a paragraph is placed on the page
#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphOptions {
    /// Margin applied to every side unless `margins` is set
    pub margin: Pt,
    /// Per-side margins; take precedence over `margin`
    pub margins: Option<Margins>,
    /// Overall reading direction of the paragraph
    pub rtl: bool,
    /// Alignment of every line; defaults to the paragraph direction's natural side
    pub align: Option<Align>,
    /// Font size to lay the paragraph out at; the canvas's size is restored afterwards
    pub font_size: Option<Pt>,
    /// Distance between baselines; defaults to [`DEFAULT_LINE_HEIGHT_FACTOR`] × font size
    pub line_height: Option<Pt>,
    /// Trace metrics and line placement through [`log::debug!`]
    pub debug: bool,
}

impl Default for ParagraphOptions {
    fn default() -> Self {
        ParagraphOptions {
            margin: Pt(10.0),
            margins: None,
            rtl: false,
            align: None,
            font_size: None,
            line_height: None,
            debug: false,
        }
    }
}

impl ParagraphOptions {
    pub fn with_margin<D: Into<Pt>>(mut self, margin: D) -> Self {
        self.margin = margin.into();
        self
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = Some(margins);
        self
    }

    pub fn with_rtl(mut self, rtl: bool) -> Self {
        self.rtl = rtl;
        self
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    pub fn with_font_size<D: Into<Pt>>(mut self, size: D) -> Self {
        self.font_size = Some(size.into());
        self
    }

    pub fn with_line_height<D: Into<Pt>>(mut self, line_height: D) -> Self {
        self.line_height = Some(line_height.into());
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// The margins in effect: the per-side margins if given, otherwise the uniform one
    pub fn effective_margins(&self) -> Margins {
        self.margins.unwrap_or_else(|| Margins::all(self.margin))
    }
}

/// The outcome of [`measure_paragraph`]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ParagraphMeasurement {
    pub line_height: Pt,
    pub line_count: usize,
    /// Where the next paragraph would start
    pub end_y: Pt,
}

struct Prepared {
    lines: Vec<Line>,
    metrics: LayoutMetrics,
    font: String,
    restore_size: Option<Pt>,
}

async fn prepare<C, S, T>(
    canvas: &mut C,
    context: &ClassificationContext<S, T>,
    fragments: &[TextFragment],
    options: &ParagraphOptions,
) -> Prepared
where
    C: Canvas,
    S: IdentifierSource,
    T: DirectionTable,
{
    let restore_size = options.font_size.map(|size| {
        let previous = canvas.font_size();
        canvas.set_font_size(size);
        previous
    });

    let font = canvas.font_name();
    canvas.set_font(&font, FontStyle::Normal, FontWeight::Regular);
    let font_size = canvas.font_size();
    let line_height = options
        .line_height
        .unwrap_or(font_size * DEFAULT_LINE_HEIGHT_FACTOR);
    let metrics = LayoutMetrics::new(
        canvas.page_width(),
        canvas.page_height(),
        options.effective_margins(),
        line_height,
        canvas.measure_width(" "),
    );
    if options.debug {
        log::debug!("paragraph metrics: {metrics:?} (font {font:?} at {font_size})");
    }

    let words = extract_words(context, fragments).await;
    let words = reorder_runs(words, options.rtl);
    let lines = build_lines(words, metrics.content_width, metrics.space_width, |word| {
        measure_word(canvas, &font, word)
    });
    if options.debug {
        log::debug!("paragraph packed into {} line(s)", lines.len());
    }

    Prepared {
        lines,
        metrics,
        font,
        restore_size,
    }
}

fn finish<C: Canvas>(canvas: &mut C, prepared: &Prepared) {
    canvas.set_font(&prepared.font, FontStyle::Normal, FontWeight::Regular);
    if let Some(size) = prepared.restore_size {
        canvas.set_font_size(size);
    }
}

struct DrawLines<'a, C: Canvas> {
    canvas: &'a mut C,
    metrics: &'a LayoutMetrics,
    font: &'a str,
    options: &'a ParagraphOptions,
}

impl<C: Canvas> LineSink for DrawLines<'_, C> {
    fn page_break(&mut self) {
        if self.options.debug {
            log::debug!("page break");
        }
        self.canvas.add_page();
    }

    fn line(&mut self, line: &Line, y: Pt) {
        if self.options.debug {
            log::debug!("line at y={y}: {:?}", line.text());
        }
        render_line(
            self.canvas,
            line,
            y,
            self.options.rtl,
            self.options.align,
            self.metrics,
            self.font,
        );
    }
}

#[derive(Default)]
struct CountLines {
    lines: usize,
}

impl LineSink for CountLines {
    fn page_break(&mut self) {}

    fn line(&mut self, _line: &Line, _y: Pt) {
        self.lines += 1;
    }
}

/// Lays out and draws a paragraph of mixed-direction, mixed-weight text starting with its
/// first baseline at `start_y`, adding pages to the canvas as needed. Returns the vertical
/// position following the paragraph.
///
/// Words are classified through `context`, runs of words foreign to the paragraph direction
/// are reversed, words are packed greedily into the content width, and lines are placed
/// down the page. Paragraphs without any words draw nothing but still advance by one line.
///
/// ```
/// use pdf_bidi::layout::{layout_paragraph, Align, ClassificationContext, ParagraphOptions, TextFragment};
/// use pdf_bidi::{Canvas, FontStyle, FontWeight, Pt, TextDirection};
///
/// // a canvas where every character is 5pt wide
/// struct Fixed { drawn: Vec<(String, Pt)> }
///
/// impl Canvas for Fixed {
///     fn measure_width(&self, text: &str) -> Pt { Pt(5.0 * text.chars().count() as f32) }
///     fn draw_text(&mut self, text: &str, x: Pt, _y: Pt, _d: TextDirection) {
///         self.drawn.push((text.to_string(), x));
///     }
///     fn set_font(&mut self, _name: &str, _style: FontStyle, _weight: FontWeight) {}
///     fn set_font_size(&mut self, _size: Pt) {}
///     fn add_page(&mut self) {}
///     fn font_size(&self) -> Pt { Pt(10.0) }
///     fn font_name(&self) -> String { "Mono".into() }
///     fn page_width(&self) -> Pt { Pt(200.0) }
///     fn page_height(&self) -> Pt { Pt(100.0) }
/// }
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let context = ClassificationContext::heuristic();
/// let mut canvas = Fixed { drawn: Vec::new() };
/// let fragments = [TextFragment::regular("Hello "), TextFragment::bold("world")];
/// let options = ParagraphOptions::default().with_margin(Pt(20.0)).with_align(Align::Left);
///
/// let end = layout_paragraph(&mut canvas, &context, &fragments, Pt(30.0), &options).await;
/// assert_eq!(end, Pt(41.5));
/// assert_eq!(canvas.drawn, vec![("Hello".into(), Pt(20.0)), ("world".into(), Pt(50.0))]);
/// # });
/// ```
pub async fn layout_paragraph<C, S, T>(
    canvas: &mut C,
    context: &ClassificationContext<S, T>,
    fragments: &[TextFragment],
    start_y: Pt,
    options: &ParagraphOptions,
) -> Pt
where
    C: Canvas,
    S: IdentifierSource,
    T: DirectionTable,
{
    let prepared = prepare(canvas, context, fragments, options).await;

    let mut sink = DrawLines {
        canvas: &mut *canvas,
        metrics: &prepared.metrics,
        font: &prepared.font,
        options,
    };
    let end_y = layout_lines(&prepared.lines, &prepared.metrics, start_y, &mut sink);

    finish(canvas, &prepared);
    end_y
}

/// Performs the same classification, reordering, packing and pagination as
/// [`layout_paragraph`] without drawing anything or adding pages, and reports how much
/// space the paragraph would take.
pub async fn measure_paragraph<C, S, T>(
    canvas: &mut C,
    context: &ClassificationContext<S, T>,
    fragments: &[TextFragment],
    start_y: Pt,
    options: &ParagraphOptions,
) -> ParagraphMeasurement
where
    C: Canvas,
    S: IdentifierSource,
    T: DirectionTable,
{
    let prepared = prepare(canvas, context, fragments, options).await;

    let mut sink = CountLines::default();
    let end_y = layout_lines(&prepared.lines, &prepared.metrics, start_y, &mut sink);

    finish(canvas, &prepared);
    ParagraphMeasurement {
        line_height: prepared.metrics.line_height,
        line_count: sink.lines,
        end_y,
    }
}
