#![allow(dead_code)]

use pdf_bidi::layout::{IdentifierSource, LanguageIdentifier};
use pdf_bidi::{Canvas, DetectionError, FontStyle, FontWeight, Pt, TextDirection};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const REGULAR_CHAR: f32 = 5.0;
pub const BOLD_CHAR: f32 = 6.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Drawn {
    pub text: String,
    pub x: Pt,
    pub y: Pt,
    pub bold: bool,
    pub direction: TextDirection,
    pub page: usize,
}

/// A canvas with fixed per-character widths (5pt regular, 6pt bold at any size) that
/// records everything drawn on it
pub struct RecordingCanvas {
    pub width: Pt,
    pub height: Pt,
    pub font: String,
    pub size: Pt,
    pub weight: FontWeight,
    pub page: usize,
    pub drawn: Vec<Drawn>,
}

impl RecordingCanvas {
    pub fn new(width: f32, height: f32) -> RecordingCanvas {
        RecordingCanvas {
            width: Pt(width),
            height: Pt(height),
            font: "Mono".into(),
            size: Pt(10.0),
            weight: FontWeight::Regular,
            page: 0,
            drawn: Vec::new(),
        }
    }

    pub fn texts(&self) -> Vec<&str> {
        self.drawn.iter().map(|d| d.text.as_str()).collect()
    }
}

impl Canvas for RecordingCanvas {
    fn measure_width(&self, text: &str) -> Pt {
        let per_char = match self.weight {
            FontWeight::Regular => REGULAR_CHAR,
            FontWeight::Bold => BOLD_CHAR,
        };
        Pt(per_char * text.chars().count() as f32)
    }

    fn draw_text(&mut self, text: &str, x: Pt, y: Pt, direction: TextDirection) {
        self.drawn.push(Drawn {
            text: text.to_string(),
            x,
            y,
            bold: self.weight == FontWeight::Bold,
            direction,
            page: self.page,
        });
    }

    fn set_font(&mut self, name: &str, _style: FontStyle, weight: FontWeight) {
        self.font = name.to_string();
        self.weight = weight;
    }

    fn set_font_size(&mut self, size: Pt) {
        self.size = size;
    }

    fn add_page(&mut self) {
        self.page += 1;
    }

    fn font_size(&self) -> Pt {
        self.size
    }

    fn font_name(&self) -> String {
        self.font.clone()
    }

    fn page_width(&self) -> Pt {
        self.width
    }

    fn page_height(&self) -> Pt {
        self.height
    }
}

/// Identifies languages from a fixed word → code table, counting every call
pub struct TableIdentifier {
    pub languages: HashMap<String, String>,
    pub calls: Arc<AtomicUsize>,
}

impl LanguageIdentifier for TableIdentifier {
    async fn identify(&self, word: &str) -> Result<Option<String>, DetectionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        Ok(self.languages.get(word).cloned())
    }
}

pub struct TableSource {
    pub languages: HashMap<String, String>,
    pub calls: Arc<AtomicUsize>,
    pub inits: Arc<AtomicUsize>,
}

impl TableSource {
    pub fn new(languages: &[(&str, &str)]) -> TableSource {
        TableSource {
            languages: languages
                .iter()
                .map(|&(word, code)| (word.to_string(), code.to_string()))
                .collect(),
            calls: Arc::new(AtomicUsize::new(0)),
            inits: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl IdentifierSource for TableSource {
    type Identifier = TableIdentifier;

    async fn initialize(&self) -> Result<TableIdentifier, DetectionError> {
        self.inits.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        Ok(TableIdentifier {
            languages: self.languages.clone(),
            calls: self.calls.clone(),
        })
    }
}
