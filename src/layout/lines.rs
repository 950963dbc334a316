use super::words::Word;
use crate::units::Pt;

/// A run of words laid out on a single line, in the order they were packed
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Line {
    pub words: Vec<Word>,
}

impl Line {
    /// The words of the line joined by single spaces, mostly for diagnostics
    pub fn text(&self) -> String {
        self.words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Greedily packs words into lines no wider than `max_width`.
///
/// Every word is charged its own width (as reported by `word_width`) plus one trailing
/// `space_width`. A word that doesn't fit on a non-empty line starts the next one; a word
/// wider than `max_width` on its own still gets a line to itself, as words are never split.
/// No input produces no lines.
pub fn build_lines<F>(
    words: Vec<Word>,
    max_width: Pt,
    space_width: Pt,
    mut word_width: F,
) -> Vec<Line>
where
    F: FnMut(&Word) -> Pt,
{
    let mut lines: Vec<Line> = Vec::new();
    let mut current = Line::default();
    let mut current_width = Pt(0.0);

    for word in words {
        let width = word_width(&word) + space_width;
        if !current.is_empty() && current_width + width > max_width {
            lines.push(std::mem::take(&mut current));
            current_width = Pt(0.0);
        }
        current_width += width;
        current.words.push(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
