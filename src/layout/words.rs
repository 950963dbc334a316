use super::direction::{ClassificationContext, DirectionTable, IdentifierSource};

/// A span of paragraph text sharing a single weight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFragment {
    pub text: String,
    pub bold: bool,
}

impl TextFragment {
    pub fn new<S: Into<String>>(text: S, bold: bool) -> TextFragment {
        TextFragment {
            text: text.into(),
            bold,
        }
    }

    pub fn regular<S: Into<String>>(text: S) -> TextFragment {
        TextFragment::new(text, false)
    }

    pub fn bold<S: Into<String>>(text: S) -> TextFragment {
        TextFragment::new(text, true)
    }
}

/// A whitespace-delimited token of a paragraph, with the weight of the fragment it came
/// from and the direction of the script it is written in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub text: String,
    pub bold: bool,
    pub rtl: bool,
}

/// Splits fragments into words, classifying the direction of each one.
///
/// Fragment order and the order of words within each fragment are preserved; whitespace-only
/// fragments contribute nothing. Words are classified one after another, never concurrently.
pub async fn extract_words<S, T>(
    context: &ClassificationContext<S, T>,
    fragments: &[TextFragment],
) -> Vec<Word>
where
    S: IdentifierSource,
    T: DirectionTable,
{
    let mut words = Vec::new();
    for fragment in fragments {
        for token in fragment.text.split_whitespace() {
            let rtl = context.classify(token).await;
            words.push(Word {
                text: token.to_string(),
                bold: fragment.bold,
                rtl,
            });
        }
    }
    words
}
