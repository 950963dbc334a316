//! Per-word writing direction classification.
//!
//! Words are classified by asking a [`LanguageIdentifier`] which language they're in and
//! looking that language up in a [`DirectionTable`]. When no identifier is available, or it
//! can't make up its mind about a word, the word is tested against the Unicode blocks used
//! exclusively by right-to-left scripts instead. Every answer is memoized in the
//! [`ClassificationContext`] for as long as the context lives.

use crate::error::DetectionError;
use std::collections::HashMap;
use std::sync::RwLock;
use tokio::sync::OnceCell;

/// Identifies the language a single word is written in.
#[allow(async_fn_in_trait)]
pub trait LanguageIdentifier {
    /// Returns the language code of `word`, or `None` if the identifier has no opinion
    async fn identify(&self, word: &str) -> Result<Option<String>, DetectionError>;
}

/// Produces a [`LanguageIdentifier`]. Initialization may be slow (loading models or
/// dictionaries) so it is deferred until the first word needs classifying, and is attempted
/// exactly once per [`ClassificationContext`].
#[allow(async_fn_in_trait)]
pub trait IdentifierSource {
    type Identifier: LanguageIdentifier;

    async fn initialize(&self) -> Result<Self::Identifier, DetectionError>;
}

/// Maps language codes to writing directions
pub trait DirectionTable {
    /// `Some(true)` for right-to-left languages, `Some(false)` for left-to-right ones and
    /// `None` for languages the table doesn't know
    fn is_rtl_language(&self, code: &str) -> Option<bool>;
}

/// An [`IdentifierSource`] that never initializes, so classification always uses the
/// Unicode range heuristic
#[derive(Debug, Default, Copy, Clone)]
pub struct Unavailable;

/// The identifier type of [`Unavailable`]; it never identifies anything
#[derive(Debug, Default, Copy, Clone)]
pub struct NoIdentifier;

impl LanguageIdentifier for NoIdentifier {
    async fn identify(&self, _word: &str) -> Result<Option<String>, DetectionError> {
        Ok(None)
    }
}

impl IdentifierSource for Unavailable {
    type Identifier = NoIdentifier;

    async fn initialize(&self) -> Result<NoIdentifier, DetectionError> {
        Err(DetectionError::Unavailable)
    }
}

/// A [`DirectionTable`] of the right-to-left languages by ISO 639 code. Codes are matched
/// on their primary subtag, case-insensitively, so `fa-IR` and `AR` are both known. Any
/// other well-formed code is considered left-to-right.
#[derive(Debug, Default, Copy, Clone)]
pub struct KnownRtlLanguages;

const RTL_LANGUAGES: &[&str] = &[
    "ar", "ara", "arc", "ckb", "dv", "div", "fa", "fas", "per", "he", "heb", "iw", "ps", "pus",
    "sd", "snd", "syr", "ug", "uig", "ur", "urd", "yi", "yid", "ji",
];

impl DirectionTable for KnownRtlLanguages {
    fn is_rtl_language(&self, code: &str) -> Option<bool> {
        let primary = code.split(['-', '_']).next().unwrap_or_default();
        if primary.is_empty() || !primary.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        let primary = primary.to_ascii_lowercase();
        Some(RTL_LANGUAGES.contains(&primary.as_str()))
    }
}

/// Whether a character belongs to a block used only by right-to-left scripts
pub fn is_rtl_char(ch: char) -> bool {
    matches!(ch,
        '\u{0590}'..='\u{05FF}' |  // Hebrew
        '\u{0600}'..='\u{06FF}' |  // Arabic
        '\u{0700}'..='\u{074F}' |  // Syriac
        '\u{0750}'..='\u{077F}' |  // Arabic Supplement
        '\u{0780}'..='\u{07BF}' |  // Thaana
        '\u{07C0}'..='\u{07FF}' |  // NKo
        '\u{0800}'..='\u{083F}' |  // Samaritan
        '\u{0840}'..='\u{085F}' |  // Mandaic
        '\u{0870}'..='\u{089F}' |  // Arabic Extended-B
        '\u{08A0}'..='\u{08FF}' |  // Arabic Extended-A
        '\u{FB1D}'..='\u{FB4F}' |  // Hebrew presentation forms
        '\u{FB50}'..='\u{FDFF}' |  // Arabic Presentation Forms-A
        '\u{FE70}'..='\u{FEFC}'    // Arabic Presentation Forms-B
    )
}

/// Heuristic classification: a word is right-to-left if any of its characters is
pub fn contains_rtl_chars(word: &str) -> bool {
    word.chars().any(is_rtl_char)
}

/// Owns everything direction classification needs across paragraphs: the identifier source,
/// the lazily initialized identifier, the direction table, and the memo of every word
/// classified so far.
///
/// A context is meant to be shared (by reference) between all the paragraphs of a document,
/// including paragraphs laid out concurrently. The identifier is initialized at most once
/// even under concurrent first use; a failed initialization is remembered and never retried.
pub struct ClassificationContext<S: IdentifierSource, T: DirectionTable> {
    source: S,
    table: T,
    identifier: OnceCell<Option<S::Identifier>>,
    cache: RwLock<HashMap<String, bool>>,
}

impl ClassificationContext<Unavailable, KnownRtlLanguages> {
    /// A context that classifies purely by Unicode ranges
    pub fn heuristic() -> Self {
        ClassificationContext::new(Unavailable, KnownRtlLanguages)
    }
}

impl<S: IdentifierSource, T: DirectionTable> ClassificationContext<S, T> {
    pub fn new(source: S, table: T) -> Self {
        ClassificationContext {
            source,
            table,
            identifier: OnceCell::new(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// The memoized direction of `word`, if it has been classified before
    pub fn cached(&self, word: &str) -> Option<bool> {
        // a poisoned lock only means another classification panicked mid-insert; the map
        // itself is still usable
        let cache = self.cache.read().unwrap_or_else(|e| e.into_inner());
        cache.get(word).copied()
    }

    /// Number of distinct words classified so far
    pub fn cache_len(&self) -> usize {
        let cache = self.cache.read().unwrap_or_else(|e| e.into_inner());
        cache.len()
    }

    /// Classify `word`, returning `true` if it is written in a right-to-left script.
    pub async fn classify(&self, word: &str) -> bool {
        if let Some(rtl) = self.cached(word) {
            return rtl;
        }

        let rtl = match self.identify(word).await {
            Some(code) => self.table.is_rtl_language(&code).unwrap_or(false),
            None => contains_rtl_chars(word),
        };

        let mut cache = self.cache.write().unwrap_or_else(|e| e.into_inner());
        // keep whatever got there first so a word's direction never changes once observed
        *cache.entry(word.to_string()).or_insert(rtl)
    }

    async fn identify(&self, word: &str) -> Option<String> {
        if word.is_empty() {
            return None;
        }

        let identifier = self
            .identifier
            .get_or_init(|| async {
                match self.source.initialize().await {
                    Ok(identifier) => Some(identifier),
                    Err(e) => {
                        log::warn!("language identification disabled, using script ranges: {e}");
                        None
                    }
                }
            })
            .await
            .as_ref()?;

        match identifier.identify(word).await {
            Ok(Some(code)) if !code.is_empty() => Some(code),
            Ok(_) => {
                log::debug!("no language identified for {word:?}, using script ranges");
                None
            }
            Err(e) => {
                log::debug!("language identification failed for {word:?}: {e}");
                None
            }
        }
    }
}
