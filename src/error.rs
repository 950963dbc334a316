use thiserror::Error;

/// All errors that the PDF side of the crate can generate
#[derive(Error, Debug)]
pub enum PDFError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error("a page in the page order is missing from the document")]
    /// The document's page order refers to a page that doesn't exist
    PageMissing,
}

/// Failures reported by a language identifier. These never escape paragraph layout: the
/// classifier falls back to its Unicode range heuristic instead.
#[derive(Error, Debug)]
pub enum DetectionError {
    #[error("language identification is unavailable")]
    /// The identifier could not be set up at all
    Unavailable,

    #[error("language identification failed: {0}")]
    /// Identification of a single word failed
    Failed(String),
}
