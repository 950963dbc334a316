//! Paragraph layout for mixed-direction, mixed-weight text on paginated canvases.
//!
//! A paragraph is a list of [`TextFragment`]s, each either bold or regular. Laying it out
//! runs through these stages:
//!
//! 1. [`extract_words`] splits fragments into [`Word`]s and classifies each word as
//!    right-to-left or left-to-right through a [`ClassificationContext`]
//! 2. [`reorder_runs`] reverses runs of words foreign to the paragraph direction
//! 3. [`build_lines`] greedily packs words into lines no wider than the content width
//! 4. [`layout_lines`] places lines down the page, breaking to new pages at the bottom
//!    margin
//! 5. [`render_line`] positions each line per its [`Align`]ment (mirrored for right-to-left
//!    paragraphs) and draws its words onto a [`Canvas`](crate::Canvas)
//!
//! [`layout_paragraph`] and [`measure_paragraph`] run the whole pipeline.

mod align;
mod direction;
mod lines;
mod margins;
mod mirror;
mod paginate;
mod paragraph;
mod render;
mod reorder;
mod words;

pub use align::*;
pub use direction::*;
pub use lines::*;
pub use margins::*;
pub use mirror::*;
pub use paginate::*;
pub use paragraph::*;
pub use render::*;
pub use reorder::*;
pub use words::*;
