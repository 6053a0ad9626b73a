//! Positional text reconstruction.
//!
//! Glyph runs observed on a page, in paint order, are turned into chunks with
//! quantized baseline geometry, grouped into lines and then into words:
//!
//! - [`glyph`]: the input records ([`TextRun`], [`GlyphInfo`])
//! - [`chunk`]: baseline geometry and the same-line / word-boundary tests
//! - [`lines`]: chain line grouping
//! - [`words`]: exact word search and full word reconstruction
//! - [`tolerance`]: tolerance-merge line extraction for text dumps
//! - [`strategy`]: selection between the two page-text extractors

pub mod chunk;
pub mod glyph;
pub mod lines;
pub mod strategy;
pub mod tolerance;
pub mod words;

pub use chunk::{ChunkLocation, TextChunk, DIACRITICAL_MARKS_ALLOWED_VERTICAL_DEVIATION};
pub use glyph::{GlyphInfo, TextRun};
pub use lines::{assign_line_ids, group_lines, Line};
pub use strategy::{extract_lines, ExtractionMode};
pub use tolerance::{merge_lines, DEFAULT_TOLERANCE_X, DEFAULT_TOLERANCE_Y};
pub use words::{all_words, is_word, search_words, validate_words, WordSpan};
