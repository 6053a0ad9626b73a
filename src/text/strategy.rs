//! Page text extraction strategies.

use super::chunk::TextChunk;
use super::glyph::TextRun;
use super::lines::{group_lines, Line};
use super::tolerance::merge_lines;
use serde::{Deserialize, Serialize};

/// How page text is reconstructed from glyph runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum ExtractionMode {
    /// Geometric line grouping in paint order, with spaces inferred at word
    /// boundaries
    #[default]
    Positional,
    /// Vertical-tolerance line bucketing with horizontal gap merging
    ToleranceMerge {
        /// Maximum gap joined without a space
        tolerance_x: f32,
        /// Maximum baseline distance from a line's first run
        tolerance_y: f32,
    },
}

/// Reconstruct the text lines of one page.
pub fn extract_lines(runs: &[TextRun], mode: ExtractionMode) -> Vec<String> {
    match mode {
        ExtractionMode::Positional => {
            let chunks: Vec<TextChunk> = runs.iter().map(TextChunk::from_run).collect();
            group_lines(&chunks).iter().map(positional_line_text).collect()
        },
        ExtractionMode::ToleranceMerge {
            tolerance_x,
            tolerance_y,
        } => merge_lines(runs, tolerance_x, tolerance_y),
    }
}

/// Text of one line, with a space inserted at geometric word boundaries.
fn positional_line_text(line: &Line<'_>) -> String {
    let mut text = String::new();
    let mut previous: Option<&TextChunk> = None;

    for chunk in &line.chunks {
        if let Some(prev) = previous {
            if !chunk.text.starts_with(' ')
                && !prev.text.ends_with(' ')
                && chunk.location.is_at_word_boundary(&prev.location)
            {
                text.push(' ');
            }
        }
        text.push_str(&chunk.text);
        previous = Some(chunk);
    }

    text
}
