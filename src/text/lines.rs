//! Line grouping of chunks in paint order.
//!
//! Each chunk is compared with its immediate predecessor only: it joins the
//! current line when the two pass [`ChunkLocation::same_line`], otherwise it
//! opens a new line. The test is a chain, not a pairwise check against the
//! whole line, so membership is not required to be transitive.
//!
//! [`ChunkLocation::same_line`]: super::chunk::ChunkLocation::same_line

use super::chunk::TextChunk;

/// A group of consecutive chunks sharing a line id.
#[derive(Debug, Clone, PartialEq)]
pub struct Line<'a> {
    /// Line id, increasing from 1 in paint order
    pub id: usize,
    /// Chunks of the line, in paint order
    pub chunks: Vec<&'a TextChunk>,
}

/// Assign a line id to every chunk, in paint order.
///
/// # Examples
///
/// ```
/// use pdf_locate::geometry::Point;
/// use pdf_locate::text::{assign_line_ids, TextChunk, TextRun};
///
/// let runs = [
///     TextRun::horizontal("Hello", Point::new(0.0, 700.0), 5.0, 8.0, 2.0, 3.0),
///     TextRun::horizontal("world", Point::new(30.0, 700.0), 5.0, 8.0, 2.0, 3.0),
///     TextRun::horizontal("Next", Point::new(0.0, 680.0), 5.0, 8.0, 2.0, 3.0),
/// ];
/// let chunks: Vec<TextChunk> = runs.iter().map(TextChunk::from_run).collect();
/// assert_eq!(assign_line_ids(&chunks), vec![1, 1, 2]);
/// ```
pub fn assign_line_ids(chunks: &[TextChunk]) -> Vec<usize> {
    let mut ids = Vec::with_capacity(chunks.len());
    let mut line_id = 0;
    for (i, chunk) in chunks.iter().enumerate() {
        let continues = i > 0 && chunks[i - 1].location.same_line(&chunk.location);
        if !continues {
            line_id += 1;
        }
        log::trace!("chunk {} {:?} -> line {}", i, chunk.text, line_id);
        ids.push(line_id);
    }
    ids
}

/// Group chunks into lines.
pub fn group_lines(chunks: &[TextChunk]) -> Vec<Line<'_>> {
    let ids = assign_line_ids(chunks);
    let mut lines: Vec<Line<'_>> = Vec::new();

    for (chunk, id) in chunks.iter().zip(ids) {
        match lines.last_mut() {
            Some(line) if line.id == id => line.chunks.push(chunk),
            _ => lines.push(Line {
                id,
                chunks: vec![chunk],
            }),
        }
    }

    lines
}
