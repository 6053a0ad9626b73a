//! Word assembly within lines.
//!
//! Two strategies share the line grouping:
//!
//! - **Exact search** ([`search_words`]): the glyphs of a line are
//!   concatenated and each target word is looked up as a substring. Every
//!   character keeps the index of the glyph that rendered it, so a match maps
//!   straight back to its glyphs and bounding box.
//! - **Full reconstruction** ([`all_words`]): chunks are fused into words
//!   using explicit space markers and the geometric word-boundary test, then
//!   split again on rendered space glyphs so no word contains a space.

use super::glyph::GlyphInfo;
use super::lines::Line;
use crate::error::{Error, Result};
use crate::geometry::Point;

/// A reconstructed word with its corners in document space.
#[derive(Debug, Clone, PartialEq)]
pub struct WordSpan {
    /// Text of the word
    pub text: String,
    /// Ascent-line start of the first glyph
    pub top_left: Point,
    /// Descent-line end of the last glyph
    pub bottom_right: Point,
}

impl WordSpan {
    fn from_glyphs(text: String, first: &GlyphInfo, last: &GlyphInfo) -> Self {
        Self {
            text,
            top_left: first.ascent_start,
            bottom_right: last.descent_end,
        }
    }
}

/// Whether `s` is a single token: non-empty, without space, tab, newline or
/// carriage return.
///
/// # Examples
///
/// ```
/// use pdf_locate::text::is_word;
///
/// assert!(is_word("Sample"));
/// assert!(!is_word("two words"));
/// assert!(!is_word("tab\there"));
/// assert!(!is_word(""));
/// ```
pub fn is_word(s: &str) -> bool {
    !s.is_empty() && !s.contains([' ', '\t', '\n', '\r'])
}

/// Check every target word, failing on the first invalid one.
pub fn validate_words(words: &[&str]) -> Result<()> {
    match words.iter().find(|w| !is_word(w)) {
        Some(word) => Err(Error::InvalidArgument(format!("invalid word {:?}", word))),
        None => Ok(()),
    }
}

fn chars_match(a: char, b: char, case_insensitive: bool) -> bool {
    a == b || (case_insensitive && a.to_lowercase().eq(b.to_lowercase()))
}

/// Find every occurrence of the target words, line by line.
///
/// Occurrences are reported left to right without overlap, per line and per
/// word. A match never spans two lines. Callers check the targets once with
/// [`validate_words`]; an empty target matches nothing.
pub fn search_words(lines: &[Line<'_>], words: &[&str], case_insensitive: bool) -> Vec<WordSpan> {
    let targets: Vec<Vec<char>> = words
        .iter()
        .filter(|w| !w.is_empty())
        .map(|w| w.chars().collect())
        .collect();

    let mut hits = Vec::new();
    for line in lines {
        let glyphs: Vec<&GlyphInfo> = line.chunks.iter().flat_map(|c| c.glyphs.iter()).collect();

        // Character -> index of the glyph that rendered it
        let mut chars: Vec<char> = Vec::new();
        let mut owners: Vec<usize> = Vec::new();
        for (idx, glyph) in glyphs.iter().enumerate() {
            for ch in glyph.text.chars() {
                chars.push(ch);
                owners.push(idx);
            }
        }

        for target in &targets {
            let len = target.len();
            let mut pos = 0;
            while pos + len <= chars.len() {
                let found = chars[pos..pos + len]
                    .iter()
                    .zip(target)
                    .all(|(&a, &b)| chars_match(a, b, case_insensitive));
                if !found {
                    pos += 1;
                    continue;
                }

                let text: String = chars[pos..pos + len].iter().collect();
                let first = glyphs[owners[pos]];
                let last = glyphs[owners[pos + len - 1]];
                hits.push(WordSpan::from_glyphs(text, first, last));
                pos += len;
            }
        }
    }

    hits
}

/// Assign word ids to the non-blank chunks of a line.
fn assign_word_ids(chunks: &[&super::chunk::TextChunk]) -> Vec<usize> {
    let mut ids = Vec::with_capacity(chunks.len());
    let mut word_id = 0;
    for (i, current) in chunks.iter().enumerate() {
        if i > 0 {
            let previous = chunks[i - 1];
            if current.text.starts_with(' ')
                || previous.text.ends_with(' ')
                || current.location.is_at_word_boundary(&previous.location)
            {
                word_id += 1;
            }
        }
        ids.push(word_id);
    }
    ids
}

/// Reconstruct every word of every line.
pub fn all_words(lines: &[Line<'_>]) -> Vec<WordSpan> {
    let mut words = Vec::new();

    for line in lines {
        let chunks: Vec<_> = line.chunks.iter().copied().filter(|c| !c.is_blank()).collect();
        let ids = assign_word_ids(&chunks);

        let mut start = 0;
        while start < chunks.len() {
            let mut end = start + 1;
            while end < chunks.len() && ids[end] == ids[start] {
                end += 1;
            }

            // Rendered spaces inside a fused word still separate words
            let glyphs: Vec<&GlyphInfo> = chunks[start..end].iter().flat_map(|c| c.glyphs.iter()).collect();
            for token in glyphs.split(|g| g.is_space()).filter(|t| !t.is_empty()) {
                let text: String = token.iter().map(|g| g.text.as_str()).collect();
                words.push(WordSpan::from_glyphs(text, token[0], token[token.len() - 1]));
            }

            start = end;
        }
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{group_lines, TextChunk, TextRun};

    fn run(text: &str, x: f32, y: f32) -> TextRun {
        // 5 units per glyph, space width 4
        TextRun::horizontal(text, Point::new(x, y), 5.0, 8.0, 2.0, 4.0)
    }

    fn chunks(runs: &[TextRun]) -> Vec<TextChunk> {
        runs.iter().map(TextChunk::from_run).collect()
    }

    #[test]
    fn test_validate_words() {
        assert!(validate_words(&["one", "two"]).is_ok());
        assert!(matches!(validate_words(&["one", "two three"]), Err(Error::InvalidArgument(_))));
        assert!(matches!(validate_words(&["line\nbreak"]), Err(Error::InvalidArgument(_))));
        assert!(matches!(validate_words(&["cr\r"]), Err(Error::InvalidArgument(_))));
        assert!(matches!(validate_words(&[""]), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_search_across_chunks() {
        // "Sam" and "ple" are separate runs on the same line
        let chunks = chunks(&[run("Sam", 0.0, 700.0), run("ple text", 15.0, 700.0)]);
        let lines = group_lines(&chunks);
        let hits = search_words(&lines, &["Sample"], false);

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].text, "Sample");
        assert_eq!(hits[0].top_left, Point::new(0.0, 708.0));
        assert_eq!(hits[0].bottom_right, Point::new(30.0, 698.0));
    }

    #[test]
    fn test_search_every_occurrence() {
        let chunks = chunks(&[run("abc xabc abc", 0.0, 700.0)]);
        let lines = group_lines(&chunks);
        let hits = search_words(&lines, &["abc"], false);
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[1].top_left.x, 25.0);
    }

    #[test]
    fn test_search_does_not_overlap() {
        let chunks = chunks(&[run("aaaa", 0.0, 700.0)]);
        let lines = group_lines(&chunks);
        let hits = search_words(&lines, &["aa"], false);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[1].top_left.x, 10.0);
    }

    #[test]
    fn test_search_case_sensitivity() {
        let chunks = chunks(&[run("Torquent torquent", 0.0, 700.0)]);
        let lines = group_lines(&chunks);

        assert_eq!(search_words(&lines, &["torquent"], false).len(), 1);
        let upper = search_words(&lines, &["TORQUENT"], true);
        let lower = search_words(&lines, &["torquent"], true);
        assert_eq!(upper.len(), 2);
        assert_eq!(upper, lower);
        assert_eq!(upper[0].text, "Torquent");
    }

    #[test]
    fn test_search_does_not_span_lines() {
        let chunks = chunks(&[run("Sam", 0.0, 700.0), run("ple", 0.0, 680.0)]);
        let lines = group_lines(&chunks);
        assert!(search_words(&lines, &["Sample"], false).is_empty());
    }

    #[test]
    fn test_search_skips_empty_target() {
        let chunks = chunks(&[run("abc", 0.0, 700.0)]);
        let lines = group_lines(&chunks);
        let hits = search_words(&lines, &["", "b"], false);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].text, "b");
    }

    #[test]
    fn test_all_words_split_on_spaces() {
        let chunks = chunks(&[run("Lorem ipsum dolor", 0.0, 700.0)]);
        let lines = group_lines(&chunks);
        let words = all_words(&lines);
        let texts: Vec<_> = words.iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, vec!["Lorem", "ipsum", "dolor"]);
        assert_eq!(words[1].top_left.x, 30.0);
        assert_eq!(words[1].bottom_right.x, 55.0);
    }

    #[test]
    fn test_all_words_fuses_adjacent_chunks() {
        // gap 1.0 <= 4.0 / 2 -> same word
        let chunks = chunks(&[run("foo", 0.0, 700.0), run("bar", 16.0, 700.0)]);
        let lines = group_lines(&chunks);
        let words = all_words(&lines);
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].text, "foobar");
    }

    #[test]
    fn test_all_words_geometric_boundary() {
        // gap 5.0 > 4.0 / 2 -> new word
        let chunks = chunks(&[run("foo", 0.0, 700.0), run("bar", 20.0, 700.0)]);
        let lines = group_lines(&chunks);
        let texts: Vec<_> = all_words(&lines).into_iter().map(|w| w.text).collect();
        assert_eq!(texts, vec!["foo", "bar"]);
    }

    #[test]
    fn test_all_words_space_markers() {
        // Touching chunks, but the explicit space markers split them
        let chunks = chunks(&[run("foo ", 0.0, 700.0), run("bar", 20.0, 700.0), run(" baz", 35.0, 700.0)]);
        let lines = group_lines(&chunks);
        let texts: Vec<_> = all_words(&lines).into_iter().map(|w| w.text).collect();
        assert_eq!(texts, vec!["foo", "bar", "baz"]);
    }

    #[test]
    fn test_all_words_skips_blank_chunks() {
        let chunks = chunks(&[run("foo", 0.0, 700.0), run("   ", 15.0, 700.0), run("bar", 16.0, 700.0)]);
        let lines = group_lines(&chunks);
        let texts: Vec<_> = all_words(&lines).into_iter().map(|w| w.text).collect();
        assert_eq!(texts, vec!["foobar"]);
    }

    #[test]
    fn test_all_words_only_plain_space_splits() {
        // No-break space and an empty glyph stay inside the word
        let mixed = run("a\u{a0}b", 0.0, 700.0);
        let mut glyphs = mixed.glyphs.clone();
        let a = &glyphs[0];
        let empty = GlyphInfo::new("", a.baseline, a.ascent_start, a.descent_end);
        glyphs.insert(1, empty);
        let chunks = chunks(&[mixed.with_glyphs(glyphs), run("c d", 15.0, 700.0)]);
        let lines = group_lines(&chunks);
        let texts: Vec<_> = all_words(&lines).into_iter().map(|w| w.text).collect();
        assert_eq!(texts, vec!["a\u{a0}bc", "d"]);
    }

    #[test]
    fn test_all_words_per_line() {
        let chunks = chunks(&[run("first", 0.0, 700.0), run("second", 0.0, 680.0)]);
        let lines = group_lines(&chunks);
        let texts: Vec<_> = all_words(&lines).into_iter().map(|w| w.text).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }
}
