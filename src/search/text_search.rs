//! Regex search over rendered glyphs with position tracking.
//!
//! The glyphs of a page are concatenated in paint order. Separators are
//! inserted where the geometry implies one (a space at a word boundary, a
//! newline where the line changes) but map to no glyph, so a match's
//! bounding box is always the union of the glyphs it actually covers.

use super::word_location::WordLocation;
use crate::area::{Area, BoundingBox};
use crate::error::Result;
use crate::geometry::Point;
use crate::text::{GlyphInfo, TextChunk, TextRun};
use regex::{Regex, RegexBuilder};

/// Options shared by the query operations.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Page to search (1-based). `None` or `Some(0)` searches every page.
    pub page: Option<u32>,
    /// Search areas; `None` or empty means the whole page
    pub areas: Option<Vec<Area>>,
    /// Accept results that only overlap an area
    pub accept_overlap: bool,
    /// Case insensitive search
    pub case_insensitive: bool,
    /// Stop at the first regex match that passes the filters
    pub stop_after_first_match: bool,
}

impl SearchOptions {
    /// Create new default search options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable case-insensitive search.
    pub fn case_insensitive() -> Self {
        Self {
            case_insensitive: true,
            ..Default::default()
        }
    }

    /// Set case sensitivity.
    pub fn with_case_insensitive(mut self, value: bool) -> Self {
        self.case_insensitive = value;
        self
    }

    /// Search a single page.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Restrict results to the given areas.
    pub fn with_areas(mut self, areas: Vec<Area>) -> Self {
        self.areas = Some(areas);
        self
    }

    /// Accept results that only overlap an area.
    pub fn with_accept_overlap(mut self, value: bool) -> Self {
        self.accept_overlap = value;
        self
    }

    /// Stop after the first regex match.
    pub fn with_stop_after_first_match(mut self, value: bool) -> Self {
        self.stop_after_first_match = value;
        self
    }

    /// The requested page, with `Some(0)` normalized to `None`.
    pub fn page_filter(&self) -> Option<u32> {
        self.page.filter(|&p| p > 0)
    }

    /// Whether `bbox` passes the area filter.
    pub fn accepts(&self, bbox: &BoundingBox) -> bool {
        bbox.is_included_in_any(self.areas.as_deref(), self.accept_overlap)
    }
}

/// Regex searcher over glyph runs.
pub struct TextSearcher;

impl TextSearcher {
    /// Search the runs of one page.
    ///
    /// Zero-length matches and matches covering only inferred separators
    /// produce no result. Degenerate boxes and boxes outside the requested
    /// areas are dropped.
    pub fn search_page(
        runs: &[TextRun],
        page: u32,
        page_height: f32,
        regex: &Regex,
        options: &SearchOptions,
    ) -> Vec<WordLocation> {
        let (full_text, glyphs, positions) = Self::build_text_with_positions(runs);

        let mut results = Vec::new();
        for mat in regex.find_iter(&full_text) {
            if mat.start() == mat.end() {
                continue;
            }

            let (top_left, bottom_right) = match Self::compute_match_corners(mat.start(), mat.end(), &glyphs, &positions) {
                Some(corners) => corners,
                None => continue,
            };

            let bbox = BoundingBox::from_corners(page, page_height, top_left, bottom_right);
            if bbox.is_degenerate() {
                log::debug!("page {}: dropping degenerate match {:?} at {}", page, mat.as_str(), bbox);
                continue;
            }
            if !options.accepts(&bbox) {
                continue;
            }

            results.push(WordLocation::new(mat.as_str(), bbox));
            if options.stop_after_first_match {
                break;
            }
        }

        results
    }

    /// Build regex from pattern and options.
    pub fn build_regex(pattern: &str, options: &SearchOptions) -> Result<Regex> {
        Ok(RegexBuilder::new(pattern)
            .case_insensitive(options.case_insensitive)
            .build()?)
    }

    /// Build concatenated text with position tracking.
    ///
    /// Returns the full text, the page's glyphs, and a vector of
    /// (start_pos, end_pos, glyph_index) for each glyph. Inferred separators
    /// have no entry.
    fn build_text_with_positions(runs: &[TextRun]) -> (String, Vec<GlyphInfo>, Vec<(usize, usize, usize)>) {
        let mut full_text = String::new();
        let mut glyphs = Vec::new();
        let mut positions = Vec::new();
        let mut previous: Option<TextChunk> = None;

        for run in runs {
            let chunk = TextChunk::from_run(run);

            if let Some(prev) = &previous {
                if !prev.location.same_line(&chunk.location) {
                    full_text.push('\n');
                } else if !prev.text.ends_with(' ')
                    && !chunk.text.starts_with(' ')
                    && chunk.location.is_at_word_boundary(&prev.location)
                {
                    full_text.push(' ');
                }
            }

            for glyph in &chunk.glyphs {
                let start = full_text.len();
                full_text.push_str(&glyph.text);
                positions.push((start, full_text.len(), glyphs.len()));
                glyphs.push(glyph.clone());
            }

            previous = Some(chunk);
        }

        (full_text, glyphs, positions)
    }

    /// Corners spanning the glyphs overlapping `match_start..match_end`.
    ///
    /// The ascent starts and descent ends are combined as given, never
    /// reordered, so a glyph whose ascent lies below its descent yields an
    /// inverted box. `positions` is sorted by start and non-overlapping.
    fn compute_match_corners(
        match_start: usize,
        match_end: usize,
        glyphs: &[GlyphInfo],
        positions: &[(usize, usize, usize)],
    ) -> Option<(Point, Point)> {
        let lo = positions.partition_point(|&(_, glyph_end, _)| glyph_end <= match_start);
        let hi = positions.partition_point(|&(glyph_start, _, _)| glyph_start < match_end);
        let covered = positions.get(lo..hi).filter(|c| !c.is_empty())?;

        let first = &glyphs[covered[0].2];
        let mut top_left = first.ascent_start;
        let mut bottom_right = first.descent_end;
        for &(_, _, glyph_idx) in &covered[1..] {
            let glyph = &glyphs[glyph_idx];
            top_left.x = top_left.x.min(glyph.ascent_start.x);
            top_left.y = top_left.y.max(glyph.ascent_start.y);
            bottom_right.x = bottom_right.x.max(glyph.descent_end.x);
            bottom_right.y = bottom_right.y.min(glyph.descent_end.y);
        }

        Some((top_left, bottom_right))
    }
}
