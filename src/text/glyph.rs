//! Rendered glyph runs, the input of every reconstruction algorithm.
//!
//! A [`TextRun`] is one text-render event observed on a page, in paint order.
//! Its text is owned: the render context that produced it may be reused or
//! mutated right after the event, so the text is copied at observation time
//! and never read back lazily.

use crate::geometry::{LineSegment, Point};
use serde::{Deserialize, Serialize};

/// Per-character render information inside a [`TextRun`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlyphInfo {
    /// Text of the glyph (usually a single character)
    pub text: String,
    /// Baseline of the glyph
    pub baseline: LineSegment,
    /// Start of the ascent line (top-left corner for horizontal text)
    pub ascent_start: Point,
    /// End of the descent line (bottom-right corner for horizontal text)
    pub descent_end: Point,
}

impl GlyphInfo {
    /// Create glyph info.
    pub fn new(text: impl Into<String>, baseline: LineSegment, ascent_start: Point, descent_end: Point) -> Self {
        Self {
            text: text.into(),
            baseline,
            ascent_start,
            descent_end,
        }
    }

    /// Whether the glyph renders a plain space (U+0020).
    ///
    /// Other whitespace such as a no-break space belongs to the word around it.
    pub fn is_space(&self) -> bool {
        self.text == " "
    }
}

/// A run of text rendered in one operation, with its baseline geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// Text of the run
    pub text: String,
    /// Baseline from the start to the end of the run
    pub baseline: LineSegment,
    /// Start of the ascent line
    pub ascent_start: Point,
    /// End of the descent line
    pub descent_end: Point,
    /// Width of one space character in the run's font
    pub single_space_width: f32,
    /// Per-character render information, in order
    #[serde(default)]
    pub glyphs: Vec<GlyphInfo>,
}

impl TextRun {
    /// Create a run without per-character information.
    ///
    /// Use [`TextRun::with_glyphs`] to attach glyphs; a run without glyphs
    /// behaves as a single glyph spanning the whole run.
    pub fn new(
        text: impl Into<String>,
        baseline: LineSegment,
        ascent_start: Point,
        descent_end: Point,
        single_space_width: f32,
    ) -> Self {
        Self {
            text: text.into(),
            baseline,
            ascent_start,
            descent_end,
            single_space_width,
            glyphs: Vec::new(),
        }
    }

    /// Attach per-character render information.
    pub fn with_glyphs(mut self, glyphs: Vec<GlyphInfo>) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Build a horizontal run of fixed-advance glyphs starting at `origin`.
    ///
    /// Each character advances by `advance`; ascent and descent are measured
    /// from the baseline. Handy for synthetic documents and tests.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_locate::geometry::Point;
    /// use pdf_locate::text::TextRun;
    ///
    /// let run = TextRun::horizontal("Hi", Point::new(10.0, 700.0), 6.0, 9.0, 3.0, 3.0);
    /// assert_eq!(run.glyphs.len(), 2);
    /// assert_eq!(run.baseline.end.x, 22.0);
    /// ```
    pub fn horizontal(
        text: &str,
        origin: Point,
        advance: f32,
        ascent: f32,
        descent: f32,
        single_space_width: f32,
    ) -> Self {
        let mut glyphs = Vec::with_capacity(text.chars().count());
        let mut x = origin.x;
        for ch in text.chars() {
            let start = Point::new(x, origin.y);
            let end = Point::new(x + advance, origin.y);
            glyphs.push(GlyphInfo::new(
                ch.to_string(),
                LineSegment::new(start, end),
                Point::new(start.x, origin.y + ascent),
                Point::new(end.x, origin.y - descent),
            ));
            x += advance;
        }

        let end = Point::new(x, origin.y);
        Self {
            text: text.to_string(),
            baseline: LineSegment::new(origin, end),
            ascent_start: Point::new(origin.x, origin.y + ascent),
            descent_end: Point::new(end.x, origin.y - descent),
            single_space_width,
            glyphs,
        }
    }

    /// Glyphs of the run; a run without per-character information yields
    /// one glyph covering the whole run.
    pub fn resolved_glyphs(&self) -> Vec<GlyphInfo> {
        if self.glyphs.is_empty() && !self.text.is_empty() {
            vec![GlyphInfo::new(
                self.text.clone(),
                self.baseline,
                self.ascent_start,
                self.descent_end,
            )]
        } else {
            self.glyphs.clone()
        }
    }
}
