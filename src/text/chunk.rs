//! Geometric text chunks.
//!
//! A chunk is one rendered run reduced to its baseline geometry: the unit
//! orientation vector, a quantized orientation key, the perpendicular
//! distance of the baseline from the origin (the "line" key) and the
//! parallel offsets of its start and end (the "column" along the line).
//!
//! The integer keys make "same orientation" and "same line" plain equality
//! tests that are immune to floating point noise.

use super::glyph::{GlyphInfo, TextRun};
use crate::geometry::Point;

/// Maximum perpendicular deviation, in distance units, between a diacritical
/// mark and the line it belongs to.
pub const DIACRITICAL_MARKS_ALLOWED_VERTICAL_DEVIATION: i32 = 2;

/// Baseline geometry of a chunk.
///
/// All fields are derived from `start`, `end` and `char_space_width` at
/// construction and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChunkLocation {
    start: Point,
    end: Point,
    orientation: Point,
    orientation_magnitude: i32,
    dist_perpendicular: i32,
    dist_parallel_start: f32,
    dist_parallel_end: f32,
    char_space_width: f32,
}

impl ChunkLocation {
    /// Derive the location of a chunk from its baseline.
    ///
    /// A zero-length baseline (diacritics, combining marks) is treated as
    /// horizontal.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_locate::geometry::Point;
    /// use pdf_locate::text::ChunkLocation;
    ///
    /// let loc = ChunkLocation::new(Point::new(10.0, 700.0), Point::new(60.0, 700.0), 3.0);
    /// assert_eq!(loc.orientation_magnitude(), 0);
    /// assert_eq!(loc.dist_perpendicular(), -700);
    /// assert_eq!(loc.dist_parallel_start(), 10.0);
    /// assert_eq!(loc.dist_parallel_end(), 60.0);
    /// ```
    pub fn new(start: Point, end: Point, char_space_width: f32) -> Self {
        let mut direction = end - start;
        if direction.length() == 0.0 {
            direction = Point::new(1.0, 0.0);
        }
        let orientation = direction.normalize();
        let orientation_magnitude = (orientation.y.atan2(orientation.x) * 1000.0).round() as i32;
        // Distance from the origin to the infinite line through the baseline
        let dist_perpendicular = start.cross_z(&orientation).round() as i32;

        Self {
            start,
            end,
            orientation,
            orientation_magnitude,
            dist_perpendicular,
            dist_parallel_start: orientation.dot(&start),
            dist_parallel_end: orientation.dot(&end),
            char_space_width,
        }
    }

    /// Baseline start.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Baseline end.
    pub fn end(&self) -> Point {
        self.end
    }

    /// Unit vector along the baseline.
    pub fn orientation(&self) -> Point {
        self.orientation
    }

    /// Baseline angle in milliradians, rounded.
    pub fn orientation_magnitude(&self) -> i32 {
        self.orientation_magnitude
    }

    /// Signed perpendicular distance of the baseline from the origin, rounded.
    pub fn dist_perpendicular(&self) -> i32 {
        self.dist_perpendicular
    }

    /// Projection of the start point on the orientation vector.
    pub fn dist_parallel_start(&self) -> f32 {
        self.dist_parallel_start
    }

    /// Projection of the end point on the orientation vector.
    pub fn dist_parallel_end(&self) -> f32 {
        self.dist_parallel_end
    }

    /// Width of one space character in the chunk's font.
    pub fn char_space_width(&self) -> f32 {
        self.char_space_width
    }

    /// Whether the baseline has zero length.
    pub fn is_mark(&self) -> bool {
        self.start == self.end
    }

    /// Whether `other` is on the same line as this chunk.
    ///
    /// Orientations must match exactly. Perpendicular distances must match
    /// exactly too, unless one of the chunks is a mark, in which case they
    /// may differ by up to [`DIACRITICAL_MARKS_ALLOWED_VERTICAL_DEVIATION`].
    pub fn same_line(&self, other: &ChunkLocation) -> bool {
        if self.orientation_magnitude != other.orientation_magnitude {
            return false;
        }
        let diff = self.dist_perpendicular - other.dist_perpendicular;
        if diff == 0 {
            return true;
        }
        diff.abs() <= DIACRITICAL_MARKS_ALLOWED_VERTICAL_DEVIATION && (self.is_mark() || other.is_mark())
    }

    /// Distance from the end of `other` to the start of this chunk, along
    /// this chunk's orientation.
    ///
    /// Only meaningful for chunks on the same line.
    pub fn distance_from_end_of(&self, other: &ChunkLocation) -> f32 {
        self.dist_parallel_start - other.dist_parallel_end
    }

    /// Whether a word boundary separates `previous` from this chunk.
    ///
    /// Marks never start a new word. Chunks recorded in reverse order are
    /// measured the other way round; overlapping chunks are never separated.
    pub fn is_at_word_boundary(&self, previous: &ChunkLocation) -> bool {
        if self.is_mark() || previous.is_mark() {
            return false;
        }
        let mut dist = self.distance_from_end_of(previous);
        if dist < 0.0 {
            dist = previous.distance_from_end_of(self);
            if dist < 0.0 {
                return false;
            }
        }
        dist > self.char_space_width / 2.0
    }

    /// Whether `mark` sits on top of `base`: its horizontal extent lies within
    /// the base chunk and both share a line within the diacritic tolerance.
    pub fn contains_mark(base: &ChunkLocation, mark: &ChunkLocation) -> bool {
        base.start.x <= mark.start.x
            && base.end.x >= mark.end.x
            && (base.dist_perpendicular - mark.dist_perpendicular).abs()
                <= DIACRITICAL_MARKS_ALLOWED_VERTICAL_DEVIATION
    }
}

/// A run's text together with its location and glyphs.
#[derive(Debug, Clone, PartialEq)]
pub struct TextChunk {
    /// Text of the run
    pub text: String,
    /// Baseline geometry
    pub location: ChunkLocation,
    /// Per-character render information
    pub glyphs: Vec<GlyphInfo>,
}

impl TextChunk {
    /// Build a chunk from a rendered run.
    pub fn from_run(run: &TextRun) -> Self {
        Self {
            text: run.text.clone(),
            location: ChunkLocation::new(run.baseline.start, run.baseline.end, run.single_space_width),
            glyphs: run.resolved_glyphs(),
        }
    }

    /// Whether the chunk renders whitespace only.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
